use miette::Diagnostic;

#[derive(thiserror::Error, Debug, Diagnostic, PartialEq)]
/// Errors raised while locating the zeros of a Bessel function
pub enum BesselError {
    #[error("Bessel zeros are counted from one, index 0 was requested for J_{order}")]
    #[diagnostic(code(synchrotron_bessel::zero_index))]
    ZeroIndex { order: u32 },
    #[error("found {found} of the {requested} requested zeros of J_{order} before the search window closed")]
    #[diagnostic(code(synchrotron_bessel::exhausted))]
    Exhausted {
        order: u32,
        found: usize,
        requested: usize,
    },
}
