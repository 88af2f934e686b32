use crate::quantity::{
    units::{GIGAELECTRONVOLT, METRE},
    Energy, Length, MagneticField,
};
use miette::Diagnostic;
use synchrotron_bessel::BesselError;

#[derive(thiserror::Error, Debug, Diagnostic)]
/// Error for derived quantities requested for an unphysical input
pub enum PhysicsError {
    #[error(
        "total energy {:.6} is below the rest mass energy {:.6}",
        .total_energy.display_in(GIGAELECTRONVOLT),
        .rest_mass_energy.display_in(GIGAELECTRONVOLT)
    )]
    #[diagnostic(
        code(synchrotron::invalid_physical_state),
        help("the total energy includes the rest mass energy, velocities are undefined below it")
    )]
    InvalidPhysicalState {
        total_energy: Energy,
        rest_mass_energy: Energy,
    },
    #[error("cannot compute the {quantity}, the {denominator} is zero")]
    #[diagnostic(code(synchrotron::division_by_zero))]
    DivisionByZero {
        quantity: &'static str,
        denominator: &'static str,
    },
    #[error(transparent)]
    #[diagnostic(transparent)]
    Bessel(#[from] BesselError),
}

#[derive(thiserror::Error, Debug, Diagnostic)]
/// Error for the construction of an `Accelerator`
pub enum BuildError {
    #[error("the harmonic number must be positive, got {0}")]
    #[diagnostic(
        code(synchrotron::harmonic_number),
        help("the harmonic number counts the RF buckets around the ring")
    )]
    HarmonicNumber(u32),
    #[error("the circumference must be positive and finite, got {:.3}", .0.display_in(METRE))]
    #[diagnostic(code(synchrotron::circumference))]
    Circumference(Length),
    #[error("the maximum dipole field must be finite, got {0}")]
    #[diagnostic(code(synchrotron::dipole_field))]
    DipoleField(MagneticField),
}
