use crate::{
    error::BesselError,
    function::{bessel_j, bessel_j_derivative},
};
use std::f64::consts::PI;

/// Step used to bracket sign changes, consecutive zeros are always more than π - 0.1 apart
const BRACKET_STEP: f64 = 0.25;
/// Relative step below which a refined zero is accepted
const TOLERANCE: f64 = 1e-14;
const MAXIMUM_ITERATIONS: usize = 100;
/// Largest argument the bracketing scan will walk to
const MAXIMUM_SEARCH_LIMIT: f64 = 1e5;

/// Returns the first `count` positive zeros of `J_order` in ascending order
///
/// `J_n` has no positive zeros below `x = n`, so the search starts there and walks the real axis in
/// steps of `BRACKET_STEP`. Each sign change is refined with a Newton iteration safeguarded by the
/// bracket. Requests whose zeros lie beyond `MAXIMUM_SEARCH_LIMIT` fail with
/// `BesselError::Exhausted` before any evaluation.
pub fn bessel_j_zeros(order: u32, count: usize) -> Result<Vec<f64>, BesselError> {
    // McMahon's expansion puts the m-th zero near (m + n/2 - 1/4)π
    let search_limit = (count as f64 + f64::from(order)) * PI + 10.;
    if !(search_limit <= MAXIMUM_SEARCH_LIMIT) {
        return Err(BesselError::Exhausted {
            order,
            found: 0,
            requested: count,
        });
    }
    let mut zeros = Vec::new();

    let mut lower = f64::from(order);
    let mut value_at_lower = bessel_j(order, lower);

    while zeros.len() < count {
        let upper = lower + BRACKET_STEP;
        if upper > search_limit {
            return Err(BesselError::Exhausted {
                order,
                found: zeros.len(),
                requested: count,
            });
        }
        let value_at_upper = bessel_j(order, upper);
        if value_at_upper == 0. {
            zeros.push(upper);
        } else if value_at_lower * value_at_upper < 0. {
            zeros.push(refine(order, lower, upper, value_at_lower));
        }
        lower = upper;
        value_at_lower = value_at_upper;
    }

    Ok(zeros)
}

/// Refines a zero of `J_order` known to lie in `(lower, upper)`
fn refine(order: u32, mut lower: f64, mut upper: f64, value_at_lower: f64) -> f64 {
    let negative_below = value_at_lower < 0.;
    let mut root = 0.5 * (lower + upper);

    for _ in 0..MAXIMUM_ITERATIONS {
        let value = bessel_j(order, root);
        if value == 0. {
            return root;
        }
        if (value < 0.) == negative_below {
            lower = root;
        } else {
            upper = root;
        }

        let slope = bessel_j_derivative(order, root);
        let newton = root - value / slope;
        let next = if slope != 0. && newton > lower && newton < upper {
            newton
        } else {
            0.5 * (lower + upper)
        };

        if (next - root).abs() <= TOLERANCE * next.abs() {
            return next;
        }
        root = next;
    }
    root
}

#[cfg(test)]
mod test {
    use super::bessel_j_zeros;
    use crate::{error::BesselError, function::bessel_j};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn first_zeros_of_the_zeroth_order() {
        let zeros = bessel_j_zeros(0, 3).unwrap();
        assert_eq!(zeros.len(), 3);
        assert_relative_eq!(zeros[0], 2.404_825_557_695_773, max_relative = 1e-12);
        assert_relative_eq!(zeros[1], 5.520_078_110_286_311, max_relative = 1e-12);
        assert_relative_eq!(zeros[2], 8.653_727_912_911_013, max_relative = 1e-12);
    }

    #[test]
    fn first_zeros_of_higher_orders() {
        assert_relative_eq!(
            bessel_j_zeros(1, 1).unwrap()[0],
            3.831_705_970_207_512,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            bessel_j_zeros(2, 1).unwrap()[0],
            5.135_622_301_840_683,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            bessel_j_zeros(5, 1).unwrap()[0],
            8.771_483_815_959_954,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            bessel_j_zeros(10, 1).unwrap()[0],
            14.475_500_686_554_54,
            max_relative = 1e-12
        );
    }

    #[test]
    fn out_of_reach_zeros_are_exhausted() {
        assert_eq!(
            bessel_j_zeros(0, usize::MAX),
            Err(BesselError::Exhausted {
                order: 0,
                found: 0,
                requested: usize::MAX
            })
        );
        assert_eq!(
            bessel_j_zeros(u32::MAX, 1),
            Err(BesselError::Exhausted {
                order: u32::MAX,
                found: 0,
                requested: 1
            })
        );
    }

    #[test]
    fn no_zeros_requested() {
        assert!(bessel_j_zeros(3, 0).unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn zeros_are_ascending_roots(order in 0u32..8, count in 1usize..8) {
            let zeros = bessel_j_zeros(order, count).unwrap();
            prop_assert_eq!(zeros.len(), count);
            prop_assert!(zeros[0] > f64::from(order));
            for zero in zeros.iter() {
                prop_assert!(bessel_j(order, *zero).abs() < 1e-12);
            }
            for pair in zeros.windows(2) {
                prop_assert!(pair[1] - pair[0] > 3.);
            }
        }
    }
}
