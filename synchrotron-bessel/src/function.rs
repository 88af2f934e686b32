use std::f64::consts::PI;

/// Extra quadrature nodes beyond the bandwidth of the integrand
const QUADRATURE_PADDING: usize = 64;

/// Evaluates the Bessel function of the first kind `J_order(x)`
///
/// Uses Bessel's integral
///
/// ```text
/// J_n(x) = 1 / 2π ∫₀²ᵖⁱ cos(nτ - x sin τ) dτ
/// ```
///
/// The integrand is smooth and periodic so the trapezoidal rule converges geometrically once the
/// number of nodes exceeds `|x| + n`. Aliasing of the rule contributes terms of order `J_{N-n}(x)`,
/// which are negligible for the node counts chosen here.
pub fn bessel_j(order: u32, x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let n = f64::from(order);
    let number_of_nodes = number_of_quadrature_nodes(order, x);
    let step = 2. * PI / number_of_nodes as f64;

    (0..number_of_nodes)
        .map(|k| {
            let tau = step * k as f64;
            (n * tau - x * tau.sin()).cos()
        })
        .sum::<f64>()
        / number_of_nodes as f64
}

/// Evaluates `dJ_order / dx` through the recurrence `2 J_n' = J_{n-1} - J_{n+1}`
pub fn bessel_j_derivative(order: u32, x: f64) -> f64 {
    match order {
        0 => -bessel_j(1, x),
        n => match n.checked_add(1) {
            Some(next) => 0.5 * (bessel_j(n - 1, x) - bessel_j(next, x)),
            None => f64::NAN,
        },
    }
}

fn number_of_quadrature_nodes(order: u32, x: f64) -> usize {
    2 * (x.abs() + f64::from(order)).ceil() as usize + QUADRATURE_PADDING
}

#[cfg(test)]
mod test {
    use super::{bessel_j, bessel_j_derivative};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn values_at_the_origin() {
        assert_relative_eq!(bessel_j(0, 0.), 1.);
        for order in 1..6 {
            assert!(bessel_j(order, 0.).abs() < 1e-15);
        }
    }

    #[test]
    fn tabulated_values() {
        assert_relative_eq!(bessel_j(0, 1.), 0.765_197_686_557_966_6, epsilon = 1e-14);
        assert_relative_eq!(bessel_j(1, 1.), 0.440_050_585_744_933_5, epsilon = 1e-14);
        assert_relative_eq!(bessel_j(2, 5.), 0.046_565_116_277_752_22, epsilon = 1e-14);
        assert_relative_eq!(bessel_j(5, 10.), -0.234_061_528_186_793_6, epsilon = 1e-14);
        assert_relative_eq!(bessel_j(0, 30.), -0.086_367_983_581_040_23, epsilon = 1e-13);
    }

    #[test]
    fn odd_orders_are_odd_functions() {
        assert_relative_eq!(bessel_j(3, -2.5), -bessel_j(3, 2.5), epsilon = 1e-15);
        assert_relative_eq!(bessel_j(2, -2.5), bessel_j(2, 2.5), epsilon = 1e-15);
    }

    #[test]
    fn non_finite_arguments_are_nan() {
        assert!(bessel_j(0, f64::INFINITY).is_nan());
        assert!(bessel_j(1, f64::NAN).is_nan());
    }

    #[test]
    fn derivative_of_the_largest_order_is_nan() {
        assert!(bessel_j_derivative(u32::MAX, 1.).is_nan());
    }

    #[test]
    fn derivative_matches_a_central_difference() {
        let h = 1e-5;
        for order in 0..4 {
            for &x in &[0.5, 2., 7.3] {
                let difference = (bessel_j(order, x + h) - bessel_j(order, x - h)) / (2. * h);
                assert_relative_eq!(bessel_j_derivative(order, x), difference, epsilon = 1e-8);
            }
        }
    }

    proptest! {
        #[test]
        fn three_term_recurrence_holds(order in 1u32..12, x in 0.1f64..40.) {
            let lhs = bessel_j(order - 1, x) + bessel_j(order + 1, x);
            let rhs = 2. * f64::from(order) / x * bessel_j(order, x);
            prop_assert!((lhs - rhs).abs() < 1e-11);
        }
    }
}
