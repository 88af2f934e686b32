// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Bessel functions of the first kind and their zeros
//!
//! The cavity resonance calculations need the positive zeros of `J_n`. This crate evaluates
//! `J_n(x)` from Bessel's integral and brackets the zeros by walking along the real axis.

mod error;
mod function;
mod zeros;

pub use error::BesselError;
pub use function::{bessel_j, bessel_j_derivative};
pub use zeros::bessel_j_zeros;

/// A provider of the positive zeros of the Bessel function of the first kind
///
/// Consumers only ever need the highest requested zero, so the trait provides that as a
/// default method.
pub trait BesselZeros {
    /// Returns the first `count` positive zeros of `J_order` in ascending order
    fn bessel_j_zeros(&self, order: u32, count: usize) -> Result<Vec<f64>, BesselError>;

    /// Returns the `index`-th positive zero of `J_order`, counting from one
    fn bessel_j_zero(&self, order: u32, index: usize) -> Result<f64, BesselError> {
        if index == 0 {
            return Err(BesselError::ZeroIndex { order });
        }
        self.bessel_j_zeros(order, index)?
            .pop()
            .ok_or(BesselError::Exhausted {
                order,
                found: 0,
                requested: index,
            })
    }
}

#[derive(Copy, Clone, Debug, Default)]
/// The default zero provider, backed by [`bessel_j_zeros`]
pub struct Bessel;

impl BesselZeros for Bessel {
    fn bessel_j_zeros(&self, order: u32, count: usize) -> Result<Vec<f64>, BesselError> {
        bessel_j_zeros(order, count)
    }
}

#[cfg(test)]
mod test {
    use super::{Bessel, BesselError, BesselZeros};

    #[test]
    fn zeroth_zero_is_rejected() {
        let result = Bessel.bessel_j_zero(0, 0);
        assert!(matches!(result, Err(BesselError::ZeroIndex { order: 0 })));
    }

    #[test]
    fn indexed_zero_is_the_last_of_the_sequence() {
        let zeros = Bessel.bessel_j_zeros(2, 3).unwrap();
        let third = Bessel.bessel_j_zero(2, 3).unwrap();
        approx::assert_relative_eq!(zeros[2], third);
    }
}
