//! # Cavity
//!
//! Resonances of a vacuum-filled cylindrical (pillbox) cavity. The transverse magnetic mode
//! `TM_nml` of a cavity of radius `a` and length `d` resonates at
//!
//! ```text
//! f_nml = c / 2π sqrt((p_nm / a)^2 + (l π / d)^2)
//! ```
//!
//! where `p_nm` is the `m`-th zero of the Bessel function `J_n`. The zeros are looked up through
//! the `BesselZeros` trait, the `_with` variants accept a custom provider.

use crate::{
    constants::SPEED_OF_LIGHT,
    error::PhysicsError,
    quantity::{Frequency, Length, Velocity},
};
use std::f64::consts::PI;
use synchrotron_bessel::{Bessel, BesselZeros};

#[derive(Copy, Clone, Debug, PartialEq)]
/// An RF cavity tuned to a single frequency
pub struct Cavity {
    frequency: Frequency,
}

impl Cavity {
    pub fn new(frequency: Frequency) -> Self {
        Self { frequency }
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Radius of a cylindrical cavity whose TM010 mode resonates at the cavity frequency
    pub fn radius_for_tm010(&self) -> Result<Length, PhysicsError> {
        self.radius_for_tm010_with(&Bessel)
    }

    /// As [`Cavity::radius_for_tm010`], looking up the Bessel zero in `zeros`
    pub fn radius_for_tm010_with<Z: BesselZeros + ?Sized>(
        &self,
        zeros: &Z,
    ) -> Result<Length, PhysicsError> {
        if self.frequency.is_zero() {
            return Err(PhysicsError::DivisionByZero {
                quantity: "cavity radius",
                denominator: "cavity frequency",
            });
        }
        let p_01 = zeros.bessel_j_zero(0, 1)?;
        Ok(speed_of_light() / self.frequency * (p_01 / (2. * PI)))
    }

    /// Radius of the cavity under its historical name
    ///
    /// The geometry is that of [`Cavity::radius_for_tm010`], the lowest transverse magnetic mode
    /// with no longitudinal variation.
    pub fn radius_for_tm101(&self) -> Result<Length, PhysicsError> {
        self.radius_for_tm010()
    }

    /// As [`Cavity::radius_for_tm101`], looking up the Bessel zero in `zeros`
    pub fn radius_for_tm101_with<Z: BesselZeros + ?Sized>(
        &self,
        zeros: &Z,
    ) -> Result<Length, PhysicsError> {
        self.radius_for_tm010_with(zeros)
    }

    /// Full width of the resonance for a cavity of quality factor `quality_factor`
    pub fn bandwidth(&self, quality_factor: f64) -> Result<Frequency, PhysicsError> {
        if quality_factor == 0. {
            return Err(PhysicsError::DivisionByZero {
                quantity: "cavity bandwidth",
                denominator: "quality factor",
            });
        }
        Ok(self.frequency / quality_factor)
    }
}

/// Resonant frequency of the `TM_nml` mode of a vacuum-filled cylindrical cavity
///
/// - `radius`: radius of the cavity
/// - `length`: length of the cavity
/// - `n`: order of the Bessel function
/// - `m`: index of the zero of `J_n`, counting from one
/// - `l`: longitudinal mode number
pub fn resonant_frequency(
    radius: Length,
    length: Length,
    n: u32,
    m: usize,
    l: u32,
) -> Result<Frequency, PhysicsError> {
    resonant_frequency_with(&Bessel, radius, length, n, m, l)
}

/// As [`resonant_frequency`], looking up the Bessel zero in `zeros`
pub fn resonant_frequency_with<Z: BesselZeros + ?Sized>(
    zeros: &Z,
    radius: Length,
    length: Length,
    n: u32,
    m: usize,
    l: u32,
) -> Result<Frequency, PhysicsError> {
    if radius.is_zero() {
        return Err(PhysicsError::DivisionByZero {
            quantity: "resonant frequency",
            denominator: "cavity radius",
        });
    }
    let p_nm = zeros.bessel_j_zero(n, m)?;
    // Both wavenumbers are scaled by the radius, so (l π / d) a
    let longitudinal = match l {
        0 => 0.,
        l => {
            if length.is_zero() {
                return Err(PhysicsError::DivisionByZero {
                    quantity: "resonant frequency",
                    denominator: "cavity length",
                });
            }
            f64::from(l) * PI * (radius / length)
        }
    };
    let scaled_wavenumber = (p_nm.powi(2) + longitudinal.powi(2)).sqrt();
    Ok(speed_of_light() / radius * (scaled_wavenumber / (2. * PI)))
}

fn speed_of_light() -> Velocity {
    Velocity::from_si(SPEED_OF_LIGHT)
}

#[cfg(test)]
mod test {
    use super::{resonant_frequency, resonant_frequency_with, Cavity};
    use crate::{
        error::PhysicsError,
        quantity::{
            units::{CENTIMETRE, KILOHERTZ, MEGAHERTZ, METRE},
            Frequency, Length,
        },
    };
    use approx::assert_relative_eq;
    use synchrotron_bessel::{BesselError, BesselZeros};

    fn cavity() -> Cavity {
        Cavity::new(Frequency::new(10., MEGAHERTZ))
    }

    #[test]
    fn radius_for_tm010() {
        let radius = cavity().radius_for_tm010().unwrap();
        // c / 2π × 2.404825557695773 / 10 MHz
        assert_relative_eq!(radius.value_in(METRE), 11.474_252_783_521, max_relative = 1e-10);
    }

    #[test]
    fn tm010_mode_of_the_matched_radius_is_the_cavity_frequency() {
        let radius = cavity().radius_for_tm010().unwrap();
        let frequency = resonant_frequency(radius, Length::new(50., CENTIMETRE), 0, 1, 0).unwrap();
        assert_relative_eq!(
            frequency.value_in(MEGAHERTZ),
            10.,
            max_relative = 1e-12
        );
    }

    #[test]
    fn long_cavity_limit_of_tm011() {
        let radius = cavity().radius_for_tm010().unwrap();
        let frequency = resonant_frequency(radius, Length::new(1e12, METRE), 0, 1, 1).unwrap();
        assert_relative_eq!(
            frequency.value_in(MEGAHERTZ),
            cavity().frequency().value_in(MEGAHERTZ),
            max_relative = 1e-12
        );
    }

    #[test]
    fn tm011_of_a_short_cavity() {
        let radius = cavity().radius_for_tm010().unwrap();
        let frequency = resonant_frequency(radius, Length::new(50., CENTIMETRE), 0, 1, 1).unwrap();
        assert_relative_eq!(
            frequency.value_in(MEGAHERTZ),
            299.959_193_680_876_8,
            max_relative = 1e-10
        );
    }

    #[test]
    fn higher_radial_modes_resonate_higher() {
        let radius = Length::new(0.5, METRE);
        let length = Length::new(1., METRE);
        let tm010 = resonant_frequency(radius, length, 0, 1, 0).unwrap();
        let tm020 = resonant_frequency(radius, length, 0, 2, 0).unwrap();
        let tm110 = resonant_frequency(radius, length, 1, 1, 0).unwrap();
        assert!(tm020 > tm110 && tm110 > tm010);
        assert_relative_eq!(
            tm020.si_value() / tm010.si_value(),
            5.520_078_110_286_311 / 2.404_825_557_695_773,
            max_relative = 1e-12
        );
    }

    #[test]
    fn bandwidth() {
        let bandwidth = cavity().bandwidth(1e4).unwrap();
        assert_relative_eq!(bandwidth.value_in(KILOHERTZ), 1., max_relative = 1e-12);
        assert!(matches!(
            cavity().bandwidth(0.),
            Err(PhysicsError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn radius_for_tm101_is_the_tm010_geometry() {
        let radius = cavity().radius_for_tm101().unwrap();
        assert_relative_eq!(radius.value_in(METRE), 11.474_252_783_521, max_relative = 1e-10);
        assert_eq!(radius, cavity().radius_for_tm010().unwrap());
        assert_eq!(
            cavity().radius_for_tm101_with(&Tabulated).unwrap(),
            cavity().radius_for_tm010_with(&Tabulated).unwrap()
        );
    }

    #[test]
    fn unreachable_mode_index_is_an_error() {
        let radius = Length::new(1., METRE);
        let result = resonant_frequency(radius, radius, 0, usize::MAX, 0);
        assert!(matches!(
            result,
            Err(PhysicsError::Bessel(BesselError::Exhausted { order: 0, found: 0, .. }))
        ));
    }

    #[test]
    fn degenerate_geometries_are_rejected() {
        assert!(Cavity::new(Frequency::zero()).radius_for_tm010().is_err());
        assert!(resonant_frequency(Length::zero(), Length::new(1., METRE), 0, 1, 0).is_err());
        assert!(resonant_frequency(Length::new(1., METRE), Length::zero(), 0, 1, 1).is_err());
        assert!(resonant_frequency(Length::new(1., METRE), Length::zero(), 0, 1, 0).is_ok());
    }

    #[test]
    fn zeroth_bessel_zero_is_an_invalid_mode() {
        let result = resonant_frequency(Length::new(1., METRE), Length::new(1., METRE), 0, 0, 0);
        assert!(matches!(
            result,
            Err(PhysicsError::Bessel(BesselError::ZeroIndex { order: 0 }))
        ));
    }

    struct Tabulated;

    impl BesselZeros for Tabulated {
        fn bessel_j_zeros(&self, order: u32, count: usize) -> Result<Vec<f64>, BesselError> {
            match order {
                0 => Ok([2.404_825_557_695_773, 5.520_078_110_286_311]
                    .into_iter()
                    .take(count)
                    .collect()),
                _ => Err(BesselError::Exhausted {
                    order,
                    found: 0,
                    requested: count,
                }),
            }
        }
    }

    #[test]
    fn custom_zero_provider() {
        let tabulated = cavity().radius_for_tm010_with(&Tabulated).unwrap();
        let computed = cavity().radius_for_tm010().unwrap();
        assert_relative_eq!(tabulated.si_value(), computed.si_value(), max_relative = 1e-12);

        let radius = Length::new(1., METRE);
        assert!(resonant_frequency_with(&Tabulated, radius, radius, 1, 1, 0).is_err());
    }
}
