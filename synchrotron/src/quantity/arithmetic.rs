use super::{dimension, Quantity};
use std::ops::{Add, Div, Mul, Neg, Sub};

impl<D> Add for Quantity<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_si(self.si_value() + rhs.si_value())
    }
}

impl<D> Sub for Quantity<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_si(self.si_value() - rhs.si_value())
    }
}

impl<D> Neg for Quantity<D> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_si(-self.si_value())
    }
}

impl<D> Mul<f64> for Quantity<D> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_si(self.si_value() * rhs)
    }
}

impl<D> Mul<Quantity<D>> for f64 {
    type Output = Quantity<D>;

    fn mul(self, rhs: Quantity<D>) -> Quantity<D> {
        Quantity::from_si(self * rhs.si_value())
    }
}

impl<D> Div<f64> for Quantity<D> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_si(self.si_value() / rhs)
    }
}

/// The ratio of two quantities of equal dimension is dimensionless
impl<D> Div for Quantity<D> {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.si_value() / rhs.si_value()
    }
}

macro_rules! product {
    ($lhs:ident * $rhs:ident = $output:ident) => {
        impl Mul<Quantity<dimension::$rhs>> for Quantity<dimension::$lhs> {
            type Output = Quantity<dimension::$output>;

            fn mul(self, rhs: Quantity<dimension::$rhs>) -> Self::Output {
                Quantity::from_si(self.si_value() * rhs.si_value())
            }
        }

        impl Mul<Quantity<dimension::$lhs>> for Quantity<dimension::$rhs> {
            type Output = Quantity<dimension::$output>;

            fn mul(self, rhs: Quantity<dimension::$lhs>) -> Self::Output {
                Quantity::from_si(self.si_value() * rhs.si_value())
            }
        }
    };
}

macro_rules! quotient {
    ($numerator:ident / $denominator:ident = $output:ident) => {
        impl Div<Quantity<dimension::$denominator>> for Quantity<dimension::$numerator> {
            type Output = Quantity<dimension::$output>;

            fn div(self, rhs: Quantity<dimension::$denominator>) -> Self::Output {
                Quantity::from_si(self.si_value() / rhs.si_value())
            }
        }
    };
}

macro_rules! reciprocal {
    ($input:ident => $output:ident) => {
        impl Div<Quantity<dimension::$input>> for f64 {
            type Output = Quantity<dimension::$output>;

            fn div(self, rhs: Quantity<dimension::$input>) -> Self::Output {
                Quantity::from_si(self / rhs.si_value())
            }
        }
    };
}

product!(Mass * Velocity = Momentum);
product!(Momentum * Velocity = Energy);
product!(MagneticField * Length = MagneticRigidity);

quotient!(Momentum / Charge = MagneticRigidity);
quotient!(MagneticRigidity / MagneticField = Length);
quotient!(Length / Velocity = Time);
quotient!(Velocity / Frequency = Length);
quotient!(Velocity / Length = Frequency);

reciprocal!(Time => Frequency);
reciprocal!(Frequency => Time);

#[cfg(test)]
mod test {
    use crate::quantity::{
        units::{GIGAELECTRONVOLT_PER_C, TESLA, TESLA_METRE},
        Length, MagneticField, MagneticRigidity, Momentum, Time, Velocity,
    };
    use approx::assert_relative_eq;

    #[test]
    fn rigidity_over_field_is_a_radius() {
        let rigidity = MagneticRigidity::new(3335.64, TESLA_METRE);
        let radius: Length = rigidity / MagneticField::new(4.4, TESLA);
        assert_relative_eq!(radius.si_value(), 758.1, max_relative = 1e-4);
        let recovered: MagneticRigidity = MagneticField::new(4.4, TESLA) * radius;
        assert_relative_eq!(recovered.si_value(), rigidity.si_value(), max_relative = 1e-12);
    }

    #[test]
    fn reciprocal_of_a_period_is_a_frequency() {
        let period = Length::from_si(6283.) / Velocity::from_si(299_792_458.);
        let frequency = 1. / period;
        let back: Time = 1. / frequency;
        assert_relative_eq!(back.si_value(), period.si_value(), max_relative = 1e-15);
    }

    #[test]
    fn ratio_of_equal_dimensions_is_dimensionless() {
        let ratio = Momentum::new(2., GIGAELECTRONVOLT_PER_C) / Momentum::new(0.5, GIGAELECTRONVOLT_PER_C);
        assert_relative_eq!(ratio, 4.);
    }
}
