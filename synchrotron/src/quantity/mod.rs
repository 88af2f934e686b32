//! # Quantities
//!
//! Physical values which carry their dimension in the type system.
//!
//! A `Quantity<D>` stores its magnitude in coherent SI units, the zero-sized marker `D` records the
//! dimension. Quantities are constructed from a value in a named [`Unit`] and converted back to a
//! target unit only for display:
//!
//! ```
//! use synchrotron::quantity::{units::{GIGAELECTRONVOLT, JOULE}, Energy};
//!
//! let energy = Energy::new(1.0, GIGAELECTRONVOLT);
//! assert!((energy.value_in(JOULE) - 1.602_176_634e-10).abs() < 1e-22);
//! ```
//!
//! Addition and subtraction are only defined between equal dimensions, the ratio of two equal
//! dimensions is a bare `f64`, and the cross-dimension products needed by the accelerator
//! formulas are implemented in `arithmetic`.

mod arithmetic;
pub mod dimension;
pub mod units;

pub use dimension::Dimension;

use serde::{Deserialize, Serialize};
use std::{fmt, marker::PhantomData};

pub type Mass = Quantity<dimension::Mass>;
pub type Charge = Quantity<dimension::Charge>;
pub type Velocity = Quantity<dimension::Velocity>;
pub type Energy = Quantity<dimension::Energy>;
pub type Momentum = Quantity<dimension::Momentum>;
pub type Length = Quantity<dimension::Length>;
pub type Time = Quantity<dimension::Time>;
pub type Frequency = Quantity<dimension::Frequency>;
pub type MagneticField = Quantity<dimension::MagneticField>;
pub type MagneticRigidity = Quantity<dimension::MagneticRigidity>;

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
/// A physical value of dimension `D`, stored in SI units
pub struct Quantity<D> {
    value: f64,
    #[serde(skip)]
    dimension: PhantomData<D>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
/// A named unit of dimension `D`, defined by its size in SI units
pub struct Unit<D> {
    symbol: &'static str,
    scale: f64,
    dimension: PhantomData<D>,
}

impl<D> Unit<D> {
    /// Defines a unit worth `scale` of the SI unit of `D`
    pub const fn new(symbol: &'static str, scale: f64) -> Self {
        Self {
            symbol,
            scale,
            dimension: PhantomData,
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl<D> Quantity<D> {
    /// Wraps a magnitude which is already expressed in SI units
    pub const fn from_si(value: f64) -> Self {
        Self {
            value,
            dimension: PhantomData,
        }
    }

    /// The magnitude in SI units
    pub fn si_value(&self) -> f64 {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0.
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }

    pub fn abs(self) -> Self {
        Self::from_si(self.value.abs())
    }
}

impl<D: Dimension> Quantity<D> {
    pub fn new(value: f64, unit: Unit<D>) -> Self {
        Self::from_si(value * unit.scale)
    }

    pub fn zero() -> Self {
        Self::from_si(0.)
    }

    /// The magnitude expressed in `unit`
    pub fn value_in(&self, unit: Unit<D>) -> f64 {
        self.value / unit.scale
    }

    /// A view of the quantity which displays in `unit` rather than the SI unit
    pub fn display_in(&self, unit: Unit<D>) -> InUnit {
        InUnit {
            value: self.value_in(unit),
            symbol: unit.symbol,
        }
    }
}

impl<D: Dimension> fmt::Display for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_magnitude(f, self.value, D::SYMBOL)
    }
}

/// A quantity converted to a display unit, created by [`Quantity::display_in`]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InUnit {
    value: f64,
    symbol: &'static str,
}

impl fmt::Display for InUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_magnitude(f, self.value, self.symbol)
    }
}

fn write_magnitude(f: &mut fmt::Formatter, value: f64, symbol: &str) -> fmt::Result {
    match f.precision() {
        Some(precision) => write!(f, "{:.*} {}", precision, value, symbol),
        None => write!(f, "{} {}", value, symbol),
    }
}
