//! Named units available for constructing and displaying quantities

use super::{dimension, Unit};
use crate::constants::{ELEMENTARY_CHARGE, SPEED_OF_LIGHT};

pub const KILOGRAM: Unit<dimension::Mass> = Unit::new("kg", 1.);
pub const GIGAELECTRONVOLT_PER_C2: Unit<dimension::Mass> = Unit::new(
    "GeV/c^2",
    1e9 * ELEMENTARY_CHARGE / (SPEED_OF_LIGHT * SPEED_OF_LIGHT),
);
pub const MEGAELECTRONVOLT_PER_C2: Unit<dimension::Mass> = Unit::new(
    "MeV/c^2",
    1e6 * ELEMENTARY_CHARGE / (SPEED_OF_LIGHT * SPEED_OF_LIGHT),
);

pub const COULOMB: Unit<dimension::Charge> = Unit::new("C", 1.);
pub const ELEMENTARY: Unit<dimension::Charge> = Unit::new("e", ELEMENTARY_CHARGE);

pub const METRE_PER_SECOND: Unit<dimension::Velocity> = Unit::new("m/s", 1.);
pub const SPEED_OF_LIGHT_UNIT: Unit<dimension::Velocity> = Unit::new("c", SPEED_OF_LIGHT);

pub const JOULE: Unit<dimension::Energy> = Unit::new("J", 1.);
pub const ELECTRONVOLT: Unit<dimension::Energy> = Unit::new("eV", ELEMENTARY_CHARGE);
pub const KILOELECTRONVOLT: Unit<dimension::Energy> = Unit::new("keV", 1e3 * ELEMENTARY_CHARGE);
pub const MEGAELECTRONVOLT: Unit<dimension::Energy> = Unit::new("MeV", 1e6 * ELEMENTARY_CHARGE);
pub const GIGAELECTRONVOLT: Unit<dimension::Energy> = Unit::new("GeV", 1e9 * ELEMENTARY_CHARGE);
pub const TERAELECTRONVOLT: Unit<dimension::Energy> = Unit::new("TeV", 1e12 * ELEMENTARY_CHARGE);

pub const KILOGRAM_METRE_PER_SECOND: Unit<dimension::Momentum> = Unit::new("kg m/s", 1.);
pub const GIGAELECTRONVOLT_PER_C: Unit<dimension::Momentum> =
    Unit::new("GeV/c", 1e9 * ELEMENTARY_CHARGE / SPEED_OF_LIGHT);

pub const METRE: Unit<dimension::Length> = Unit::new("m", 1.);
pub const KILOMETRE: Unit<dimension::Length> = Unit::new("km", 1e3);
pub const CENTIMETRE: Unit<dimension::Length> = Unit::new("cm", 1e-2);
pub const MILLIMETRE: Unit<dimension::Length> = Unit::new("mm", 1e-3);

pub const SECOND: Unit<dimension::Time> = Unit::new("s", 1.);
pub const MILLISECOND: Unit<dimension::Time> = Unit::new("ms", 1e-3);
pub const MICROSECOND: Unit<dimension::Time> = Unit::new("us", 1e-6);
pub const NANOSECOND: Unit<dimension::Time> = Unit::new("ns", 1e-9);

pub const HERTZ: Unit<dimension::Frequency> = Unit::new("Hz", 1.);
pub const KILOHERTZ: Unit<dimension::Frequency> = Unit::new("kHz", 1e3);
pub const MEGAHERTZ: Unit<dimension::Frequency> = Unit::new("MHz", 1e6);
pub const GIGAHERTZ: Unit<dimension::Frequency> = Unit::new("GHz", 1e9);

pub const TESLA: Unit<dimension::MagneticField> = Unit::new("T", 1.);

pub const TESLA_METRE: Unit<dimension::MagneticRigidity> = Unit::new("T m", 1.);
