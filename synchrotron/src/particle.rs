//! # Particle
//!
//! The leaf of the calculation chain: a rest mass, a charge and the speed of light used
//! throughout a calculation. Every particle entering one calculation must share the same
//! speed-of-light constant, the predefined species all use [`SPEED_OF_LIGHT`].

use crate::{
    constants::{ELECTRON_MASS, ELEMENTARY_CHARGE, PROTON_MASS, SPEED_OF_LIGHT},
    quantity::{Charge, Energy, Mass, Velocity},
};

#[derive(Copy, Clone, Debug, PartialEq)]
/// A particle species, defined by its rest mass and charge
pub struct Particle {
    mass: Mass,
    charge: Charge,
    speed_of_light: Velocity,
}

pub const PROTON: Particle = Particle::new(
    Mass::from_si(PROTON_MASS),
    Charge::from_si(ELEMENTARY_CHARGE),
    Velocity::from_si(SPEED_OF_LIGHT),
);

pub const ANTIPROTON: Particle = Particle::new(
    Mass::from_si(PROTON_MASS),
    Charge::from_si(-ELEMENTARY_CHARGE),
    Velocity::from_si(SPEED_OF_LIGHT),
);

pub const ELECTRON: Particle = Particle::new(
    Mass::from_si(ELECTRON_MASS),
    Charge::from_si(-ELEMENTARY_CHARGE),
    Velocity::from_si(SPEED_OF_LIGHT),
);

pub const POSITRON: Particle = Particle::new(
    Mass::from_si(ELECTRON_MASS),
    Charge::from_si(ELEMENTARY_CHARGE),
    Velocity::from_si(SPEED_OF_LIGHT),
);

impl Particle {
    pub const fn new(mass: Mass, charge: Charge, speed_of_light: Velocity) -> Self {
        Self {
            mass,
            charge,
            speed_of_light,
        }
    }

    /// The rest mass energy `m c^2`
    pub fn rest_mass_energy(&self) -> Energy {
        self.mass * self.speed_of_light * self.speed_of_light
    }

    pub fn speed_of_light(&self) -> Velocity {
        self.speed_of_light
    }

    pub fn mass(&self) -> Mass {
        self.mass
    }

    pub fn charge(&self) -> Charge {
        self.charge
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[non_exhaustive]
/// Enum with all predefined particle species
///
/// As species may be added in future this is labelled as `non_exhaustive`
pub enum Species {
    Proton,
    Antiproton,
    Electron,
    Positron,
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Species::Proton => write!(f, "proton"),
            Species::Antiproton => write!(f, "antiproton"),
            Species::Electron => write!(f, "electron"),
            Species::Positron => write!(f, "positron"),
        }
    }
}

impl Species {
    /// The predefined `Particle` for this species
    pub fn particle(&self) -> Particle {
        match self {
            Species::Proton => PROTON,
            Species::Antiproton => ANTIPROTON,
            Species::Electron => ELECTRON,
            Species::Positron => POSITRON,
        }
    }
}
