//! # Beam
//!
//! A `Beam` is a `Particle` at a fixed total energy. It derives the relativistic kinematics of the
//! particle. Every derivation takes an optional total energy which replaces the stored energy for
//! that single call, which is how an energy ramp is explored without building a beam per energy:
//!
//! ```
//! use synchrotron::{particle::PROTON, quantity::{units::GIGAELECTRONVOLT, Energy}, Beam};
//!
//! let beam = Beam::new(PROTON, Energy::new(1000., GIGAELECTRONVOLT));
//! let at_injection = beam.gamma(Some(Energy::new(150., GIGAELECTRONVOLT))).unwrap();
//! assert!(at_injection < beam.gamma(None).unwrap());
//! ```

use crate::{
    error::PhysicsError,
    particle::Particle,
    quantity::{Energy, Momentum},
};
use std::ops::Deref;

#[derive(Copy, Clone, Debug, PartialEq)]
/// A particle species at a given total energy
pub struct Beam {
    particle: Particle,
    total_energy: Energy,
}

impl Deref for Beam {
    type Target = Particle;

    fn deref(&self) -> &Self::Target {
        &self.particle
    }
}

impl Beam {
    pub fn new(particle: Particle, total_energy: Energy) -> Self {
        Self {
            particle,
            total_energy,
        }
    }

    pub fn particle(&self) -> &Particle {
        &self.particle
    }

    /// Returns `total_energy` if specified, otherwise the energy of the beam
    pub fn total_energy(&self, total_energy: Option<Energy>) -> Energy {
        total_energy.unwrap_or(self.total_energy)
    }

    pub fn kinetic_energy(&self, total_energy: Option<Energy>) -> Energy {
        self.total_energy(total_energy) - self.rest_mass_energy()
    }

    /// Returns the relativistic Lorentz factor of the beam particle
    pub fn gamma(&self, total_energy: Option<Energy>) -> Result<f64, PhysicsError> {
        let rest_mass_energy = self.rest_mass_energy();
        if rest_mass_energy.is_zero() {
            return Err(PhysicsError::DivisionByZero {
                quantity: "Lorentz factor",
                denominator: "rest mass energy",
            });
        }
        Ok(self.total_energy(total_energy) / rest_mass_energy)
    }

    /// Returns the relativistic velocity factor `beta = v / c`
    ///
    /// Fails when the total energy is below the rest mass energy, where `beta` would be imaginary.
    pub fn beta(&self, total_energy: Option<Energy>) -> Result<f64, PhysicsError> {
        let gamma = self.gamma(total_energy)?;
        // Negated so a NaN Lorentz factor is rejected too
        if !(gamma >= 1.) {
            return Err(PhysicsError::InvalidPhysicalState {
                total_energy: self.total_energy(total_energy),
                rest_mass_energy: self.rest_mass_energy(),
            });
        }
        Ok((1. - 1. / gamma.powi(2)).sqrt())
    }

    /// Returns the relativistic momentum `gamma m beta c`
    pub fn momentum(&self, total_energy: Option<Energy>) -> Result<Momentum, PhysicsError> {
        let gamma = self.gamma(total_energy)?;
        let beta = self.beta(total_energy)?;
        Ok(gamma * beta * self.mass() * self.speed_of_light())
    }
}
