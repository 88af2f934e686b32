//! # Accelerator
//!
//! Quantities related to the machine rather than to the beam it accelerates: the revolution and RF
//! frequencies, the bending radius in the dipoles and the number of dipoles needed to close the
//! orbit.
//!
//! Every method accepting an `Option<Energy>` forwards it to the `Beam`, so the machine can be
//! evaluated at any point of the energy ramp without altering the stored beam. Failures of the
//! underlying kinematics propagate as `PhysicsError`.
//!
//! The harmonic number is the only parameter which can change after construction. Callers that
//! share an `Accelerator` should use `with_harmonic_number`, which returns a new value;
//! `update_harmonic_number` mutates in place and so needs exclusive access.

mod builder;

pub use builder::AcceleratorBuilder;

use crate::{
    beam::Beam,
    error::{BuildError, PhysicsError},
    quantity::{Energy, Frequency, Length, MagneticField, MagneticRigidity, Time, Velocity},
};
use std::f64::consts::PI;

#[derive(Clone, Debug, PartialEq)]
/// A circular machine holding a `Beam`
pub struct Accelerator {
    speed_of_light: Velocity,
    beam: Beam,
    harmonic_number: u32,
    circumference: Length,
    max_dipole_field: MagneticField,
}

#[derive(Copy, Clone, Debug, PartialEq)]
/// The machine frequencies at a single total energy
pub struct SweepPoint {
    pub total_energy: Energy,
    pub revolution_frequency: Frequency,
    pub rf_frequency: Frequency,
}

impl Accelerator {
    /// Builds an `Accelerator`, equivalent to the fully specified `AcceleratorBuilder`
    pub fn new(
        beam: Beam,
        circumference: Length,
        harmonic_number: u32,
        max_dipole_field: MagneticField,
    ) -> Result<Self, BuildError> {
        AcceleratorBuilder::new()
            .with_beam(beam)
            .with_circumference(circumference)
            .with_harmonic_number(harmonic_number)
            .with_max_dipole_field(max_dipole_field)
            .build()
    }

    pub fn beam(&self) -> &Beam {
        &self.beam
    }

    pub fn speed_of_light(&self) -> Velocity {
        self.speed_of_light
    }

    pub fn harmonic_number(&self) -> u32 {
        self.harmonic_number
    }

    pub fn max_dipole_field(&self) -> MagneticField {
        self.max_dipole_field
    }

    /// The average circumference of the closed orbit
    pub fn circumference(&self) -> Length {
        self.circumference
    }

    /// Time taken for one turn of the ring
    pub fn revolution_period(&self, total_energy: Option<Energy>) -> Result<Time, PhysicsError> {
        let beta = self.beam.beta(total_energy)?;
        if beta == 0. {
            return Err(PhysicsError::DivisionByZero {
                quantity: "revolution period",
                denominator: "beam velocity",
            });
        }
        Ok(self.circumference / (beta * self.speed_of_light))
    }

    pub fn revolution_frequency(
        &self,
        total_energy: Option<Energy>,
    ) -> Result<Frequency, PhysicsError> {
        Ok(1. / self.revolution_period(total_energy)?)
    }

    /// The RF frequency, the harmonic number times the revolution frequency
    pub fn rf_frequency(&self, total_energy: Option<Energy>) -> Result<Frequency, PhysicsError> {
        Ok(self.revolution_frequency(total_energy)? * f64::from(self.harmonic_number))
    }

    /// The swing of the RF frequency between injection and extraction
    ///
    /// The sign follows the order of the arguments, it is positive when the extraction energy
    /// is above the injection energy.
    pub fn cavity_bandwidth(
        &self,
        injection_energy: Energy,
        extraction_energy: Energy,
    ) -> Result<Frequency, PhysicsError> {
        let injection = self.revolution_frequency(Some(injection_energy))?;
        let extraction = self.revolution_frequency(Some(extraction_energy))?;
        Ok((extraction - injection) * f64::from(self.harmonic_number))
    }

    /// Evaluates the machine frequencies at `number_of_points` equally spaced total energies
    /// from `injection_energy` to `extraction_energy` inclusive
    pub fn frequency_sweep(
        &self,
        injection_energy: Energy,
        extraction_energy: Energy,
        number_of_points: usize,
    ) -> Result<Vec<SweepPoint>, PhysicsError> {
        let step = match number_of_points {
            0 | 1 => Energy::zero(),
            n => (extraction_energy - injection_energy) / (n - 1) as f64,
        };
        (0..number_of_points)
            .map(|index| -> Result<SweepPoint, PhysicsError> {
                let total_energy = injection_energy + step * index as f64;
                let revolution_frequency = self.revolution_frequency(Some(total_energy))?;
                Ok(SweepPoint {
                    total_energy,
                    revolution_frequency,
                    rf_frequency: revolution_frequency * f64::from(self.harmonic_number),
                })
            })
            .collect()
    }

    /// Overwrites the harmonic number of the accelerator
    pub fn update_harmonic_number(&mut self, harmonic_number: u32) -> Result<(), BuildError> {
        if harmonic_number == 0 {
            return Err(BuildError::HarmonicNumber(harmonic_number));
        }
        self.harmonic_number = harmonic_number;
        Ok(())
    }

    /// Returns a copy of the accelerator with the harmonic number replaced
    pub fn with_harmonic_number(mut self, harmonic_number: u32) -> Result<Self, BuildError> {
        self.update_harmonic_number(harmonic_number)?;
        Ok(self)
    }

    /// Momentum per unit charge of the beam, signed by the particle charge
    pub fn magnetic_rigidity(
        &self,
        total_energy: Option<Energy>,
    ) -> Result<MagneticRigidity, PhysicsError> {
        let charge = self.beam.charge();
        if charge.is_zero() {
            return Err(PhysicsError::DivisionByZero {
                quantity: "magnetic rigidity",
                denominator: "particle charge",
            });
        }
        Ok(self.beam.momentum(total_energy)? / charge)
    }

    /// Radius of curvature of the orbit in a dipole at the maximum field
    pub fn bending_radius(&self, total_energy: Option<Energy>) -> Result<Length, PhysicsError> {
        let rigidity = self.magnetic_rigidity(total_energy)?;
        if self.max_dipole_field.is_zero() {
            return Err(PhysicsError::DivisionByZero {
                quantity: "bending radius",
                denominator: "maximum dipole field",
            });
        }
        Ok(rigidity / self.max_dipole_field)
    }

    /// Radius of a circle with the circumference of the machine
    pub fn accelerator_radius(&self) -> Length {
        self.circumference / (2. * PI)
    }

    /// Fraction of the machine radius taken by the bending radius at `max_energy`
    pub fn filling_factor(&self, max_energy: Energy) -> Result<f64, PhysicsError> {
        Ok(self.bending_radius(Some(max_energy))? / self.accelerator_radius())
    }

    /// Number of dipoles of length `dipole_length` needed to bend the beam through a full turn
    pub fn num_dipoles_total(
        &self,
        max_energy: Energy,
        dipole_length: Length,
    ) -> Result<f64, PhysicsError> {
        if dipole_length.is_zero() {
            return Err(PhysicsError::DivisionByZero {
                quantity: "number of dipoles",
                denominator: "dipole length",
            });
        }
        let bent_circumference = self.bending_radius(Some(max_energy))? * (2. * PI);
        Ok(bent_circumference / dipole_length)
    }

    /// Number of dipoles in each lattice cell of length `cell_length`
    pub fn num_dipoles_cell(
        &self,
        max_energy: Energy,
        dipole_length: Length,
        cell_length: Length,
    ) -> Result<f64, PhysicsError> {
        if cell_length.is_zero() {
            return Err(PhysicsError::DivisionByZero {
                quantity: "number of dipoles per cell",
                denominator: "cell length",
            });
        }
        let number_of_dipoles = self.num_dipoles_total(max_energy, dipole_length)?;
        let number_of_cells = self.circumference / cell_length;
        Ok(number_of_dipoles / number_of_cells)
    }
}
