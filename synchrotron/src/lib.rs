// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Synchrotron evaluates the closed-form quantities of a circular particle accelerator
//!
//! # Overview
//! Four value types compose in a strict chain. A [`Particle`] holds a rest mass and a charge, a
//! [`Beam`] places it at a total energy and derives the relativistic kinematics, and an
//! [`Accelerator`] holds the beam in a ring of given circumference, harmonic number and dipole
//! field to derive the revolution and RF frequencies, the magnetic rigidity and the bending radius.
//! A [`Cavity`] is independent of the chain and gives the geometry and resonances of a cylindrical
//! RF cavity.
//!
//! Nothing is solved iteratively and nothing evolves in time: each derived quantity is a formula of
//! the stored parameters and, optionally, a total energy supplied for that call only.
//!
//! # Usage
//! ```
//! use synchrotron::{
//!     particle::PROTON,
//!     quantity::{units::*, Energy, Length, MagneticField},
//!     Accelerator, Beam,
//! };
//!
//! let beam = Beam::new(PROTON, Energy::new(1000., GIGAELECTRONVOLT));
//! let tevatron = Accelerator::new(
//!     beam,
//!     Length::new(6283., METRE),
//!     1113,
//!     MagneticField::new(4.4, TESLA),
//! )
//! .unwrap();
//! let rf = tevatron.rf_frequency(None).unwrap();
//! assert!((rf.value_in(MEGAHERTZ) - 53.1).abs() < 0.05);
//! ```
//!
//! The `synchrotron` binary reads a machine description from a `.toml` file and prints a report of
//! the derived quantities:
//!
//! ```toml
//! [beam]
//! species = "Proton"
//! total_energy_gev = 1000.0
//!
//! [ring]
//! circumference_m = 6283.0
//! harmonic_number = 1113
//! max_dipole_field_t = 4.4
//! ```

/// The command line application, configuration, machine description and telemetry
pub mod app;

/// Quantities derived from the machine
pub mod accelerator;

/// Relativistic kinematics of a particle at a given energy
pub mod beam;

/// Cylindrical cavity geometry and resonances
pub mod cavity;

/// Physical constants
pub mod constants;

/// Error handling
pub mod error;

/// Particle species
pub mod particle;

/// Dimensioned physical quantities and their units
pub mod quantity;

pub use accelerator::{Accelerator, AcceleratorBuilder, SweepPoint};
pub use beam::Beam;
pub use cavity::{resonant_frequency, resonant_frequency_with, Cavity};
pub use error::{BuildError, PhysicsError};
pub use particle::{Particle, Species};
pub use synchrotron_bessel::{Bessel, BesselZeros};
