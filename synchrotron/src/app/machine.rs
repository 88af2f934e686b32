//! # Machine
//!
//! Reads the description of a machine from a `.toml` file. Energies are given in GeV, lengths in
//! metres, fields in tesla and frequencies in MHz, the suffix of each key names its unit.

use super::ApplicationError;
use crate::{
    accelerator::Accelerator,
    beam::Beam,
    cavity::Cavity,
    error::BuildError,
    particle::Species,
    quantity::{
        units::{GIGAELECTRONVOLT, MEGAHERTZ, METRE, TESLA},
        Energy, Frequency, Length, MagneticField,
    },
};
use config::{Config, File};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
/// A machine description: the beam, the ring holding it and optionally its RF cavity
pub struct Machine {
    pub(crate) beam: BeamDescription,
    pub(crate) ring: RingDescription,
    pub(crate) cavity: Option<CavityDescription>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BeamDescription {
    pub(crate) species: Species,
    pub(crate) total_energy_gev: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RingDescription {
    pub(crate) circumference_m: f64,
    pub(crate) harmonic_number: u32,
    pub(crate) max_dipole_field_t: f64,
    pub(crate) dipole_length_m: Option<f64>,
    pub(crate) cell_length_m: Option<f64>,
    pub(crate) injection_energy_gev: Option<f64>,
    pub(crate) extraction_energy_gev: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CavityDescription {
    pub(crate) frequency_mhz: f64,
    pub(crate) quality_factor: Option<f64>,
}

impl Machine {
    pub fn build(path: &Path) -> Result<Self, ApplicationError> {
        let s = Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .build()?;
        Ok(s.try_deserialize()?)
    }

    pub fn species(&self) -> Species {
        self.beam.species
    }

    pub fn beam(&self) -> Beam {
        Beam::new(
            self.beam.species.particle(),
            Energy::new(self.beam.total_energy_gev, GIGAELECTRONVOLT),
        )
    }

    pub fn accelerator(&self) -> Result<Accelerator, BuildError> {
        Accelerator::new(
            self.beam(),
            Length::new(self.ring.circumference_m, METRE),
            self.ring.harmonic_number,
            MagneticField::new(self.ring.max_dipole_field_t, TESLA),
        )
    }

    pub fn cavity(&self) -> Option<Cavity> {
        self.cavity
            .as_ref()
            .map(|cavity| Cavity::new(Frequency::new(cavity.frequency_mhz, MEGAHERTZ)))
    }

    pub fn quality_factor(&self) -> Option<f64> {
        self.cavity.as_ref().and_then(|cavity| cavity.quality_factor)
    }

    pub fn dipole_length(&self) -> Option<Length> {
        self.ring.dipole_length_m.map(|length| Length::new(length, METRE))
    }

    pub fn cell_length(&self) -> Option<Length> {
        self.ring.cell_length_m.map(|length| Length::new(length, METRE))
    }

    /// The injection and extraction energies, or `None` when the ring has no ramp
    ///
    /// A ramp needs both energies, giving only one of them is an error.
    pub fn ramp(&self) -> Result<Option<(Energy, Energy)>, ApplicationError> {
        match (self.ring.injection_energy_gev, self.ring.extraction_energy_gev) {
            (Some(injection), Some(extraction)) => Ok(Some((
                Energy::new(injection, GIGAELECTRONVOLT),
                Energy::new(extraction, GIGAELECTRONVOLT),
            ))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(ApplicationError::IncompleteRamp {
                missing: "extraction_energy_gev",
            }),
            (None, Some(_)) => Err(ApplicationError::IncompleteRamp {
                missing: "injection_energy_gev",
            }),
        }
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::Machine;
    use crate::{
        app::ApplicationError,
        error::BuildError,
        particle::Species,
        quantity::units::{GIGAELECTRONVOLT, MEGAHERTZ, METRE},
    };
    use approx::assert_relative_eq;
    use config::{Config, File, FileFormat};

    pub(crate) const TEVATRON: &str = r#"
        [beam]
        species = "Proton"
        total_energy_gev = 1000.0

        [ring]
        circumference_m = 6283.0
        harmonic_number = 1113
        max_dipole_field_t = 4.4
        dipole_length_m = 6.1
        cell_length_m = 59.5
        injection_energy_gev = 150.0
        extraction_energy_gev = 980.0

        [cavity]
        frequency_mhz = 53.1
        quality_factor = 10000.0
    "#;

    pub(crate) fn from_toml(toml: &str) -> Result<Machine, config::ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn full_description() {
        let machine = from_toml(TEVATRON).unwrap();
        assert_eq!(machine.species(), Species::Proton);
        let accelerator = machine.accelerator().unwrap();
        assert_eq!(accelerator.harmonic_number(), 1113);
        assert_relative_eq!(accelerator.circumference().value_in(METRE), 6283.);
        assert_relative_eq!(
            machine.cavity().unwrap().frequency().value_in(MEGAHERTZ),
            53.1
        );
        assert_eq!(machine.quality_factor(), Some(1e4));
        let (injection, extraction) = machine.ramp().unwrap().unwrap();
        assert_relative_eq!(injection.value_in(GIGAELECTRONVOLT), 150.);
        assert_relative_eq!(extraction.value_in(GIGAELECTRONVOLT), 980.);
    }

    #[test]
    fn optional_sections_may_be_omitted() {
        let machine = from_toml(
            r#"
            [beam]
            species = "Electron"
            total_energy_gev = 3.0

            [ring]
            circumference_m = 844.0
            harmonic_number = 1408
            max_dipole_field_t = 0.6
            "#,
        )
        .unwrap();
        assert_eq!(machine.species(), Species::Electron);
        assert!(machine.cavity().is_none());
        assert!(machine.dipole_length().is_none());
        assert!(machine.ramp().unwrap().is_none());
    }

    #[test]
    fn half_specified_ramp_is_rejected() {
        let machine = from_toml(&TEVATRON.replace("extraction_energy_gev = 980.0", "")).unwrap();
        assert!(matches!(
            machine.ramp(),
            Err(ApplicationError::IncompleteRamp {
                missing: "extraction_energy_gev"
            })
        ));

        let machine = from_toml(&TEVATRON.replace("injection_energy_gev = 150.0", "")).unwrap();
        assert!(matches!(
            machine.ramp(),
            Err(ApplicationError::IncompleteRamp {
                missing: "injection_energy_gev"
            })
        ));
    }

    #[test]
    fn unknown_species_fail_to_parse() {
        let result = from_toml(
            r#"
            [beam]
            species = "Muon"
            total_energy_gev = 3.0

            [ring]
            circumference_m = 100.0
            harmonic_number = 1
            max_dipole_field_t = 1.0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn invalid_ring_is_reported_on_build() {
        let machine = from_toml(&TEVATRON.replace("harmonic_number = 1113", "harmonic_number = 0"))
            .unwrap();
        assert!(matches!(
            machine.accelerator(),
            Err(BuildError::HarmonicNumber(0))
        ));
    }

    #[test]
    fn reading_a_missing_file_fails() {
        let result = Machine::build(std::path::Path::new("does/not/exist.toml"));
        assert!(result.is_err());
    }
}
