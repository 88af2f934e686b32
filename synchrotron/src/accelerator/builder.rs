use super::Accelerator;
use crate::{
    beam::Beam,
    error::BuildError,
    quantity::{Length, MagneticField},
};

/// Builder for an `Accelerator`
///
/// The beam, circumference and dipole field are required, and `build` is only available once all
/// three are attached. The harmonic number defaults to one.
///
/// ```
/// use synchrotron::{particle::PROTON, quantity::{units::*, Energy, Length, MagneticField}};
/// use synchrotron::{AcceleratorBuilder, Beam};
///
/// let accelerator = AcceleratorBuilder::new()
///     .with_beam(Beam::new(PROTON, Energy::new(1000., GIGAELECTRONVOLT)))
///     .with_circumference(Length::new(6283., METRE))
///     .with_harmonic_number(1113)
///     .with_max_dipole_field(MagneticField::new(4.4, TESLA))
///     .build()
///     .unwrap();
/// assert_eq!(accelerator.harmonic_number(), 1113);
/// ```
pub struct AcceleratorBuilder<BeamT, CircumferenceT, FieldT> {
    beam: BeamT,
    circumference: CircumferenceT,
    max_dipole_field: FieldT,
    harmonic_number: u32,
}

impl Default for AcceleratorBuilder<(), (), ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl AcceleratorBuilder<(), (), ()> {
    pub fn new() -> Self {
        Self {
            beam: (),
            circumference: (),
            max_dipole_field: (),
            harmonic_number: 1,
        }
    }
}

impl<BeamT, CircumferenceT, FieldT> AcceleratorBuilder<BeamT, CircumferenceT, FieldT> {
    /// Attach the beam circulating in the machine
    pub fn with_beam(self, beam: Beam) -> AcceleratorBuilder<Beam, CircumferenceT, FieldT> {
        AcceleratorBuilder {
            beam,
            circumference: self.circumference,
            max_dipole_field: self.max_dipole_field,
            harmonic_number: self.harmonic_number,
        }
    }

    /// Attach the average circumference of the closed orbit
    pub fn with_circumference(
        self,
        circumference: Length,
    ) -> AcceleratorBuilder<BeamT, Length, FieldT> {
        AcceleratorBuilder {
            beam: self.beam,
            circumference,
            max_dipole_field: self.max_dipole_field,
            harmonic_number: self.harmonic_number,
        }
    }

    /// Attach the peak field of the bending dipoles
    pub fn with_max_dipole_field(
        self,
        max_dipole_field: MagneticField,
    ) -> AcceleratorBuilder<BeamT, CircumferenceT, MagneticField> {
        AcceleratorBuilder {
            beam: self.beam,
            circumference: self.circumference,
            max_dipole_field,
            harmonic_number: self.harmonic_number,
        }
    }

    /// Set the number of RF buckets, filled or unfilled, around the ring
    pub fn with_harmonic_number(self, harmonic_number: u32) -> Self {
        Self {
            harmonic_number,
            ..self
        }
    }
}

impl AcceleratorBuilder<Beam, Length, MagneticField> {
    /// Validates the parameters and builds the `Accelerator`
    #[tracing::instrument(name = "Accelerator Builder", level = "debug", skip(self))]
    pub fn build(self) -> Result<Accelerator, BuildError> {
        if self.harmonic_number == 0 {
            return Err(BuildError::HarmonicNumber(self.harmonic_number));
        }
        if !(self.circumference.is_finite() && self.circumference.si_value() > 0.) {
            return Err(BuildError::Circumference(self.circumference));
        }
        if !self.max_dipole_field.is_finite() {
            return Err(BuildError::DipoleField(self.max_dipole_field));
        }
        tracing::trace!(
            "Accelerator with harmonic number {} and circumference {:.3}",
            self.harmonic_number,
            self.circumference
        );

        Ok(Accelerator {
            speed_of_light: self.beam.speed_of_light(),
            beam: self.beam,
            harmonic_number: self.harmonic_number,
            circumference: self.circumference,
            max_dipole_field: self.max_dipole_field,
        })
    }
}
