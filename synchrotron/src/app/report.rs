//! # Report
//!
//! Evaluates every quantity derivable from a `Machine` and lays them out in sections for the
//! terminal. Values are converted to display units here and nowhere else.

use super::{configuration::ReportConfiguration, styles::Styles, ApplicationError, Machine};
use crate::quantity::{
    units::{
        GIGAELECTRONVOLT, GIGAELECTRONVOLT_PER_C, KILOHERTZ, MEGAHERTZ, METRE, MICROSECOND, TESLA,
        TESLA_METRE,
    },
    Energy, InUnit,
};
use owo_colors::OwoColorize;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Reading {
    Measured(InUnit),
    Dimensionless(f64),
    Count(u32),
}

impl Reading {
    fn render(&self, precision: usize) -> String {
        match self {
            Reading::Measured(value) => format!("{:.*}", precision, value),
            Reading::Dimensionless(value) => format!("{:.*}", precision, value),
            Reading::Count(value) => value.to_string(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Section {
    pub(crate) title: String,
    pub(crate) entries: Vec<(String, Reading)>,
}

impl Section {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    fn with(mut self, label: impl Into<String>, reading: Reading) -> Self {
        self.entries.push((label.into(), reading));
        self
    }

    pub(crate) fn get(&self, label: &str) -> Option<&Reading> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == label)
            .map(|(_, reading)| reading)
    }
}

#[derive(Debug)]
pub(crate) struct Report {
    pub(crate) sections: Vec<Section>,
}

impl Report {
    /// Evaluates the machine at `total_energy`, or at the energy of its beam when `None`
    ///
    /// Rigidity, bending radius and the quantities derived from them carry the sign of the
    /// particle charge. The report lists their magnitudes.
    #[tracing::instrument(name = "Report", level = "info", skip_all)]
    pub(crate) fn compose(
        machine: &Machine,
        total_energy: Option<Energy>,
        config: &ReportConfiguration,
    ) -> Result<Self, ApplicationError> {
        use Reading::*;

        let accelerator = machine.accelerator()?;
        let beam = accelerator.beam();
        let energy = beam.total_energy(total_energy);
        tracing::debug!("Evaluating at {:.3}", energy.display_in(GIGAELECTRONVOLT));

        let mut sections = vec![Section::new(format!("Beam ({})", machine.species()))
            .with("total energy", Measured(energy.display_in(GIGAELECTRONVOLT)))
            .with(
                "kinetic energy",
                Measured(beam.kinetic_energy(total_energy).display_in(GIGAELECTRONVOLT)),
            )
            .with(
                "rest mass energy",
                Measured(beam.rest_mass_energy().display_in(GIGAELECTRONVOLT)),
            )
            .with("gamma", Dimensionless(beam.gamma(total_energy)?))
            .with("beta", Dimensionless(beam.beta(total_energy)?))
            .with(
                "momentum",
                Measured(beam.momentum(total_energy)?.display_in(GIGAELECTRONVOLT_PER_C)),
            )];

        let mut ring = Section::new("Ring")
            .with("circumference", Measured(accelerator.circumference().display_in(METRE)))
            .with("harmonic number", Count(accelerator.harmonic_number()))
            .with(
                "maximum dipole field",
                Measured(accelerator.max_dipole_field().display_in(TESLA)),
            )
            .with(
                "revolution period",
                Measured(accelerator.revolution_period(total_energy)?.display_in(MICROSECOND)),
            )
            .with(
                "revolution frequency",
                Measured(accelerator.revolution_frequency(total_energy)?.display_in(KILOHERTZ)),
            )
            .with(
                "RF frequency",
                Measured(accelerator.rf_frequency(total_energy)?.display_in(MEGAHERTZ)),
            )
            .with(
                "magnetic rigidity",
                Measured(
                    accelerator
                        .magnetic_rigidity(total_energy)?
                        .abs()
                        .display_in(TESLA_METRE),
                ),
            )
            .with(
                "bending radius",
                Measured(accelerator.bending_radius(total_energy)?.abs().display_in(METRE)),
            )
            .with(
                "accelerator radius",
                Measured(accelerator.accelerator_radius().display_in(METRE)),
            )
            .with(
                "filling factor",
                Dimensionless(accelerator.filling_factor(energy)?.abs()),
            );
        if let Some(dipole_length) = machine.dipole_length() {
            ring = ring.with(
                "dipoles",
                Dimensionless(accelerator.num_dipoles_total(energy, dipole_length)?.abs()),
            );
            if let Some(cell_length) = machine.cell_length() {
                ring = ring.with(
                    "dipoles per cell",
                    Dimensionless(
                        accelerator
                            .num_dipoles_cell(energy, dipole_length, cell_length)?
                            .abs(),
                    ),
                );
            }
        }
        sections.push(ring);

        if let Some((injection, extraction)) = machine.ramp()? {
            let mut ramp = Section::new("Ramp").with(
                "cavity bandwidth",
                Measured(
                    accelerator
                        .cavity_bandwidth(injection, extraction)?
                        .display_in(KILOHERTZ),
                ),
            );
            for point in accelerator.frequency_sweep(injection, extraction, config.sweep_points)? {
                ramp = ramp.with(
                    format!(
                        "RF frequency at {:.1}",
                        point.total_energy.display_in(GIGAELECTRONVOLT)
                    ),
                    Measured(point.rf_frequency.display_in(MEGAHERTZ)),
                );
            }
            sections.push(ramp);
        }

        if let Some(cavity) = machine.cavity() {
            let mut section = Section::new("Cavity")
                .with("frequency", Measured(cavity.frequency().display_in(MEGAHERTZ)))
                .with(
                    "TM010 radius",
                    Measured(cavity.radius_for_tm010()?.display_in(METRE)),
                );
            if let Some(quality_factor) = machine.quality_factor() {
                section = section.with(
                    "bandwidth",
                    Measured(cavity.bandwidth(quality_factor)?.display_in(KILOHERTZ)),
                );
            }
            sections.push(section);
        }

        Ok(Self { sections })
    }

    pub(crate) fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }

    pub(crate) fn write(
        &self,
        term: &console::Term,
        styles: &Styles,
        precision: usize,
    ) -> std::io::Result<()> {
        for section in self.sections.iter() {
            term.write_line(&format!("{}", section.title.style(styles.section_style)))?;
            for (label, reading) in section.entries.iter() {
                term.write_line(&format!(
                    "  {} {}",
                    format!("{:<28}", label).style(styles.label_style),
                    reading.render(precision)
                ))?;
            }
            term.write_line("")?;
        }
        Ok(())
    }
}
