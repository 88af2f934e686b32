/// This module governs the command line front end: reading a machine description,
/// evaluating it and printing the report
mod configuration;
mod error;
mod machine;
mod report;
mod styles;
mod telemetry;

pub use error::ApplicationError;
pub use machine::Machine;

use crate::quantity::{units::GIGAELECTRONVOLT, Energy};
use clap::{ArgEnum, Parser};
use configuration::Configuration;
use report::Report;
use std::path::PathBuf;
use styles::Styles;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct App {
    /// Path to the TOML description of the machine
    machine: PathBuf,
    #[clap(arg_enum, short, long, default_value = "info")]
    log_level: LogLevel,
    /// Evaluate the machine at this total energy in GeV instead of the beam energy
    #[clap(short, long)]
    energy_gev: Option<f64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ArgEnum)]
pub(crate) enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

pub fn run() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = App::parse();

    let subscriber = telemetry::get_subscriber(cli.log_level);
    telemetry::init_subscriber(subscriber)?;

    let config = Configuration::build()?;
    tracing::trace!("Loaded configuration {:?}", config);

    let machine = Machine::build(&cli.machine)?;
    tracing::info!("Read {} machine from {}", machine.species(), cli.machine.display());

    let total_energy = cli
        .energy_gev
        .map(|energy| Energy::new(energy, GIGAELECTRONVOLT));
    let report = Report::compose(&machine, total_energy, &config.report)?;

    let mut styles = Styles::default();
    if config.report.colour && supports_color::on(supports_color::Stream::Stdout).is_some() {
        styles.colorize();
    }
    report.write(&console::Term::stdout(), &styles, config.report.precision)?;

    Ok(())
}
