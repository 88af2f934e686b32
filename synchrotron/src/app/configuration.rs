use super::ApplicationError;
use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize)]
pub(crate) struct Configuration {
    pub(crate) report: ReportConfiguration,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReportConfiguration {
    /// Number of decimal places printed for each value
    pub(crate) precision: usize,
    /// Number of energies at which the ramp is sampled
    pub(crate) sweep_points: usize,
    /// Colour section headers when the terminal supports it
    pub(crate) colour: bool,
}

impl Configuration {
    pub(crate) fn build() -> Result<Self, ApplicationError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = with_defaults()?
            // The default settings shipped with the workspace
            .add_source(File::with_name(".config/default").required(false))
            // The override settings which may be set by the user, optional
            .add_source(File::with_name(&format!(".config/{}", run_mode)).required(false))
            .build()?;

        Ok(s.try_deserialize()?)
    }
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("report.precision", 4_i64)?
        .set_default("report.sweep_points", 5_i64)?
        .set_default("report.colour", true)
}

#[cfg(test)]
mod test {
    use super::{with_defaults, Configuration};
    use config::{File, FileFormat};

    fn from_toml(toml: &str) -> Configuration {
        with_defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn defaults_apply_without_a_file() {
        let config = from_toml("");
        assert_eq!(config.report.precision, 4);
        assert_eq!(config.report.sweep_points, 5);
        assert!(config.report.colour);
    }

    #[test]
    fn file_values_override_the_defaults() {
        let config = from_toml(
            r#"
            [report]
            precision = 2
            colour = false
            "#,
        );
        assert_eq!(config.report.precision, 2);
        assert_eq!(config.report.sweep_points, 5);
        assert!(!config.report.colour);
    }
}
