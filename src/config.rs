use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::model::{DEFAULT_MOCK_IMPORT_PATH, DEFAULT_TOTAL_SLICES};

const CONFIG_FILE: &str = "iseg";
const ENV_PREFIX: &str = "ISEG";

/// Timings and fixtures of the demo. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub run_delay_ms: u64,
    pub import_delay_ms: u64,
    pub notification_ms: u64,
    pub total_slices: u16,
    pub mock_import_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            run_delay_ms: 3000,
            import_delay_ms: 1500,
            notification_ms: 5000,
            total_slices: DEFAULT_TOTAL_SLICES,
            mock_import_path: DEFAULT_MOCK_IMPORT_PATH.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `iseg.toml` from the working directory if present, then applies
    /// `ISEG_*` environment overrides (e.g. `ISEG_RUN_DELAY_MS=500`).
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config.validated(),
            Err(err) => {
                log::warn!("Ignoring invalid configuration ({err}); using defaults");
                Self::default()
            }
        }
    }

    /// Replaces values the workflow cannot use with their defaults.
    pub fn validated(mut self) -> Self {
        if self.mock_import_path.trim().is_empty() {
            log::warn!("mock_import_path is empty; using {DEFAULT_MOCK_IMPORT_PATH}");
            self.mock_import_path = DEFAULT_MOCK_IMPORT_PATH.to_string();
        }
        self
    }

    #[cfg(test)]
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn run_delay(&self) -> Duration {
        Duration::from_millis(self.run_delay_ms)
    }

    pub fn import_delay(&self) -> Duration {
        Duration::from_millis(self.import_delay_ms)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = AppConfig::from_toml("run_delay_ms = 250").unwrap();
        assert_eq!(config.run_delay(), Duration::from_millis(250));
        assert_eq!(config.import_delay(), Duration::from_millis(1500));
        assert_eq!(config.total_slices, DEFAULT_TOTAL_SLICES);
        assert_eq!(config.mock_import_path, DEFAULT_MOCK_IMPORT_PATH);
    }

    #[test]
    fn empty_source_is_the_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn blank_mock_import_path_falls_back_to_default() {
        let config = AppConfig::from_toml("mock_import_path = \"  \"")
            .unwrap()
            .validated();
        assert_eq!(config.mock_import_path, DEFAULT_MOCK_IMPORT_PATH);

        let custom = AppConfig::from_toml("mock_import_path = \"/data/ct\"")
            .unwrap()
            .validated();
        assert_eq!(custom.mock_import_path, "/data/ct");
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(AppConfig::from_toml("total_slices = \"many\"").is_err());
    }
}
