/// Service configuration loader - parses rainflow.toml
///
/// Keeps operational settings (reports directory, request timeout, log
/// level) and optionally the sensor list out of the code, so they can be
/// changed without recompiling. Without a `[[sensor]]` table the built-in
/// registry in `sensors` is used.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::model::{ConfigurationError, SensorDescriptor};
use crate::pipeline::CycleSettings;
use crate::sensors;

/// Configuration file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "rainflow.toml";

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "RAINFLOW_CONFIG";

/// Environment variable overriding `reports_dir`.
pub const REPORTS_DIR_ENV: &str = "RAINFLOW_REPORTS_DIR";

/// Service settings loaded from rainflow.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Directory the dated CSV records are written to (must already exist)
    pub reports_dir: PathBuf,

    /// Per-request timeout for sensor pages, in seconds
    pub request_timeout_secs: u64,

    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,

    /// Worker threads serving the HTTP endpoint
    pub endpoint_workers: usize,

    /// Sensors replacing the built-in registry
    #[serde(rename = "sensor")]
    pub sensors: Vec<SensorConfig>,
}

/// A `[[sensor]]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SensorConfig {
    pub name: String,
    pub uri: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            reports_dir: PathBuf::from("Reports"),
            request_timeout_secs: 5,
            log_level: "info".to_string(),
            endpoint_workers: 4,
            sensors: Vec::new(),
        }
    }
}

impl ServiceConfig {
    /// Loads settings from `path`, else `$RAINFLOW_CONFIG`, else
    /// `./rainflow.toml`.
    ///
    /// A `.env` file is honoured. A missing default file yields the
    /// defaults; a missing file that was asked for explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigurationError> {
        dotenv::dotenv().ok();

        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match env::var(CONFIG_PATH_ENV) {
                Ok(p) => (PathBuf::from(p), true),
                Err(_) => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
            },
        };

        let mut config = if required || path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        if let Ok(dir) = env::var(REPORTS_DIR_ENV) {
            config.reports_dir = PathBuf::from(dir);
        }

        config.validate()?;
        Ok(config)
    }

    /// Reads and parses one configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigurationError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigurationError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigurationError::ParseFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Rejects settings the service cannot run with.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigurationError::InvalidSetting(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.endpoint_workers == 0 {
            return Err(ConfigurationError::InvalidSetting(
                "endpoint_workers must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Builds the configured sensors, or the built-in registry if none are
    /// configured. Any malformed URI fails the whole list.
    pub fn sensor_descriptors(&self) -> Result<Vec<SensorDescriptor>, ConfigurationError> {
        if self.sensors.is_empty() {
            return sensors::build_registry();
        }
        self.sensors
            .iter()
            .map(|s| sensors::build_sensor(&s.name, &s.uri))
            .collect()
    }

    /// Cycle settings for these sensors and this timeout.
    pub fn cycle_settings(&self) -> Result<CycleSettings, ConfigurationError> {
        Ok(CycleSettings::new(self.sensor_descriptors()?).with_timeout(self.request_timeout()))
    }
}
