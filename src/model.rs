/// Core data types for the rain-flow stream monitoring service.
///
/// Sensor identities, per-cycle readings, and the error enums shared by the
/// ingest, report and storage layers. No I/O happens here.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Sensor identity
// ---------------------------------------------------------------------------

/// A monitored sensor page, decoded from its configuration URI.
///
/// The four identifiers come positionally from the URI query string
/// (`site_id`, `site`, `device_id`, `device`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorDescriptor {
    pub name: String,
    pub site_id: String,
    pub site: String,
    pub device_id: String,
    pub device: String,
    pub uri: String,
}

impl fmt::Display for SensorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sensor: {}", self.name)?;
        writeln!(f, "  Site ID   = {}", self.site_id)?;
        writeln!(f, "  Site      = {}", self.site)?;
        writeln!(f, "  Device ID = {}", self.device_id)?;
        writeln!(f, "  Device    = {}", self.device)?;
        write!(f, "  URI       = {}", self.uri)
    }
}

// ---------------------------------------------------------------------------
// Reading types
// ---------------------------------------------------------------------------

/// Width the sensor name is padded to in report lines.
pub const NAME_COLUMN_WIDTH: usize = 45;

/// One sensor's flow values for a reading cycle, with the derived
/// percentages against its high-water and flood thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub name: String,
    pub flow: f64,
    pub min: f64,
    pub max: f64,
    pub highwater: f64,
    pub flood: f64,
    pub high_percent: f64,
    pub flood_percent: f64,
}

impl Reading {
    /// Builds a reading and derives both percentages from `flow`.
    pub fn new(name: &str, flow: f64, min: f64, max: f64, highwater: f64, flood: f64) -> Self {
        Reading {
            name: name.to_string(),
            flow,
            min,
            max,
            highwater,
            flood,
            high_percent: percent_of(flow, highwater),
            flood_percent: percent_of(flow, flood),
        }
    }

    pub fn is_flooded(&self) -> bool {
        self.flood_percent > 100.0
    }

    pub fn is_above_high_water(&self) -> bool {
        self.high_percent > 100.0
    }
}

/// `value` as a percentage of `threshold`. A zero threshold yields 0.
pub fn percent_of(value: f64, threshold: f64) -> f64 {
    if threshold == 0.0 {
        0.0
    } else {
        value / threshold * 100.0
    }
}

/// Renders the report line for this reading, e.g.
/// `Test Creek ... Flow 5.0 (1.0 / 10.0), (50.0% to high, 125.0% flooding)`.
impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let high_prep = if self.high_percent < 100.0 { "to" } else { "above" };
        let flood_prep = if self.flood_percent < 100.0 { "to " } else { "" };
        write!(
            f,
            "{:<width$} Flow {:?} ({:?} / {:?}), ({:.1}% {} high, {:.1}% {}flooding)",
            self.name,
            self.flow,
            self.min,
            self.max,
            self.high_percent,
            high_prep,
            self.flood_percent,
            flood_prep,
            width = NAME_COLUMN_WIDTH,
        )
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Malformed sensor configuration or service settings. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("sensor URI '{uri}' has no '/?' query separator")]
    MissingQuery { uri: String },

    #[error("sensor URI '{uri}' is missing the '{key}' query parameter")]
    MissingParameter { uri: String, key: &'static str },

    #[error("sensor URI '{uri}' has malformed query parameter '{token}'")]
    MalformedParameter { uri: String, token: String },

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid setting: {0}")]
    InvalidSetting(String),
}

/// The sensor page did not have the element layout the page shape expects.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseShapeError {
    #[error("page shape {shape}: expected {expected} readout elements, found {found}")]
    MissingReadouts {
        shape: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("page shape {shape}: invalid selector '{selector}': {reason}")]
    InvalidSelector {
        shape: &'static str,
        selector: &'static str,
        reason: String,
    },
}

/// Failure to obtain a reading for one sensor. The cycle logs it and moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Shape(#[from] ParseShapeError),
}

/// The daily reading record could not be written.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("reports directory {0} does not exist")]
    MissingDirectory(PathBuf),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_derived_from_flow() {
        let reading = Reading::new("Test Creek", 5.0, 1.0, 10.0, 10.0, 4.0);
        assert!((reading.high_percent - 50.0).abs() < 1e-9);
        assert!((reading.flood_percent - 125.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_thresholds_yield_zero_percentages() {
        let reading = Reading::new("No Thresholds", 42.5, 1.0, 50.0, 0.0, 0.0);
        assert_eq!(reading.high_percent, 0.0);
        assert_eq!(reading.flood_percent, 0.0);
        assert!(!reading.is_flooded());
        assert!(!reading.is_above_high_water());
    }

    #[test]
    fn test_zero_high_water_only_leaves_flood_percent_intact() {
        let reading = Reading::new("Half Configured", 20.0, 0.0, 0.0, 0.0, 40.0);
        assert_eq!(reading.high_percent, 0.0);
        assert!((reading.flood_percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_exactly_one_hundred_percent_is_not_flooded() {
        let reading = Reading::new("Brim Full", 8.0, 0.0, 0.0, 8.0, 8.0);
        assert_eq!(reading.flood_percent, 100.0);
        assert!(!reading.is_flooded());
        assert!(!reading.is_above_high_water());
    }

    #[test]
    fn test_report_line_below_thresholds() {
        let reading = Reading::new("Test Creek", 5.0, 1.0, 10.0, 10.0, 20.0);
        let line = reading.to_string();
        assert!(line.starts_with("Test Creek "));
        assert!(line.contains("Flow 5.0 (1.0 / 10.0)"), "got: {}", line);
        assert!(line.ends_with("(50.0% to high, 25.0% to flooding)"), "got: {}", line);
    }

    #[test]
    fn test_report_line_flooding() {
        let reading = Reading::new("Test Creek", 5.0, 1.0, 10.0, 10.0, 4.0);
        let line = reading.to_string();
        assert!(line.contains("50.0% to high, 125.0% flooding"), "got: {}", line);
    }

    #[test]
    fn test_report_line_above_high_water() {
        let reading = Reading::new("Test Creek", 15.0, 1.0, 20.0, 10.0, 30.0);
        let line = reading.to_string();
        assert!(line.contains("150.0% above high, 50.0% to flooding"), "got: {}", line);
    }

    #[test]
    fn test_report_line_pads_name_column() {
        let reading = Reading::new("Short", 1.5, 1.0, 2.0, 0.0, 0.0);
        let line = reading.to_string();
        assert_eq!(&line[..NAME_COLUMN_WIDTH], format!("{:<45}", "Short"));
        assert_eq!(&line[NAME_COLUMN_WIDTH..NAME_COLUMN_WIDTH + 6], " Flow ");
    }

    #[test]
    fn test_sensor_descriptor_display_lists_identifiers() {
        let sensor = SensorDescriptor {
            name: "Mill Creek @ Canyon Mouth".to_string(),
            site_id: "76".to_string(),
            site: "3ea01878".to_string(),
            device_id: "2".to_string(),
            device: "a070b1c1".to_string(),
            uri: "https://rain-flow.slco.org/sensor/?site_id=76".to_string(),
        };
        let text = sensor.to_string();
        assert!(text.starts_with("Sensor: Mill Creek @ Canyon Mouth\n"));
        assert!(text.contains("  Site ID   = 76"));
        assert!(text.contains("  Device    = a070b1c1"));
    }

    #[test]
    fn test_shape_error_message_names_shape() {
        let err = ParseShapeError::MissingReadouts {
            shape: "slco-sensor-page/v1",
            expected: 3,
            found: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("slco-sensor-page/v1"));
        assert!(msg.contains("expected 3"));
    }
}
