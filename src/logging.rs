/// Structured logging for the rain-flow service
///
/// Diagnostics go to stderr through `tracing`; stdout is reserved for the
/// report itself. Per-sensor failures are classified so an offline sensor
/// reads differently from a layout change on the sensor site.

use std::fmt;

use tracing_subscriber::EnvFilter;

use crate::model::FetchError;

// ---------------------------------------------------------------------------
// Initialization
// ---------------------------------------------------------------------------

/// Installs the global subscriber. `RUST_LOG` overrides `default_level`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// ---------------------------------------------------------------------------
// Failure Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureType {
    /// Sensor offline, in maintenance, or not publishing values
    Expected,
    /// Sensor site unreachable or slow; may clear on the next cycle
    Transient,
    /// Page layout or response we do not understand
    Unexpected,
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureType::Expected => write!(f, "EXPECTED"),
            FailureType::Transient => write!(f, "TRANSIENT"),
            FailureType::Unexpected => write!(f, "UNEXPECTED"),
        }
    }
}

/// Classify a failed sensor fetch
pub fn classify_fetch_failure(err: &FetchError) -> FailureType {
    match err {
        FetchError::Http(e) if e.is_timeout() || e.is_connect() => FailureType::Transient,
        FetchError::Http(_) => FailureType::Unexpected,
        FetchError::Shape(_) => FailureType::Unexpected,
    }
}

// ---------------------------------------------------------------------------
// Structured Failure Logging
// ---------------------------------------------------------------------------

/// Log a sensor that produced no reading this cycle
pub fn log_missing_reading(sensor: &str) {
    tracing::warn!(
        sensor,
        failure = %FailureType::Expected,
        "no reading this cycle (page unavailable, empty, or without readouts)"
    );
}

/// Log a failed sensor fetch with automatic classification
pub fn log_fetch_failure(sensor: &str, err: &FetchError) {
    let failure = classify_fetch_failure(err);
    match failure {
        FailureType::Expected | FailureType::Transient => {
            tracing::warn!(sensor, %failure, error = %err, "sensor fetch failed")
        }
        FailureType::Unexpected => {
            tracing::error!(sensor, %failure, error = %err, "sensor fetch failed")
        }
    }
}

/// Log a summary of one reading cycle
pub fn log_cycle_summary(total: usize, reported: usize) {
    let missing = total.saturating_sub(reported);
    if missing == 0 {
        tracing::info!(total, reported, "reading cycle complete");
    } else if reported == 0 {
        tracing::error!(total, reported, missing, "reading cycle complete, no sensor reported");
    } else {
        tracing::warn!(total, reported, missing, "reading cycle complete with missing sensors");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParseShapeError;

    #[test]
    fn test_shape_errors_are_unexpected() {
        let err = FetchError::Shape(ParseShapeError::MissingReadouts {
            shape: "slco-sensor-page/v1",
            expected: 3,
            found: 1,
        });
        assert_eq!(classify_fetch_failure(&err), FailureType::Unexpected);
    }

    #[test]
    fn test_request_build_errors_are_unexpected() {
        let err = reqwest::blocking::Client::new()
            .get("not a url")
            .send()
            .expect_err("invalid URL must not send");
        assert_eq!(classify_fetch_failure(&FetchError::Http(err)), FailureType::Unexpected);
    }

    #[test]
    fn test_failure_type_display() {
        assert_eq!(FailureType::Expected.to_string(), "EXPECTED");
        assert_eq!(FailureType::Transient.to_string(), "TRANSIENT");
        assert_eq!(FailureType::Unexpected.to_string(), "UNEXPECTED");
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging("debug");
        init_logging("not-a-level");
        log_cycle_summary(3, 2);
    }
}
