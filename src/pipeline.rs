/// Reading cycle for the rain-flow service
///
/// One cycle fetches every configured sensor in order, one at a time, and
/// collects the readings that came back. A sensor that cannot be read is
/// logged and left out; it never aborts the cycle.

use std::time::Duration;

use crate::ingest::sensor_page::{self, PageFetcher, PageShape};
use crate::logging;
use crate::model::{FetchError, Reading, SensorDescriptor};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Per-request timeout when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Everything a reading cycle needs, passed explicitly to each entry point.
#[derive(Debug, Clone)]
pub struct CycleSettings {
    /// Sensors to fetch, in report input order
    pub sensors: Vec<SensorDescriptor>,

    /// Layout of the sensor pages
    pub shape: PageShape,

    /// Bound on each sensor page request
    pub request_timeout: Duration,
}

impl CycleSettings {
    /// Settings for `sensors` with the current page shape and default timeout
    pub fn new(sensors: Vec<SensorDescriptor>) -> Self {
        Self {
            sensors,
            shape: PageShape::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

// ---------------------------------------------------------------------------
// Cycle
// ---------------------------------------------------------------------------

/// Fetches each sensor in order and returns the readings that were present.
pub fn collect_readings<F: PageFetcher + ?Sized>(
    fetcher: &F,
    sensors: &[SensorDescriptor],
    shape: &PageShape,
) -> Vec<Reading> {
    let mut readings = Vec::with_capacity(sensors.len());

    for sensor in sensors {
        match sensor_page::fetch_reading(fetcher, sensor, shape) {
            Ok(Some(reading)) => {
                tracing::info!(
                    sensor = %sensor.name,
                    flow = reading.flow,
                    high_percent = reading.high_percent,
                    flood_percent = reading.flood_percent,
                    "reading collected"
                );
                readings.push(reading);
            }
            Ok(None) => logging::log_missing_reading(&sensor.name),
            Err(e) => logging::log_fetch_failure(&sensor.name, &e),
        }
    }

    logging::log_cycle_summary(sensors.len(), readings.len());
    readings
}

/// Runs one isolated cycle with its own HTTP client.
///
/// # Errors
/// Only if the HTTP client cannot be built; per-sensor failures are absorbed.
pub fn run_cycle(settings: &CycleSettings) -> Result<Vec<Reading>, FetchError> {
    let client = sensor_page::build_http_client(settings.request_timeout)?;
    Ok(collect_readings(&client, &settings.sensors, &settings.shape))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
