/// Sensor page client for rain-flow.slco.org.
///
/// Fetches a sensor's HTML page and binds its readout and badge elements to
/// reading fields by position. The positional layout lives in `PageShape`;
/// a markup change on the site means a new shape, not new parsing code.

use std::time::Duration;

use scraper::{Html, Selector};

use crate::ingest::numeric::extract_float;
use crate::model::{FetchError, ParseShapeError, Reading, SensorDescriptor};

// ---------------------------------------------------------------------------
// Page shape
// ---------------------------------------------------------------------------

/// Readout elements in page order: current flow, maximum, minimum.
pub const READOUT_COUNT: usize = 3;

/// Threshold badges in page order: flood level, high-water level.
pub const BADGE_COUNT: usize = 2;

/// Where the readout and threshold values live in a sensor page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageShape {
    /// Layout tag reported in shape errors.
    pub version: &'static str,
    /// Selects the flow readouts (flow, max, min).
    pub readout_selector: &'static str,
    /// Selects the threshold badges (flood, high water).
    pub badge_selector: &'static str,
}

/// Current rain-flow.slco.org sensor page layout. Class attributes are
/// matched exactly, so cards carrying extra classes are ignored.
pub const SLCO_SENSOR_PAGE: PageShape = PageShape {
    version: "slco-sensor-page/v1",
    readout_selector: r#"h4[class="mb-0"]"#,
    badge_selector: r#"span[class="badge badge-inline"]"#,
};

impl Default for PageShape {
    fn default() -> Self {
        SLCO_SENSOR_PAGE
    }
}

impl PageShape {
    /// Numeric values of every element matching `css`, in document order.
    fn values(&self, document: &Html, css: &'static str) -> Result<Vec<f64>, ParseShapeError> {
        let selector = Selector::parse(css).map_err(|e| ParseShapeError::InvalidSelector {
            shape: self.version,
            selector: css,
            reason: e.to_string(),
        })?;

        Ok(document
            .select(&selector)
            .map(|el| extract_float(&el.text().collect::<String>()))
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Extracts a `Reading` for `name` from a sensor page body.
///
/// Returns `Ok(None)` when the page has no readout elements at all (sensor
/// offline or page not rendered). Fewer than two badges leaves both
/// thresholds, and so both percentages, at zero.
///
/// # Errors
/// `ParseShapeError::MissingReadouts` if some but not all readouts are
/// present.
pub fn extract_reading(
    name: &str,
    html: &str,
    shape: &PageShape,
) -> Result<Option<Reading>, ParseShapeError> {
    let document = Html::parse_document(html);

    let readouts = shape.values(&document, shape.readout_selector)?;
    if readouts.is_empty() {
        return Ok(None);
    }
    let [flow, max, min] = match readouts[..] {
        [flow, max, min, ..] => [flow, max, min],
        _ => {
            return Err(ParseShapeError::MissingReadouts {
                shape: shape.version,
                expected: READOUT_COUNT,
                found: readouts.len(),
            });
        }
    };

    let badges = shape.values(&document, shape.badge_selector)?;
    let (flood, highwater) = match badges[..] {
        [flood, highwater, ..] => (flood, highwater),
        _ => (0.0, 0.0),
    };

    Ok(Some(Reading::new(name, flow, min, max, highwater, flood)))
}

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

/// Source of sensor page bodies.
///
/// `Ok(None)` means the server answered without anything to parse
/// (non-success status or empty body).
pub trait PageFetcher {
    fn fetch_page(&self, uri: &str) -> Result<Option<String>, FetchError>;
}

impl PageFetcher for reqwest::blocking::Client {
    fn fetch_page(&self, uri: &str) -> Result<Option<String>, FetchError> {
        let response = self.get(uri).send()?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(uri, %status, "sensor page returned non-success status");
            return Ok(None);
        }

        let body = response.text()?;
        if body.trim().is_empty() {
            tracing::debug!(uri, "sensor page body is empty");
            return Ok(None);
        }

        Ok(Some(body))
    }
}

/// Builds the blocking HTTP client used for sensor pages.
///
/// `timeout` bounds each request end to end so one unresponsive sensor
/// cannot stall the cycle.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::blocking::Client, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Fetches one sensor's page and extracts its reading.
///
/// Returns `Ok(None)` when the sensor has nothing to report this cycle.
pub fn fetch_reading<F: PageFetcher + ?Sized>(
    fetcher: &F,
    sensor: &SensorDescriptor,
    shape: &PageShape,
) -> Result<Option<Reading>, FetchError> {
    match fetcher.fetch_page(&sensor.uri)? {
        Some(body) => Ok(extract_reading(&sensor.name, &body, shape)?),
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
