/// Lenient decimal extraction for sensor page text.
///
/// Sensor pages render values as free text ("12.45 cfs", "Flood: 80.00",
/// sometimes nothing at all). Extraction never fails: anything without a
/// `<digits>.<digits>` run reads as zero.

use regex::Regex;
use std::sync::LazyLock;

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+").expect("decimal pattern is valid"));

/// Returns the first `<digits>.<digits>` number in `text`, or `0.0`.
///
/// Signs and bare integers are not recognised: `"-3.5"` reads as `3.5` and
/// `"12 cfs"` reads as `0.0`.
pub fn extract_float(text: &str) -> f64 {
    DECIMAL
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}
