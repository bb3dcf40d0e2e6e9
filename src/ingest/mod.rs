/// Sensor page ingestion.
///
/// - `numeric`     — lenient decimal extraction from element text
/// - `sensor_page` — page fetching and positional readout extraction
/// - `fixtures`    — (test only) captured sensor page markup

pub mod numeric;
pub mod sensor_page;

#[cfg(test)]
pub(crate) mod fixtures;
