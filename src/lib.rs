/// rainflow_service: Salt Lake County stream flow and flood report service.
///
/// # Module structure
///
/// ```text
/// rainflow_service
/// ├── model       — shared data types (SensorDescriptor, Reading, error enums)
/// ├── sensors     — built-in sensor registry + configuration URI decoding
/// ├── config      — service settings loader (rainflow.toml, .env)
/// ├── logging     — tracing setup and per-sensor failure classification
/// ├── ingest
/// │   ├── numeric     — lenient decimal extraction from page text
/// │   ├── sensor_page — sensor page fetching and positional extraction
/// │   └── fixtures (test only) — captured sensor page markup
/// ├── pipeline    — one reading cycle across all configured sensors
/// ├── report      — flooded / high water / all streams text report
/// ├── recorder    — dated CSV record of each cycle's readings
/// └── endpoint    — HTTP endpoint serving the report
/// ```

/// Public modules
pub mod config;
pub mod endpoint;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod recorder;
pub mod report;
pub mod sensors;
