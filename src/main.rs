//! Rain-flow Stream Report - Main Entry Point
//!
//! Fetches every configured stream sensor page once, prints the flood
//! report to stdout, and records the readings to `Reports/Sensors <date>.csv`.
//!
//! Usage:
//!   cargo run --release                         # One reading cycle: report + record
//!   cargo run --release -- --no-record          # Report only
//!   cargo run --release -- --endpoint 8080      # Serve the report on http://0.0.0.0:8080/
//!   cargo run --release -- --list-sensors       # Show configured sensors
//!
//! Environment:
//!   RAINFLOW_CONFIG      - configuration file (default: rainflow.toml)
//!   RAINFLOW_REPORTS_DIR - overrides reports_dir
//!   RUST_LOG             - overrides log_level

use std::path::PathBuf;
use std::process;

use clap::Parser;

use rainflow_service::config::ServiceConfig;
use rainflow_service::{endpoint, logging, pipeline, recorder, report};

#[derive(Debug, Parser)]
#[command(name = "rainflow_service", version, about = "Stream flow and flood report for Salt Lake County sensors")]
struct Cli {
    /// Configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Serve the report over HTTP on this port instead of running once
    #[arg(long, value_name = "PORT")]
    endpoint: Option<u16>,

    /// Print the configured sensors and exit
    #[arg(long)]
    list_sensors: bool,

    /// Skip writing the CSV record
    #[arg(long)]
    no_record: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = ServiceConfig::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(2);
    });
    logging::init_logging(&config.log_level);

    let settings = config.cycle_settings().unwrap_or_else(|e| {
        tracing::error!(error = %e, "sensor configuration is invalid");
        process::exit(2);
    });

    if cli.list_sensors {
        for sensor in &settings.sensors {
            println!("{}\n", sensor);
        }
        return;
    }

    if let Some(port) = cli.endpoint {
        if let Err(e) = endpoint::start_endpoint_server(port, settings, config.endpoint_workers) {
            tracing::error!(error = %e, "endpoint server error");
            process::exit(1);
        }
        return;
    }

    let readings = pipeline::run_cycle(&settings).unwrap_or_else(|e| {
        tracing::error!(error = %e, "could not start reading cycle");
        process::exit(1);
    });

    report::flood_report(&readings);

    if !cli.no_record {
        if let Err(e) = recorder::record_today(&config.reports_dir, &readings) {
            tracing::error!(error = %e, "failed to record sensor readings");
            process::exit(1);
        }
    }
}
