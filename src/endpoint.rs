/// HTTP endpoint serving the flood report
///
/// Endpoints:
/// - GET / - Runs a full reading cycle and returns the report as plain text
///
/// Each request runs its own cycle with its own HTTP client on a worker
/// thread; requests share only the immutable `CycleSettings`.

use std::io::Cursor;
use std::sync::Arc;

use serde_json::json;
use thiserror::Error;
use threadpool::ThreadPool;
use tiny_http::{Header, Method, Response, Server};

use crate::pipeline::{self, CycleSettings};
use crate::report;

type HttpResponse = Response<Cursor<Vec<u8>>>;

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("Failed to start HTTP server on {addr}: {reason}")]
    Bind { addr: String, reason: String },
}

// ---------------------------------------------------------------------------
// HTTP Server
// ---------------------------------------------------------------------------

/// Start HTTP endpoint server on the specified port. Blocks forever.
pub fn start_endpoint_server(
    port: u16,
    settings: CycleSettings,
    workers: usize,
) -> Result<(), EndpointError> {
    let addr = format!("0.0.0.0:{}", port);
    let server = Server::http(&addr).map_err(|e| EndpointError::Bind {
        addr: addr.clone(),
        reason: e.to_string(),
    })?;

    tracing::info!(%addr, workers, sensors = settings.sensors.len(), "report endpoint listening");
    serve(server, Arc::new(settings), workers);
    Ok(())
}

/// Dispatch requests from `server` onto a pool of `workers` threads.
pub fn serve(server: Server, settings: Arc<CycleSettings>, workers: usize) {
    let pool = ThreadPool::new(workers.max(1));

    for request in server.incoming_requests() {
        let settings = Arc::clone(&settings);
        pool.execute(move || {
            let response = route(request.method(), request.url(), &settings);
            if let Err(e) = request.respond(response) {
                tracing::warn!(error = %e, "failed to send response");
            }
        });
    }
}

fn route(method: &Method, url: &str, settings: &CycleSettings) -> HttpResponse {
    let path = url.split('?').next().unwrap_or(url);

    match (method, path) {
        (Method::Get, "/") => handle_report(settings),
        (_, "/") => json_response(
            405,
            json!({
                "error": "Method not allowed",
                "allowed_methods": ["GET"]
            }),
        ),
        _ => json_response(
            404,
            json!({
                "error": "Not found",
                "available_endpoints": ["/"]
            }),
        ),
    }
}

/// Handle GET /
fn handle_report(settings: &CycleSettings) -> HttpResponse {
    match pipeline::run_cycle(settings) {
        Ok(readings) => text_response(200, report::render_today(&readings)),
        Err(e) => {
            tracing::error!(error = %e, "reading cycle failed");
            json_response(500, json!({ "error": e.to_string() }))
        }
    }
}

fn text_response(status_code: u16, body: String) -> HttpResponse {
    with_content_type(
        Response::from_string(body).with_status_code(status_code),
        "text/plain; charset=utf-8",
    )
}

fn json_response(status_code: u16, json: serde_json::Value) -> HttpResponse {
    with_content_type(
        Response::from_string(json.to_string()).with_status_code(status_code),
        "application/json",
    )
}

fn with_content_type(response: HttpResponse, content_type: &str) -> HttpResponse {
    match Header::from_bytes(&b"Content-Type"[..], content_type.as_bytes()) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
