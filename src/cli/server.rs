//! HTTP server mode for running simulations over REST
//!
//! Each request is an independent, stateless run; there is no shared
//! mutable state between requests.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::SimulationConfig;
use crate::engine;
use crate::error::{Error, Result};
use crate::report;
use crate::source::RandomSampler;

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Start the HTTP server
pub async fn serve(port: u16) -> Result<()> {
    // Allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/simulate", post(simulate))
        .route("/simulate/csv", post(simulate_csv))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Run a simulation and return the report as JSON
async fn simulate(Json(config): Json<SimulationConfig>) -> impl IntoResponse {
    let mut sampler = RandomSampler::new();
    match engine::run_simulation(&config, &mut sampler) {
        Ok(outcome) => (StatusCode::OK, Json(ApiResponse::success(outcome))).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Run a simulation and return the result as a CSV download
async fn simulate_csv(Json(config): Json<SimulationConfig>) -> impl IntoResponse {
    let mut sampler = RandomSampler::new();
    let outcome = match engine::run_simulation(&config, &mut sampler) {
        Ok(outcome) => outcome,
        Err(e) => return error_response(&e),
    };

    let Some(run_report) = outcome.report() else {
        return (
            StatusCode::OK,
            Json(ApiResponse::<()>::error(
                "No IDs supplied, nothing to export",
            )),
        )
            .into_response();
    };

    match report::to_csv_bytes(&run_report.records) {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, report::CSV_MIME.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", report::CSV_FILE_NAME),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

/// Map an error to an HTTP response
fn error_response(e: &Error) -> Response {
    let status = if e.is_validation() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(ApiResponse::<()>::error(e.to_string()))).into_response()
}
