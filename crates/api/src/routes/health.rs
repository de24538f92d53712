use axum::{routing::get, Router};
use serde::Serialize;

use crate::writer::{write_success, BufferedResponse};

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health -- wrapped in the standard success envelope.
async fn health_check() -> BufferedResponse {
    let mut writer = BufferedResponse::new();
    write_success(
        &mut writer,
        HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        },
    );
    writer
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router {
    Router::new().route("/health", get(health_check))
}
