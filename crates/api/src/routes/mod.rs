pub mod greeting;
pub mod health;

use axum::routing::{get, post};
use axum::Router;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /echo      POST  strict-decode, validate and echo a greeting
/// /schema    GET   field-type map of the greeting shape
/// ```
pub fn api_routes() -> Router {
    Router::new()
        .route("/echo", post(greeting::echo))
        .route("/schema", get(greeting::schema))
}
