//! Demo handlers wiring the strict decoder, the validator and the shape
//! helpers into real routes.

use axum::http::StatusCode;
use respond_core::impl_shape;
use respond_core::shape::field_types;
use respond_core::validate_non_empty;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::StrictJson;
use crate::writer::{write_json_data, write_success, BufferedResponse};

/// Request and response body of `POST /api/v1/echo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Greeting {
    pub name: String,
    pub age: i64,
}

impl_shape!(Greeting {
    name: String,
    age: i64,
});

/// POST /api/v1/echo
pub async fn echo(StrictJson(greeting): StrictJson<Greeting>) -> AppResult<BufferedResponse> {
    validate_non_empty!(&greeting.name, greeting.age)?;

    tracing::debug!(name = %greeting.name, "Echoing greeting");

    let mut writer = BufferedResponse::new();
    write_success(&mut writer, greeting);
    Ok(writer)
}

/// GET /api/v1/schema
pub async fn schema() -> AppResult<BufferedResponse> {
    let fields = field_types::<Greeting>()?;

    let mut writer = BufferedResponse::new();
    write_json_data(&mut writer, StatusCode::OK, fields);
    Ok(writer)
}
