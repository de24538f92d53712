use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use respond_core::error::{CoreError, DecodeError, ReflectError, ValidationError};

use crate::writer::{write_error, BufferedResponse};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and adds HTTP-specific variants. Implements
/// [`IntoResponse`] by writing an error envelope:
/// `{ "message": "ERROR", "error": "..." }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An error from `respond_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<DecodeError> for AppError {
    fn from(err: DecodeError) -> Self {
        AppError::Core(err.into())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(err.into())
    }
}

impl From<ReflectError> for AppError {
    fn from(err: ReflectError) -> Self {
        AppError::Core(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Core(CoreError::Decode(err)) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::Core(CoreError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            AppError::Core(CoreError::Reflect(err)) => {
                tracing::error!(error = %err, "Reflection error");
                internal()
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let detail: Box<dyn std::error::Error> = detail.into();
        let mut writer = BufferedResponse::new();
        write_error(&mut writer, status, Some(&*detail));
        writer.into_response()
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
    )
}
