//! Strict JSON body extractor.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use respond_core::decode::decode_strict;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Like `axum::Json`, but rejects bodies carrying fields `T` does not
/// declare, at any depth, and does not look at `Content-Type`.
///
/// A zero-length body counts as no body and is rejected with
/// "request body is empty".
#[derive(Debug, Clone)]
pub struct StrictJson<T>(pub T);

impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let body = (!bytes.is_empty()).then_some(bytes.as_ref());
        let value = decode_strict(body)?;
        Ok(StrictJson(value))
    }
}
