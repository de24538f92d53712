//! The uniform response envelope.
//!
//! Every reply produced by the response writer is an [`Envelope`]:
//!
//! ```json
//! { "message": "Success", "data": { ... } }
//! { "message": "ERROR", "error": "request body is empty" }
//! ```
//!
//! Empty strings and a missing payload are omitted from the wire entirely.
//! By convention exactly one of `data` and `error` is populated, but the
//! type does not enforce it.

use serde::{Deserialize, Serialize};

/// `{ message, data, error }` reply wrapper.
///
/// `T` defaults to [`serde_json::Value`] so callers that only have an
/// untyped payload (or none at all) can write `Envelope::new(..)` without
/// naming a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    error: String,
}

impl<T> Envelope<T> {
    /// Build an envelope. No validation is performed.
    pub fn new(message: impl Into<String>, data: Option<T>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data,
            error: error.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    /// Consume the envelope, returning its payload.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
