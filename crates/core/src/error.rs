use crate::validate::FieldKind;

/// Errors produced while decoding an inbound request body.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("request body is empty")]
    EmptyBody,

    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("malformed JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),
}

/// Errors produced by the shape and serialization helpers.
#[derive(Debug, thiserror::Error)]
pub enum ReflectError {
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unsupported shape: {0} has no fields")]
    UnsupportedShape(&'static str),
}

/// Errors produced by [`validate_non_empty`](crate::validate::validate_non_empty).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("fields cannot be empty or contain spaces")]
    EmptyField,

    #[error("integer fields cannot be zero")]
    ZeroField,

    #[error("unsupported field type: {0}")]
    UnsupportedKind(FieldKind),
}

/// Any error raised by this crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Reflect(#[from] ReflectError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
