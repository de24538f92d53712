//! Transport-free building blocks for JSON APIs.
//!
//! - [`envelope::Envelope`] -- the uniform `{message, data, error}` reply.
//! - [`decode::decode_strict`] -- JSON decoding that rejects unknown fields.
//! - [`shape`] -- static field/type descriptions and the reflection helpers
//!   built on them.
//! - [`validate::validate_non_empty`] -- presence checks for text and
//!   integer values.

pub mod decode;
pub mod envelope;
pub mod error;
pub mod shape;
pub mod validate;
