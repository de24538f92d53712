//! HTTP side of the respond helpers.
//!
//! Exposes the response writer, the strict-JSON extractor, the error type
//! and the demo routes so integration tests and the binary entrypoint can
//! both use them.

pub mod config;
pub mod error;
pub mod extract;
pub mod router;
pub mod routes;
pub mod writer;
