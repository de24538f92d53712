//! Writing [`Envelope`]s onto an HTTP response.
//!
//! [`ResponseWriter`] models a response under construction: headers, then a
//! status line, then body bytes, in that order. [`BufferedResponse`] is the
//! in-memory implementation handlers return to axum.
//!
//! Encoding and body-write failures are not returned to callers: by the time
//! the body is encoded the status has been committed, so there is nothing
//! useful a caller could do. They are logged at `error` level instead.

use std::io;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use respond_core::envelope::Envelope;
use serde::Serialize;

/// Message used by [`write_success`].
pub const SUCCESS_MESSAGE: &str = "Success";

/// Message used by [`write_error`] when an error is present.
pub const ERROR_MESSAGE: &str = "ERROR";

/// A response being written.
pub trait ResponseWriter {
    /// Set a header. Has no effect once the status has been written.
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    /// Commit the status line. Only the first call counts.
    fn write_status(&mut self, status: StatusCode);

    /// Append body bytes, committing `200 OK` first if no status was written.
    fn write_body(&mut self, chunk: &[u8]) -> io::Result<()>;
}

/// In-memory [`ResponseWriter`] that converts into an axum [`Response`].
#[derive(Debug, Default)]
pub struct BufferedResponse {
    headers: HeaderMap,
    status: Option<StatusCode>,
    body: Vec<u8>,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed status, if any.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl ResponseWriter for BufferedResponse {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        if self.status.is_some() {
            tracing::warn!(header = %name, "Header set after status was written, ignoring");
            return;
        }
        self.headers.insert(name, value);
    }

    fn write_status(&mut self, status: StatusCode) {
        match self.status {
            Some(committed) => {
                tracing::warn!(
                    committed = committed.as_u16(),
                    attempted = status.as_u16(),
                    "Superfluous status write, ignoring"
                );
            }
            None => self.status = Some(status),
        }
    }

    fn write_body(&mut self, chunk: &[u8]) -> io::Result<()> {
        if self.status.is_none() {
            self.status = Some(StatusCode::OK);
        }
        self.body.extend_from_slice(chunk);
        Ok(())
    }
}

impl IntoResponse for BufferedResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status.unwrap_or(StatusCode::OK);
        *response.headers_mut() = self.headers;
        response
    }
}

/// Write `envelope` as the JSON body of `w` with the given status.
///
/// Sets `Content-Type: application/json`, commits `status`, then writes the
/// encoded envelope followed by a newline.
pub fn write_json<W, T>(w: &mut W, status: StatusCode, envelope: &Envelope<T>)
where
    W: ResponseWriter + ?Sized,
    T: Serialize,
{
    w.set_header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    w.write_status(status);

    // Status is already on the wire; an encode failure can only be logged.
    let mut body = match serde_json::to_vec(envelope) {
        Ok(body) => body,
        Err(err) => {
            tracing::error!(error = %err, status = status.as_u16(), "Failed to encode response envelope");
            return;
        }
    };
    body.push(b'\n');

    if let Err(err) = w.write_body(&body) {
        tracing::error!(error = %err, status = status.as_u16(), "Failed to write response body");
    }
}

/// `{ "data": data }` with the given status.
pub fn write_json_data<W, T>(w: &mut W, status: StatusCode, data: T)
where
    W: ResponseWriter + ?Sized,
    T: Serialize,
{
    write_json(w, status, &Envelope::new("", Some(data), ""));
}

/// `200 OK` with `{ "message": "Success", "data": data }`.
pub fn write_success<W, T>(w: &mut W, data: T)
where
    W: ResponseWriter + ?Sized,
    T: Serialize,
{
    write_json(w, StatusCode::OK, &Envelope::new(SUCCESS_MESSAGE, Some(data), ""));
}

/// `{ "message": "ERROR", "error": err.to_string() }`, never with data.
///
/// With `None` both message and error are left empty, which encodes as `{}`.
pub fn write_error<W>(w: &mut W, status: StatusCode, err: Option<&dyn std::error::Error>)
where
    W: ResponseWriter + ?Sized,
{
    let (message, error) = match err {
        Some(err) => (ERROR_MESSAGE, err.to_string()),
        None => ("", String::new()),
    };
    let envelope: Envelope = Envelope::new(message, None, error);
    write_json(w, status, &envelope);
}

/// `{ "data": "", "error": message_error }`.
///
/// Unlike [`write_error`], `data` is present as an empty string.
pub fn write_message_error<W>(w: &mut W, status: StatusCode, message_error: &str)
where
    W: ResponseWriter + ?Sized,
{
    write_json(w, status, &Envelope::new("", Some(""), message_error));
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    /// Records the order in which a writer is driven.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl ResponseWriter for Recorder {
        fn set_header(&mut self, _name: HeaderName, _value: HeaderValue) {
            self.calls.push("header");
        }

        fn write_status(&mut self, _status: StatusCode) {
            self.calls.push("status");
        }

        fn write_body(&mut self, _chunk: &[u8]) -> io::Result<()> {
            self.calls.push("body");
            Ok(())
        }
    }

    struct Broken;

    impl ResponseWriter for Broken {
        fn set_header(&mut self, _name: HeaderName, _value: HeaderValue) {}

        fn write_status(&mut self, _status: StatusCode) {}

        fn write_body(&mut self, _chunk: &[u8]) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "client went away"))
        }
    }

    #[test]
    fn header_then_status_then_body() {
        let mut recorder = Recorder::default();
        write_success(&mut recorder, 1);
        assert_eq!(recorder.calls, ["header", "status", "body"]);
    }

    #[test]
    fn body_is_newline_terminated() {
        let mut w = BufferedResponse::new();
        write_json_data(&mut w, StatusCode::CREATED, "x");
        assert_eq!(w.body(), b"{\"data\":\"x\"}\n");
        assert_eq!(w.status(), Some(StatusCode::CREATED));
        assert_eq!(w.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn encode_failure_commits_status_without_body() {
        let mut grid = BTreeMap::new();
        grid.insert((0, 0), "origin");

        let mut w = BufferedResponse::new();
        write_json_data(&mut w, StatusCode::OK, grid);
        assert_eq!(w.status(), Some(StatusCode::OK));
        assert_eq!(w.headers()[CONTENT_TYPE], "application/json");
        assert!(w.body().is_empty());
    }

    #[test]
    fn body_write_failure_is_not_propagated() {
        write_success(&mut Broken, "ignored");
    }

    #[test]
    fn headers_after_status_are_ignored() {
        let mut w = BufferedResponse::new();
        w.write_status(StatusCode::ACCEPTED);
        w.set_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        w.write_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(w.headers().get(CONTENT_TYPE).is_none());
        assert_eq!(w.status(), Some(StatusCode::ACCEPTED));
    }

    #[test]
    fn body_without_status_commits_ok() {
        let mut w = BufferedResponse::new();
        w.write_body(b"hi").unwrap();
        assert_eq!(w.status(), Some(StatusCode::OK));
    }
}
