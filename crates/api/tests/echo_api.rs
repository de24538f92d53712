//! Integration tests for the demo routes: strict decoding, validation and
//! the shape endpoint, through the full middleware stack.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_raw};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: GET /health returns the success envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_success_envelope() {
    let response = get(build_test_app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let json = body_json(response).await;
    assert_eq!(json["message"], "Success");
    assert_eq!(json["data"]["status"], "ok");
    assert!(json["data"]["version"].is_string());
}

// ---------------------------------------------------------------------------
// Test: a body with only declared fields is echoed back
// ---------------------------------------------------------------------------

#[tokio::test]
async fn echo_accepts_declared_fields() {
    let response = post_raw(build_test_app(), "/api/v1/echo", r#"{"name":"Ana","age":30}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({"message": "Success", "data": {"name": "Ana", "age": 30}})
    );
}

// ---------------------------------------------------------------------------
// Test: an undeclared field is rejected, not ignored
// ---------------------------------------------------------------------------

#[tokio::test]
async fn echo_rejects_unknown_field() {
    let response = post_raw(
        build_test_app(),
        "/api/v1/echo",
        r#"{"name":"Ana","age":30,"admin":true}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "ERROR");
    assert_eq!(json["error"], "unknown field `admin`");
    assert!(json.get("data").is_none());
}

// ---------------------------------------------------------------------------
// Test: an empty body is reported as such
// ---------------------------------------------------------------------------

#[tokio::test]
async fn echo_rejects_empty_body() {
    let response = post_raw(build_test_app(), "/api/v1/echo", "").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "request body is empty");
}

// ---------------------------------------------------------------------------
// Test: invalid JSON and type mismatches are 400s
// ---------------------------------------------------------------------------

#[tokio::test]
async fn echo_rejects_malformed_json() {
    for body in [r#"{"name":"Ana""#, r#"{"name":"Ana","age":"thirty"}"#, "[]"] {
        let response = post_raw(build_test_app(), "/api/v1/echo", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let json = body_json(response).await;
        assert_eq!(json["message"], "ERROR");
        assert!(json["error"]
            .as_str()
            .unwrap()
            .starts_with("malformed JSON"));
    }
}

// ---------------------------------------------------------------------------
// Test: decoded values still go through the presence validator
// ---------------------------------------------------------------------------

#[tokio::test]
async fn echo_rejects_blank_name_and_zero_age() {
    let response = post_raw(build_test_app(), "/api/v1/echo", r#"{"name":"   ","age":30}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "fields cannot be empty or contain spaces");

    let response = post_raw(build_test_app(), "/api/v1/echo", r#"{"name":"Ana","age":0}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "integer fields cannot be zero");
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/schema describes the greeting shape
// ---------------------------------------------------------------------------

#[tokio::test]
async fn schema_lists_field_types() {
    let response = get(build_test_app(), "/api/v1/schema").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!({"data": {"name": "String", "age": "i64"}}));
}
