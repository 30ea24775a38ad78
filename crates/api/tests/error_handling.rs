//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests call `IntoResponse` directly on `AppError` values; no server
//! or database is needed.

use axum::http::{header, Method, StatusCode};
use axum::response::IntoResponse;
use http_body_util::BodyExt;

use camsvc_api::error::{AppError, DbResultExt};
use camsvc_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and text body.
async fn error_to_response(err: AppError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("text/plain"),
        "unexpected content type {content_type:?}"
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_hides_the_id() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "camera",
        id: 42,
    });

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "camera not found");
    assert!(!body.contains("42"));
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation(
        "request does not contain required parameter count: cannot parse integer from empty string"
            .into(),
    ));

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("request does not contain required parameter count"));
}

// ---------------------------------------------------------------------------
// HTTP errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("error parsing camera id: Invalid URL".into());

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "error parsing camera id: Invalid URL");
}

// ---------------------------------------------------------------------------
// Database errors without a SQLSTATE
// ---------------------------------------------------------------------------

#[tokio::test]
async fn vanished_row_returns_404() {
    let result: Result<(), sqlx::Error> = Err(sqlx::Error::RowNotFound);
    let err = result.for_method(&Method::PATCH).unwrap_err();

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "resource not found");
}

#[tokio::test]
async fn pool_timeout_returns_500_with_driver_text() {
    let expected = sqlx::Error::PoolTimedOut.to_string();
    let result: Result<(), sqlx::Error> = Err(sqlx::Error::PoolTimedOut);
    let err = result.for_method(&Method::GET).unwrap_err();

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, expected);
}
