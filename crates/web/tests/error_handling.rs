//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly; no server or CMS is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use sope_web::error::AppError;

/// Helper: convert an `AppError` into its status code and HTML body.
async fn error_to_response(err: AppError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// ---------------------------------------------------------------------------
// Test: AppError::NotFound maps to 404 with the not-found page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let (status, html) = error_to_response(AppError::NotFound("/nada".into())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Página não encontrada"));
}

// ---------------------------------------------------------------------------
// Test: AppError::Internal maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::Internal("secret payload credentials leaked".into());

    let (status, html) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains("An internal error occurred."));
    assert!(!html.contains("secret payload credentials"));
}
