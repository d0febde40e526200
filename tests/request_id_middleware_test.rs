// ABOUTME: Integration tests for the request ID middleware
// ABOUTME: Verifies UUID generation, header reflection, and handler access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FreeUnitsConverter

//! Integration tests for request ID middleware
//!
//! Tests the request ID middleware functionality including:
//! - UUID generation for each request
//! - Request ID propagation through the request/response lifecycle
//! - Request ID availability in handlers via extensions

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    body::{to_bytes, Body},
    http::{Request as HttpRequest, StatusCode},
    middleware,
    routing::get,
    Extension, Router,
};
use std::error::Error;
use tower::ServiceExt;
use units_converter_server::middleware::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
use uuid::Uuid;

async fn test_handler(Extension(request_id): Extension<RequestId>) -> String {
    format!("Request ID: {}", request_id.as_str())
}

fn app() -> Router {
    Router::new()
        .route("/", get(test_handler))
        .layer(middleware::from_fn(request_id_middleware))
}

#[tokio::test]
async fn test_request_id_middleware_generates_id() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder().uri("/").body(Body::empty())?;

    let response = app().oneshot(request).await?;

    let request_id_header = response.headers().get(REQUEST_ID_HEADER);
    assert!(request_id_header.is_some(), "Request ID header not present");

    if let Some(header_value) = request_id_header {
        let request_id_str = header_value.to_str()?;
        assert!(
            Uuid::parse_str(request_id_str).is_ok(),
            "Request ID is not a valid UUID"
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_request_id_available_in_handler() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder().uri("/").body(Body::empty())?;

    let response = app().oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await?;
    let body_str = String::from_utf8(body.to_vec())?;
    assert!(body_str.starts_with("Request ID: "));

    Ok(())
}

#[tokio::test]
async fn test_incoming_request_id_is_reused() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder()
        .uri("/")
        .header(REQUEST_ID_HEADER, "upstream-id-123")
        .body(Body::empty())?;

    let response = app().oneshot(request).await?;

    let header_value = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .expect("Request ID header not present");
    assert_eq!(header_value, "upstream-id-123");

    let body = to_bytes(response.into_body(), usize::MAX).await?;
    let body_str = String::from_utf8(body.to_vec())?;
    assert_eq!(body_str, "Request ID: upstream-id-123");

    Ok(())
}
