// ABOUTME: Request ID middleware for correlation and structured logging
// ABOUTME: Honors incoming x-request-id headers or generates a UUID per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FreeUnitsConverter

use axum::{extract::Request, middleware::Next, response::Response};
use http::HeaderValue;
use tracing::Span;
use uuid::Uuid;

/// Header carrying the request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation ID that flows through one request lifecycle
///
/// Available to handlers via request extensions and reflected back to the
/// client on the response.
#[derive(Debug, Clone)]
pub struct RequestId(String);

impl RequestId {
    /// The ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Attach a request ID to every request and reflect it on the response
///
/// An incoming `x-request-id` header is reused so upstream proxies keep
/// their correlation chain; otherwise a fresh UUID is generated.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_owned);

    Span::current().record("request_id", request_id.as_str());
    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER, header_value);
    }

    response
}
