// ABOUTME: HTTP middleware for CORS and request correlation
// ABOUTME: Provides permissive CORS setup and request ID propagation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FreeUnitsConverter

/// CORS configuration
pub mod cors;
/// Request ID generation and propagation
pub mod request_id;

// CORS configuration
pub use cors::setup_cors;

// Request correlation
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
