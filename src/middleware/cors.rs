// ABOUTME: CORS middleware configuration for the conversion API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for web client access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FreeUnitsConverter

use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Configure CORS settings for the conversion API
///
/// The API is consumed by browser frontends, so the default policy is fully
/// permissive: any origin, any method, any header. `CORS_ALLOWED_ORIGINS`
/// narrows the origin list for deployments that want it.
///
/// # Examples
///
/// ```bash
/// # Allow all origins (default)
/// export CORS_ALLOWED_ORIGINS="*"
///
/// # Allow specific origins
/// export CORS_ALLOWED_ORIGINS="https://freeunitsconverter.com,https://www.freeunitsconverter.com"
/// ```
#[must_use]
pub fn setup_cors(config: &crate::config::environment::ServerConfig) -> CorsLayer {
    let allow_origin =
        if config.cors.allowed_origins.is_empty() || config.cors.allowed_origins == "*" {
            AllowOrigin::any()
        } else {
            let origins: Vec<HeaderValue> = config
                .cors
                .allowed_origins
                .split(',')
                .filter_map(|s| {
                    let trimmed = s.trim();
                    if trimmed.is_empty() {
                        None
                    } else {
                        HeaderValue::from_str(trimmed).ok()
                    }
                })
                .collect();

            if origins.is_empty() {
                // Fallback to any if parsing failed
                AllowOrigin::any()
            } else {
                AllowOrigin::list(origins)
            }
        };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
