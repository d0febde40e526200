// ABOUTME: Welcome route handler for the API root endpoint
// ABOUTME: Returns the service greeting consumed by frontends probing the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FreeUnitsConverter

//! Welcome route for the API root

/// Welcome routes implementation
pub struct WelcomeRoutes;

impl WelcomeRoutes {
    /// Create the root welcome route
    #[must_use]
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn welcome_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "message": "Welcome to FreeUnitsConverter API"
            }))
        }

        Router::new().route("/", get(welcome_handler))
    }
}
