// ABOUTME: Router assembly and serve loop for the FreeUnitsConverter API
// ABOUTME: Merges route groups, layers middleware, and runs the axum server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FreeUnitsConverter

//! HTTP server for the conversion API
//!
//! Assembles the router from the route groups, layers CORS, tracing, and
//! request-id middleware, and serves on the configured loopback port.

use crate::config::environment::ServerConfig;
use crate::middleware::{request_id_middleware, setup_cors};
use crate::routes::{ConvertRoutes, WelcomeRoutes};
use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// The conversion API server
pub struct ConverterServer {
    config: Arc<ServerConfig>,
}

impl ConverterServer {
    /// Create a new server from loaded configuration
    #[must_use]
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self { config }
    }

    /// Build the full application router
    ///
    /// Exposed separately from [`run`](Self::run) so tests can drive the
    /// router without binding a socket.
    #[must_use]
    pub fn router(config: &ServerConfig) -> Router {
        Router::new()
            .merge(WelcomeRoutes::routes())
            .merge(ConvertRoutes::routes())
            .layer(setup_cors(config))
            .layer(TraceLayer::new_for_http())
            .layer(axum::middleware::from_fn(request_id_middleware))
    }

    /// Bind the configured port and serve until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server fails
    /// while accepting connections.
    pub async fn run(self) -> Result<()> {
        let router = Self::router(&self.config);
        let addr = SocketAddr::from(([127, 0, 0, 1], self.config.http_port));

        let listener = TcpListener::bind(addr).await?;
        info!("HTTP server listening on http://{addr}");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// Resolve when the process receives a shutdown signal
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {error}");
        return;
    }
    info!("Shutdown signal received, stopping server");
}
