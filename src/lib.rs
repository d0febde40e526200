// ABOUTME: Main library entry point for the FreeUnitsConverter API server
// ABOUTME: Provides the conversion dispatcher and the HTTP layer around it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FreeUnitsConverter

#![deny(unsafe_code)]

//! # FreeUnitsConverter API
//!
//! A stateless HTTP service exposing unit-conversion endpoints for length,
//! weight, temperature, time, and volume. Each endpoint takes a numeric
//! value and two unit identifiers and answers with either the converted
//! value or a uniform "not supported" body.
//!
//! ## Architecture
//!
//! - **Converter**: the conversion dispatcher and its static rule table
//! - **Routes**: thin axum handlers that parse query parameters and
//!   serialize dispatcher outcomes
//! - **Middleware**: permissive CORS and request-id propagation
//! - **Config**: environment-driven server configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use units_converter_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("FreeUnitsConverter API configured with port: {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration management
pub mod config;

/// Application constants and unit-conversion factors
pub mod constants;

/// Conversion dispatcher and the static rule table
pub mod converter;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for CORS and request correlation
pub mod middleware;

/// HTTP routes for the conversion API
pub mod routes;

/// Router assembly and the serve loop
pub mod server;
