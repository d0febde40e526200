// ABOUTME: Configuration module for the FreeUnitsConverter API server
// ABOUTME: Environment-driven settings for port, logging, and CORS policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FreeUnitsConverter

/// Environment-based server configuration
pub mod environment;

pub use environment::{CorsConfig, LogLevel, ServerConfig};
