// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FreeUnitsConverter

//! Environment-based configuration management

use crate::constants::env_config;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Standard operational logging
    #[default]
    Info,
    /// Verbose diagnostics
    Debug,
    /// Full tracing output
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// CORS boundary policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated allowed origins, or `*` for any
    pub allowed_origins: String,
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// CORS settings
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// `HTTP_PORT` defaults to 8000, `LOG_LEVEL` to `info`, and
    /// `CORS_ALLOWED_ORIGINS` to `*`. Unparseable values fall back to the
    /// defaults rather than failing startup.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration source fails to load.
    #[allow(clippy::unnecessary_wraps)]
    pub fn from_env() -> Result<Self> {
        let log_level = env::var("LOG_LEVEL")
            .map(|value| LogLevel::from_str_or_default(&value))
            .unwrap_or_default();

        Ok(Self {
            http_port: env_config::http_port(),
            log_level,
            cors: CorsConfig {
                allowed_origins: env_config::cors_allowed_origins(),
            },
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} log_level={} cors_allowed_origins={}",
            self.http_port, self.log_level, self.cors.allowed_origins
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
        assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
    }

    #[test]
    fn test_summary_contains_port() {
        let config = ServerConfig {
            http_port: 9123,
            log_level: LogLevel::Info,
            cors: CorsConfig {
                allowed_origins: "*".into(),
            },
        };
        assert!(config.summary().contains("9123"));
        assert!(config.summary().contains("info"));
    }
}
