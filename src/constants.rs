// ABOUTME: System-wide constants and configuration values for the converter API
// ABOUTME: Contains service names, port defaults, env accessors, and unit factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FreeUnitsConverter

//! # Constants Module
//!
//! Application constants and environment variable configuration.
//! Unit-conversion factors live in [`units`] so the rule table never
//! carries magic numbers.

/// Service identification constants
pub mod service_names {
    /// Canonical service name used in logs and startup output
    pub const UNITS_CONVERTER_SERVER: &str = "units-converter-server";
}

/// Default network ports
pub mod ports {
    /// Default HTTP API port
    pub const DEFAULT_HTTP_PORT: u16 = 8000;
}

/// Environment-based configuration accessors
pub mod env_config {
    use std::env;

    /// Get `HTTP` server port from environment or default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .unwrap_or_else(|_| crate::constants::ports::DEFAULT_HTTP_PORT.to_string())
            .parse()
            .unwrap_or(crate::constants::ports::DEFAULT_HTTP_PORT)
    }

    /// Get allowed CORS origins from environment or the permissive default
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".into())
    }
}

/// Unit conversion factors
///
/// Named constants for every linear conversion the rule table registers.
/// Temperature is affine rather than linear, so its formulas live with the
/// rules and only share the freezing-point offset from here.
pub mod units {
    /// Feet per meter
    pub const FEET_PER_METER: f64 = 3.28084;

    /// Pounds per kilogram
    pub const POUNDS_PER_KILOGRAM: f64 = 2.20462;

    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;

    /// Gallons per liter
    pub const GALLONS_PER_LITER: f64 = 0.264172;

    /// Water freezing point on the Fahrenheit scale
    pub const FAHRENHEIT_FREEZING_POINT: f64 = 32.0;
}
