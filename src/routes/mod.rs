// ABOUTME: Route module organization for the FreeUnitsConverter HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FreeUnitsConverter

//! Route module for the FreeUnitsConverter API
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the conversion dispatcher.

/// Unit conversion endpoints
pub mod convert;
/// API root welcome endpoint
pub mod welcome;

/// Conversion route handlers
pub use convert::ConvertRoutes;
/// Welcome route handlers
pub use welcome::WelcomeRoutes;
