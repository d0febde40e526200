// ABOUTME: Conversion route handlers for the five unit-conversion endpoints
// ABOUTME: Parses query parameters and serializes dispatcher outcomes as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FreeUnitsConverter

//! Unit conversion routes
//!
//! One endpoint per category, all sharing the same parameter and response
//! shape. Handlers stay thin: build a [`ConversionRequest`], dispatch, and
//! serialize. The unsupported outcome is answered with HTTP 200 and an
//! `error` body; it is expected data, not a transport failure.

use crate::converter::{self, ConversionCategory, ConversionRequest};
use axum::{extract::Query, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Query parameters shared by every conversion endpoint
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    /// Value to convert
    pub value: f64,
    /// Source unit identifier
    pub from_unit: String,
    /// Target unit identifier
    pub to_unit: String,
}

/// Response body with exactly one key: `result` on success, `error` on the
/// unsupported outcome
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ConversionResponse {
    /// Successful conversion
    Result {
        /// Converted value
        result: f64,
    },
    /// Unsupported conversion
    Error {
        /// Literal error indicator
        error: String,
    },
}

/// Conversion route handlers
pub struct ConvertRoutes;

impl ConvertRoutes {
    /// Create all conversion routes
    #[must_use]
    pub fn routes() -> Router {
        Router::new()
            .route("/api/convert/length", get(Self::handle_length))
            .route("/api/convert/weight", get(Self::handle_weight))
            .route("/api/convert/temperature", get(Self::handle_temperature))
            .route("/api/convert/time", get(Self::handle_time))
            .route("/api/convert/volume", get(Self::handle_volume))
    }

    async fn handle_length(Query(params): Query<ConvertQuery>) -> Json<ConversionResponse> {
        Self::respond(ConversionCategory::Length, params)
    }

    async fn handle_weight(Query(params): Query<ConvertQuery>) -> Json<ConversionResponse> {
        Self::respond(ConversionCategory::Weight, params)
    }

    async fn handle_temperature(Query(params): Query<ConvertQuery>) -> Json<ConversionResponse> {
        Self::respond(ConversionCategory::Temperature, params)
    }

    async fn handle_time(Query(params): Query<ConvertQuery>) -> Json<ConversionResponse> {
        Self::respond(ConversionCategory::Time, params)
    }

    async fn handle_volume(Query(params): Query<ConvertQuery>) -> Json<ConversionResponse> {
        Self::respond(ConversionCategory::Volume, params)
    }

    /// Dispatch one request and wrap the outcome in the response shape
    fn respond(category: ConversionCategory, params: ConvertQuery) -> Json<ConversionResponse> {
        let request = ConversionRequest {
            category,
            from_unit: params.from_unit,
            to_unit: params.to_unit,
            value: params.value,
        };

        match converter::convert(&request) {
            Ok(result) => {
                debug!(
                    conversion.category = %request.category,
                    conversion.from_unit = %request.from_unit,
                    conversion.to_unit = %request.to_unit,
                    "Conversion served"
                );
                Json(ConversionResponse::Result { result })
            }
            Err(unsupported) => {
                debug!(
                    conversion.category = %request.category,
                    conversion.from_unit = %request.from_unit,
                    conversion.to_unit = %request.to_unit,
                    "Conversion not supported"
                );
                Json(ConversionResponse::Error {
                    error: unsupported.to_string(),
                })
            }
        }
    }
}
