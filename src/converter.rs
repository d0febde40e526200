// ABOUTME: Conversion dispatcher mapping (category, from_unit, to_unit) to formulas
// ABOUTME: Holds the static rule table and the single unsupported-conversion outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FreeUnitsConverter

//! # Conversion Dispatcher
//!
//! The core of the service: a static table of conversion rules and a pure
//! dispatch function over it. A rule matches on exact, case-sensitive
//! string equality of its unit pair within one category; anything else is
//! the uniform [`UnsupportedConversion`] outcome. The table is built at
//! compile time and never mutated, so dispatch is safe under arbitrary
//! concurrency with no locking.

use crate::constants::units;
use std::fmt;
use thiserror::Error;

/// Conversion domain tag
///
/// Categories never interoperate: a lookup in one category never consults
/// another category's rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionCategory {
    /// Length conversions (meters, feet)
    Length,
    /// Weight conversions (kg, lbs)
    Weight,
    /// Temperature conversions (C, F)
    Temperature,
    /// Time conversions (hours, minutes)
    Time,
    /// Volume conversions (liters, gallons)
    Volume,
}

impl ConversionCategory {
    /// Lowercase name as it appears in API paths
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Weight => "weight",
            Self::Temperature => "temperature",
            Self::Time => "time",
            Self::Volume => "volume",
        }
    }
}

impl fmt::Display for ConversionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single conversion request, constructed per call and discarded after
/// the response
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Conversion domain
    pub category: ConversionCategory,
    /// Source unit identifier, matched verbatim
    pub from_unit: String,
    /// Target unit identifier, matched verbatim
    pub to_unit: String,
    /// Value to convert; may be any IEEE-754 double, finite or not
    pub value: f64,
}

/// The uniform failure outcome for any unmatched (category, from, to) triple
///
/// This is a normal return value, not an exceptional condition: unknown
/// units, same-unit pairs, and case mismatches all land here without
/// distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Conversion not supported")]
pub struct UnsupportedConversion;

/// A registered conversion rule: one unit pair within one category bound to
/// a pure formula
struct ConversionRule {
    category: ConversionCategory,
    from_unit: &'static str,
    to_unit: &'static str,
    apply: fn(f64) -> f64,
}

fn meters_to_feet(value: f64) -> f64 {
    value * units::FEET_PER_METER
}

fn feet_to_meters(value: f64) -> f64 {
    value / units::FEET_PER_METER
}

fn kilograms_to_pounds(value: f64) -> f64 {
    value * units::POUNDS_PER_KILOGRAM
}

fn pounds_to_kilograms(value: f64) -> f64 {
    value / units::POUNDS_PER_KILOGRAM
}

fn celsius_to_fahrenheit(value: f64) -> f64 {
    value * 9.0 / 5.0 + units::FAHRENHEIT_FREEZING_POINT
}

fn fahrenheit_to_celsius(value: f64) -> f64 {
    (value - units::FAHRENHEIT_FREEZING_POINT) * 5.0 / 9.0
}

fn hours_to_minutes(value: f64) -> f64 {
    value * units::MINUTES_PER_HOUR
}

fn minutes_to_hours(value: f64) -> f64 {
    value / units::MINUTES_PER_HOUR
}

fn liters_to_gallons(value: f64) -> f64 {
    value * units::GALLONS_PER_LITER
}

fn gallons_to_liters(value: f64) -> f64 {
    value / units::GALLONS_PER_LITER
}

/// The full rule table, read-only for the process lifetime
static RULES: &[ConversionRule] = &[
    ConversionRule {
        category: ConversionCategory::Length,
        from_unit: "meters",
        to_unit: "feet",
        apply: meters_to_feet,
    },
    ConversionRule {
        category: ConversionCategory::Length,
        from_unit: "feet",
        to_unit: "meters",
        apply: feet_to_meters,
    },
    ConversionRule {
        category: ConversionCategory::Weight,
        from_unit: "kg",
        to_unit: "lbs",
        apply: kilograms_to_pounds,
    },
    ConversionRule {
        category: ConversionCategory::Weight,
        from_unit: "lbs",
        to_unit: "kg",
        apply: pounds_to_kilograms,
    },
    ConversionRule {
        category: ConversionCategory::Temperature,
        from_unit: "C",
        to_unit: "F",
        apply: celsius_to_fahrenheit,
    },
    ConversionRule {
        category: ConversionCategory::Temperature,
        from_unit: "F",
        to_unit: "C",
        apply: fahrenheit_to_celsius,
    },
    ConversionRule {
        category: ConversionCategory::Time,
        from_unit: "hours",
        to_unit: "minutes",
        apply: hours_to_minutes,
    },
    ConversionRule {
        category: ConversionCategory::Time,
        from_unit: "minutes",
        to_unit: "hours",
        apply: minutes_to_hours,
    },
    ConversionRule {
        category: ConversionCategory::Volume,
        from_unit: "liters",
        to_unit: "gallons",
        apply: liters_to_gallons,
    },
    ConversionRule {
        category: ConversionCategory::Volume,
        from_unit: "gallons",
        to_unit: "liters",
        apply: gallons_to_liters,
    },
];

/// Apply the rule matching the request, or report the unsupported outcome
///
/// Matching is exact and case-sensitive with no normalization or trimming.
/// The value flows through standard IEEE-754 arithmetic with no rounding,
/// clamping, or finiteness checks.
///
/// # Errors
///
/// Returns [`UnsupportedConversion`] when no rule matches the request's
/// (category, `from_unit`, `to_unit`) triple.
pub fn convert(request: &ConversionRequest) -> Result<f64, UnsupportedConversion> {
    RULES
        .iter()
        .find(|rule| {
            rule.category == request.category
                && rule.from_unit == request.from_unit
                && rule.to_unit == request.to_unit
        })
        .map(|rule| (rule.apply)(request.value))
        .ok_or(UnsupportedConversion)
}

/// Enumerate the registered unit pairs for one category
pub fn supported_pairs(
    category: ConversionCategory,
) -> impl Iterator<Item = (&'static str, &'static str)> {
    RULES
        .iter()
        .filter(move |rule| rule.category == category)
        .map(|rule| (rule.from_unit, rule.to_unit))
}
