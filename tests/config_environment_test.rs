// ABOUTME: Integration tests for environment-driven server configuration
// ABOUTME: Exercises env var parsing, defaults, and fallback behavior serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FreeUnitsConverter

//! Integration tests for environment configuration
//!
//! These tests mutate process environment variables, so they run serially.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use serial_test::serial;
use std::env;
use units_converter_server::config::environment::{LogLevel, ServerConfig};

fn clear_config_env() {
    env::remove_var("HTTP_PORT");
    env::remove_var("LOG_LEVEL");
    env::remove_var("CORS_ALLOWED_ORIGINS");
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_config_env();

    let config = ServerConfig::from_env().expect("config must load");
    assert_eq!(config.http_port, 8000);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.cors.allowed_origins, "*");
}

#[test]
#[serial]
fn test_http_port_override() {
    clear_config_env();
    env::set_var("HTTP_PORT", "9001");

    let config = ServerConfig::from_env().expect("config must load");
    assert_eq!(config.http_port, 9001);

    clear_config_env();
}

#[test]
#[serial]
fn test_invalid_http_port_falls_back_to_default() {
    clear_config_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let config = ServerConfig::from_env().expect("config must load");
    assert_eq!(config.http_port, 8000);

    clear_config_env();
}

#[test]
#[serial]
fn test_log_level_from_environment() {
    clear_config_env();
    env::set_var("LOG_LEVEL", "debug");

    let config = ServerConfig::from_env().expect("config must load");
    assert_eq!(config.log_level, LogLevel::Debug);

    clear_config_env();
}

#[test]
#[serial]
fn test_cors_origins_from_environment() {
    clear_config_env();
    env::set_var("CORS_ALLOWED_ORIGINS", "https://freeunitsconverter.com");

    let config = ServerConfig::from_env().expect("config must load");
    assert_eq!(config.cors.allowed_origins, "https://freeunitsconverter.com");

    clear_config_env();
}

#[test]
#[serial]
fn test_summary_reflects_environment() {
    clear_config_env();
    env::set_var("HTTP_PORT", "9002");

    let config = ServerConfig::from_env().expect("config must load");
    assert!(config.summary().contains("http_port=9002"));

    clear_config_env();
}
