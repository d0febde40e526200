// ABOUTME: Server binary for the FreeUnitsConverter API
// ABOUTME: Loads configuration, initializes logging, and runs the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FreeUnitsConverter

//! # FreeUnitsConverter API Server Binary
//!
//! Starts the stateless unit-conversion HTTP service.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use units_converter_server::{
    config::environment::ServerConfig,
    converter::{self, ConversionCategory},
    logging,
    server::ConverterServer,
};

/// Command-line arguments for the server binary
#[derive(Parser)]
#[command(name = "units-converter-server")]
#[command(about = "FreeUnitsConverter API - stateless unit conversion service")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Container environments sometimes pass arguments clap cannot parse;
    // fall back to environment-only configuration instead of exiting.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using environment configuration");
            Args { http_port: None }
        }
    };

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting FreeUnitsConverter API");
    info!("{}", config.summary());

    display_available_endpoints(&config);

    let server = ConverterServer::new(Arc::new(config));
    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints and their supported unit pairs
fn display_available_endpoints(config: &ServerConfig) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("   Welcome:  GET http://{host}:{port}/");
    for category in [
        ConversionCategory::Length,
        ConversionCategory::Weight,
        ConversionCategory::Temperature,
        ConversionCategory::Time,
        ConversionCategory::Volume,
    ] {
        info!(
            "   Convert:  GET http://{host}:{port}/api/convert/{category}?value=<f64>&from_unit=<str>&to_unit=<str>"
        );
        for (from_unit, to_unit) in converter::supported_pairs(category) {
            info!("      {from_unit} -> {to_unit}");
        }
    }
    info!("=== End of Endpoint List ===");
}
