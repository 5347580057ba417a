// ABOUTME: HTTP server binary for the Hercules fitness profile service
// ABOUTME: Loads configuration, initializes logging, and serves the API until interrupted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Hercules Server Binary
//!
//! Starts the HTTP API with in-memory storage and the configured ML service.

use anyhow::{Context, Result};
use clap::Parser;
use hercules_server::{
    config::ServerConfig, logging, resources::ServerResources, routes::build_router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "hercules-server")]
#[command(about = "Hercules fitness profile API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    let address = config.bind_address();
    display_available_endpoints(&address);

    let resources = Arc::new(ServerResources::in_memory(config));
    let app = build_router(&resources);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Hercules listening on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Hercules stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(address: &str) {
    info!("=== Available API Endpoints ===");
    info!("   Health:            GET  http://{address}/health");
    info!("   Parse Units:       POST http://{address}/api/units/parse");
    info!("   Normalize Answers: POST http://{address}/api/units/normalize");
    info!("   Sign Up:           POST http://{address}/api/users/{{user_id}}/profile");
    info!("   Onboarding:        POST http://{address}/api/users/{{user_id}}/onboarding");
    info!("   Readiness:         GET  http://{address}/api/users/{{user_id}}/profile/readiness");
    info!("   ML Payload:        GET  http://{address}/api/users/{{user_id}}/profile/ml-payload");
    info!("   Recommendations:   POST http://{address}/api/users/{{user_id}}/recommendations");
    info!("   Logs:              GET  http://{address}/api/users/{{user_id}}/logs/{{kind}}");
    info!("   Dashboard:         GET  http://{address}/api/users/{{user_id}}/dashboard");
    info!("=== End of Endpoint List ===");
}
