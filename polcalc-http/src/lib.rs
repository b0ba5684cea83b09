//! Polcalc HTTP API Server
//!
//! This crate provides the HTTP API for the polcalc expression evaluation
//! engine: a single JSON endpoint that accepts a prefix or infix expression
//! and responds with its numeric result.

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;

use server::{ServerConfig, start_server};

/// Start the polcalc HTTP server with the default configuration
pub async fn start() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    start_server(ServerConfig::default()).await
}

/// Start the polcalc HTTP server with a custom configuration
pub async fn start_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    start_server(config).await
}
