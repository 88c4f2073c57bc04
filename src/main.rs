//! glimmerweb crate entrypoint.
//!
//! Configures logging, starts the Tokio runtime and hands control to the
//! web server in the `server` module. This file stays minimal; the
//! application lives in `server`, `config` and `html`.
//!
/// HTTP server implementation and request handling
mod server;
/// Configuration management and settings
mod config;
/// Embedded tutorial page markup
mod html;

use tracing_subscriber::EnvFilter;

/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() {
    // Debug verbosity unless RUST_LOG says otherwise.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    server::run().await;
}
