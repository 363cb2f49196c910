//! # mistdebugd — Mist ED debug console daemon
//!
//! Composition root that wires the backend client and the console together
//! and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Construct the reqwest backend client (driven adapter)
//! - Construct the console service, injecting the client via the port trait
//! - Load every resource once before serving
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no console logic belongs here.

mod config;

use std::sync::Arc;

use mistdebug_adapter_backend_reqwest::ReqwestDebugApi;
use mistdebug_adapter_http_axum::state::AppState;
use mistdebug_app::services::console_service::{ConsoleService, Outcome};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    init_tracing(&config.console.log);

    // Backend
    tracing::info!(url = %config.backend.base_url, "using debug backend");
    let api = ReqwestDebugApi::new(config.backend.clone())?;

    // Console
    let console = Arc::new(ConsoleService::new(api));
    let failed = console
        .load_all()
        .await
        .into_iter()
        .filter(|outcome| *outcome == Outcome::Failed)
        .count();
    if failed > 0 {
        tracing::warn!(failed, "initial load incomplete, console starts with empty cards");
    }

    // HTTP
    let app = mistdebug_adapter_http_axum::router::build(AppState::from_arc(console));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("mistdebugd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("mistdebugd stopped");
    Ok(())
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?} ({err}), falling back to info");
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutdown requested");
}
