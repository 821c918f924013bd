//! This project is split in 2 main modules:
//!
//! - [soap] (payment provider SOAP client and service bindings)
//! - [web] (example HTTP endpoints built on top of it)
#![doc = include_str!("../README.md")]

use std::net::{Ipv4Addr, SocketAddrV4};

use anyhow::Context;
use axum::Router;
use tracing_subscriber::EnvFilter;

mod config;
/// Payment provider SOAP integration
///
/// Envelope encoding, fault handling and typed bindings for the `Payment` and `Recurring`
/// services.
mod soap;
mod state;
/// Example endpoints
///
/// Each handler builds one request from example values, calls one remote operation and
/// prints the result as plain text.
mod web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .init();

    match dotenvy::dotenv() {
        Ok(p) => tracing::info!(path = %p.display(), "Loaded environment variables from .env file"),
        Err(e) => tracing::warn!("Failed to load environment variables from .env: {e}"),
    };
    let settings = config::Settings::from_env();
    tracing::debug!(?settings, "Loaded settings");
    if settings.ws_user == config::Settings::default().ws_user {
        tracing::warn!("Using placeholder web service credentials, calls will be rejected");
    }
    let port = settings.port;
    tracing::info!(
        payment = %settings.payment_endpoint(),
        recurring = %settings.recurring_endpoint(),
        "Using provider endpoints"
    );
    let state = state::AppState::new(settings).context("build http client")?;

    let app = Router::new()
        .merge(web::router())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port))
        .await
        .with_context(|| format!("bind port {port}"))?;

    tracing::info!("Serving on port {port}");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("serve")?;
    Ok(())
}
