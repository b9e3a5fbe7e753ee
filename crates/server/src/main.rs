//! CourseHub Server - Course catalog and checkout site.
//!
//! This binary serves the whole application on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Askama templates for server-side rendering
//! - Single-file JSON store for users, courses, and purchases
//! - External payment gateway for orders and callback signatures
//! - In-memory sessions (tower-sessions)
//!
//! # Security
//!
//! - The session cookie only names the user; the admin capability is
//!   re-read from the store on every admin request
//! - Payment callbacks are accepted only with a valid HMAC signature
//!   computed with the gateway key secret

#![cfg_attr(not(test), forbid(unsafe_code))]
// The binary re-declares the library modules; error variants and helpers
// only reachable from the library surface would otherwise warn here
#![allow(dead_code)]

use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

mod config;
mod error;
mod filters;
mod gateway;
mod middleware;
mod models;
mod routes;
mod services;
mod state;
mod store;

use config::ServerConfig;
use state::AppState;
use store::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "coursehub_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Open the store (creates an empty dataset on first run)
    let store = Store::open(config.store_path.clone())
        .await
        .expect("Failed to open store");
    tracing::info!(path = %config.store_path.display(), "Store opened");

    if config.gateway.is_none() {
        tracing::warn!("Payment gateway credentials not set; checkout is disabled");
    }

    // Create session layer
    let session_layer = middleware::create_session_layer(&config);

    // Build application state
    let state = AppState::new(config.clone(), store);

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new("crates/server/static"))
        .fallback(routes::not_found)
        .layer(session_layer)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
