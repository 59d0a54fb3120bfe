//! API Server for Lead Manager
//!
//! This is the main entry point for the Rust backend. It serves the REST
//! API the dashboard sections are built on: members, campaigns, the
//! permission matrix, and the leads table.

mod routes;
mod state;

use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::AppState;

const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app_state = AppState::new();

    // All state is ephemeral, so the demo bundle is loaded on every start
    // unless explicitly disabled.
    let seed = std::env::var("LM_SEED_DEMO_DATA")
        .map(|raw| raw != "0" && raw.to_lowercase() != "false")
        .unwrap_or(true);
    if seed {
        app_state
            .seed_demo_data()
            .await
            .expect("Failed to seed demo data");
        tracing::info!("Seeded demo data");
    }

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::members::router())
        .merge(routes::campaigns::router())
        .merge(routes::permissions::router())
        .merge(routes::leads::router())
        .with_state(app_state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let port = std::env::var("LM_PORT")
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("REST API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
