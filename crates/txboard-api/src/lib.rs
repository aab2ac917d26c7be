//! HTTP JSON API for the transaction dashboard
//!
//! Routes are organized into modules:
//! - routes::transactions: Transaction listing and search
//! - routes::reports: Monthly statistics, price-range and category charts
//!
//! Every endpoint triggers an independent fetch of the upstream dataset;
//! there is no shared mutable state across requests.

pub mod error;
pub mod routes;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use txboard_config::Config;
use txboard_source::SourceRef;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub source: SourceRef,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::reports::{api_combined_data, api_pie_chart, api_price_range, api_statistics};
    use routes::transactions::{api_transactions, api_transactions_search};

    Router::new()
        .route("/health", get(health_check))
        .route("/transactions", get(api_transactions))
        .route("/transactions/search", get(api_transactions_search))
        .route("/statistics/:month", get(api_statistics))
        .route("/price-range/:month", get(api_price_range))
        .route("/pie-chart/:month", get(api_pie_chart))
        .route("/combined-data/:month", get(api_combined_data))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Start the HTTP server
///
/// Binds to the configured address and serves the JSON API until the
/// process is stopped.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `source` - The upstream dataset client
pub async fn start_server(config: Config, source: SourceRef) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { source, config };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting txboard server on http://{}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}
