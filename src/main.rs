//! customer-api server entry point.
//!
//! Starts the Axum HTTP server with the customer REST endpoints.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use customer_api::api;
use customer_api::app_state::AppState;
use customer_api::config::{ApiConfig, LogFormat};
use customer_api::domain::sample_customers;
use customer_api::persistence::{
    CustomerStore, InMemoryCustomerStore, PostgresCustomerStore, connect_pool,
};
use customer_api::service::CustomerService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ApiConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting customer-api");

    // Build persistence layer
    let store: Arc<dyn CustomerStore> = if config.persistence_enabled {
        let pool = connect_pool(&config)
            .await
            .context("failed to connect to PostgreSQL")?;
        Arc::new(PostgresCustomerStore::new(pool))
    } else if config.seed_sample_customers {
        Arc::new(InMemoryCustomerStore::with_customers(sample_customers()))
    } else {
        Arc::new(InMemoryCustomerStore::new())
    };
    tracing::info!(store = store.backend(), "customer store ready");

    // Build service layer and router
    let app_state = AppState::new(CustomerService::new(store));
    let app = api::build_app(app_state, config.request_timeout());

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
