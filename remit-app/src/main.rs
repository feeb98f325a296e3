//! # Remit Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the store adapter
//! - Construct the rate provider and transfer service
//! - Start the HTTP server

mod config;

use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use remit_hex::{TransferService, inbound::HttpServer};
use remit_rates::ExchangeRateApi;
use remit_store::build_store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,remit_app=debug,remit_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting remittance server on port {}", config.port);
    tracing::info!("Using store: {}", config.database_url);
    if config.exchange_api_key.is_empty() {
        tracing::warn!(
            fallback = config.fallback_rate,
            "EXCHANGE_API_KEY is not set; every quote will use the fallback rate"
        );
    }

    // Build the store (handles connection and migration)
    let store = build_store(&config.database_url).await?;

    // Rate provider with a bounded upstream timeout
    let rate_timeout = Duration::from_millis(config.rate_timeout_ms);
    let rates = ExchangeRateApi::new(
        config.exchange_api_base_url.as_str(),
        config.exchange_api_key.as_str(),
        rate_timeout,
    )?;

    // Create the transfer service
    let service =
        TransferService::new(store, rates, config.fallback_rate).with_rate_timeout(rate_timeout);

    // Create and run the HTTP server
    let server = HttpServer::with_rate_limit(service, config.rate_limit_per_minute);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
