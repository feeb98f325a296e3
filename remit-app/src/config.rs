//! Configuration loading from environment.

use std::env;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub exchange_api_base_url: String,
    pub exchange_api_key: String,
    pub fallback_rate: f64,
    pub rate_timeout_ms: u64,
    pub rate_limit_per_minute: u32,
}

impl Config {
    /// Loads configuration from environment variables. Everything has a
    /// default; a service with no API key simply quotes at the fallback
    /// rate.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "memory:".to_string());

        let exchange_api_base_url = env::var("EXCHANGE_API_BASE_URL")
            .unwrap_or_else(|_| remit_rates::DEFAULT_API_BASE_URL.to_string());

        let exchange_api_key = env::var("EXCHANGE_API_KEY").unwrap_or_default();

        let fallback_rate: f64 = env::var("FALLBACK_RATE")
            .unwrap_or_else(|_| remit_rates::DEFAULT_FALLBACK_RATE.to_string())
            .parse()?;
        if fallback_rate <= 0.0 {
            anyhow::bail!("FALLBACK_RATE must be positive, got {fallback_rate}");
        }

        let rate_timeout_ms = env::var("RATE_TIMEOUT_MS")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let rate_limit_per_minute = env::var("RATE_LIMIT_PER_MINUTE")
            .unwrap_or_else(|_| "100".to_string())
            .parse()?;

        Ok(Self {
            port,
            database_url,
            exchange_api_base_url,
            exchange_api_key,
            fallback_rate,
            rate_timeout_ms,
            rate_limit_per_minute,
        })
    }
}
