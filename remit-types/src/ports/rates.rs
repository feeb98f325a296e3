//! Exchange rate provider port.
//!
//! Implementations can be HTTP clients, fixed rates for tests, etc.

/// Error type for rate lookups. Callers are expected to recover by
/// substituting the configured fallback rate.
#[derive(Debug, thiserror::Error)]
pub enum RateError {
    #[error("exchange rate unavailable: {0}")]
    Unavailable(String),
}

/// Port trait for JPY→VND exchange rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// Current rate as VND received per 1 JPY sent.
    ///
    /// May block on network IO; callers apply a bounded timeout and treat
    /// a timeout as `Unavailable`.
    async fn current_rate(&self) -> Result<f64, RateError>;
}
