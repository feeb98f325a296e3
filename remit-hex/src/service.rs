//! Transfer Application Service
//!
//! Orchestrates quote computation and commit through the store and rate
//! provider ports. Contains NO infrastructure logic - pure business
//! orchestration, stateless per call.

use std::time::Duration;

use remit_types::{
    AppError, DomainError, InputMode, MIN_TRANSFER_JPY, Quote, RateProvider, RateSource,
    Transaction, TransactionId, TransactionStore, fee,
};

/// Bound on a single upstream rate lookup. A slower answer is treated the
/// same as an unavailable provider.
const DEFAULT_RATE_TIMEOUT: Duration = Duration::from_secs(3);

/// Application service for transfer previews and simulations.
///
/// Generic over the two ports - adapters are injected at compile time.
/// This enables:
/// - Swapping the store or rate source without code changes
/// - Testing with the in-memory store and a fixed rate
/// - Compile-time checks for port implementation
pub struct TransferService<S: TransactionStore, P: RateProvider> {
    store: S,
    rates: P,
    fallback_rate: f64,
    rate_timeout: Duration,
}

impl<S: TransactionStore, P: RateProvider> TransferService<S, P> {
    /// Creates a new service. `fallback_rate` is the JPY→VND rate used when
    /// the provider fails; it keeps quoting available in degraded mode.
    pub fn new(store: S, rates: P, fallback_rate: f64) -> Self {
        Self {
            store,
            rates,
            fallback_rate,
            rate_timeout: DEFAULT_RATE_TIMEOUT,
        }
    }

    /// Overrides the bounded timeout applied to rate lookups.
    pub fn with_rate_timeout(mut self, timeout: Duration) -> Self {
        self.rate_timeout = timeout;
        self
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current JPY→VND rate, falling back to the configured constant when
    /// the provider errors or exceeds the timeout. Never a hard failure.
    pub async fn exchange_rate(&self) -> (f64, RateSource) {
        match tokio::time::timeout(self.rate_timeout, self.rates.current_rate()).await {
            Ok(Ok(rate)) => (rate, RateSource::Live),
            Ok(Err(err)) => {
                tracing::warn!(
                    error = %err,
                    fallback = self.fallback_rate,
                    "rate provider unavailable, using fallback rate"
                );
                (self.fallback_rate, RateSource::Fallback)
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.rate_timeout.as_millis() as u64,
                    fallback = self.fallback_rate,
                    "rate lookup timed out, using fallback rate"
                );
                (self.fallback_rate, RateSource::Fallback)
            }
        }
    }

    /// Stateless quote: no store access, idempotent, safely repeatable.
    pub async fn preview(&self, mode: InputMode, amount: i64) -> Result<Quote, AppError> {
        let (rate, rate_source) = self.exchange_rate().await;
        Quote::compute(mode, amount, rate, rate_source).map_err(Into::into)
    }

    /// Quote plus commit. NOT idempotent: every call records a distinct
    /// Transaction, even for identical inputs - each call models a
    /// separate transfer event.
    pub async fn simulate(&self, mode: InputMode, amount: i64) -> Result<Transaction, AppError> {
        let quote = self.preview(mode, amount).await?;
        let tx = self.store.append(&quote, mode).await?;

        tracing::info!(
            id = %tx.id,
            source_amount = tx.source_amount,
            dest_amount = tx.dest_amount,
            fee = tx.fee,
            "created transfer simulation"
        );
        Ok(tx)
    }

    /// All committed simulations, newest first.
    pub async fn history(&self) -> Result<Vec<Transaction>, AppError> {
        self.store.list().await.map_err(Into::into)
    }

    /// A single committed simulation by id.
    pub async fn transaction(&self, id: TransactionId) -> Result<Transaction, AppError> {
        self.store
            .get(id)
            .await
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or_else(|| AppError::NotFound(format!("transaction {id}"))))
    }

    /// Fee for a JPY amount. Rejects amounts under the transfer minimum,
    /// matching the validation on the quote path.
    pub fn calculate_fee(&self, amount: i64) -> Result<i64, AppError> {
        if amount < MIN_TRANSFER_JPY {
            return Err(DomainError::BelowMinimum { amount }.into());
        }
        Ok(fee::fee_for(amount))
    }
}
