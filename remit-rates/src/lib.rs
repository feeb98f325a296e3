//! # Remit Rates
//!
//! Exchange rate providers for the JPY→VND corridor. Implements the
//! `RateProvider` port from `remit-types` with:
//!
//! - [`ExchangeRateApi`] - HTTP client for <https://www.exchangerate-api.com>
//! - [`FixedRate`] - constant rate for tests, demos, and offline runs
//!
//! A provider failure is recoverable by design: the service layer
//! substitutes the configured fallback rate (see [`DEFAULT_FALLBACK_RATE`])
//! and keeps serving quotes in a degraded-but-available mode.

use std::time::Duration;

use serde::Deserialize;

use remit_types::{RateError, RateProvider};

/// Approximate JPY→VND rate used when the upstream API is unreachable.
/// Deployments override this via configuration; the constant is only the
/// default for that setting, not a buried literal in the quote path.
pub const DEFAULT_FALLBACK_RATE: f64 = 171.5;

/// Default base URL of the upstream rate API.
pub const DEFAULT_API_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";

// ─────────────────────────────────────────────────────────────────────────────
// exchangerate-api.com client
// ─────────────────────────────────────────────────────────────────────────────

/// Wire shape of the v6 `pair` endpoint. Error responses carry
/// `result: "error"` and an `error-type` string instead of a rate.
#[derive(Debug, Deserialize)]
struct PairResponse {
    result: String,
    #[serde(default)]
    conversion_rate: Option<f64>,
    #[serde(rename = "error-type", default)]
    error_type: Option<String>,
}

impl PairResponse {
    fn rate(self) -> Result<f64, RateError> {
        if self.result != "success" {
            let kind = self.error_type.unwrap_or_else(|| "unknown error".into());
            return Err(RateError::Unavailable(format!(
                "upstream returned error: {kind}"
            )));
        }
        match self.conversion_rate {
            Some(rate) if rate > 0.0 => Ok(rate),
            Some(rate) => Err(RateError::Unavailable(format!(
                "upstream returned non-positive rate {rate}"
            ))),
            None => Err(RateError::Unavailable(
                "upstream response is missing conversion_rate".into(),
            )),
        }
    }
}

/// HTTP rate provider backed by exchangerate-api.com.
///
/// Requests carry a bounded timeout; a timeout or transport failure is
/// reported as `Unavailable`, the same as a malformed payload.
pub struct ExchangeRateApi {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ExchangeRateApi {
    /// Creates a client with the given upstream and request timeout.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait::async_trait]
impl RateProvider for ExchangeRateApi {
    async fn current_rate(&self) -> Result<f64, RateError> {
        let url = format!("{}/{}/pair/JPY/VND", self.base_url, self.api_key);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| RateError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RateError::Unavailable(format!(
                "upstream returned HTTP {}",
                response.status()
            )));
        }

        let payload: PairResponse = response
            .json()
            .await
            .map_err(|e| RateError::Unavailable(format!("malformed payload: {e}")))?;

        let rate = payload.rate()?;
        tracing::info!(rate, "fetched exchange rate: 1 JPY = {rate} VND");
        Ok(rate)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fixed provider
// ─────────────────────────────────────────────────────────────────────────────

/// Provider that always returns the same rate. Used in tests and when the
/// deployment has no upstream API key.
#[derive(Debug, Clone, Copy)]
pub struct FixedRate(pub f64);

#[async_trait::async_trait]
impl RateProvider for FixedRate {
    async fn current_rate(&self) -> Result<f64, RateError> {
        Ok(self.0)
    }
}
