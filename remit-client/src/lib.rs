//! # Remit Client SDK
//!
//! A typed Rust client for the Remittance API.

use reqwest::Client;
use serde::de::DeserializeOwned;

use remit_types::{
    ExchangeRateResponse, FeeCalculationResponse, FeeStructureResponse, InputMode, Quote,
    Transaction, TransactionId, TransferRequest,
};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Remittance API client.
pub struct RemitClient {
    base_url: String,
    http: Client,
}

impl RemitClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Previews a transfer without recording it.
    pub async fn preview(&self, mode: InputMode, amount: i64) -> Result<Quote, ClientError> {
        self.post("/preview", &request_for(mode, amount)).await
    }

    /// Records a transfer simulation and returns the stored Transaction.
    pub async fn simulate(&self, mode: InputMode, amount: i64) -> Result<Transaction, ClientError> {
        self.post("/simulate", &request_for(mode, amount)).await
    }

    /// Lists all recorded simulations, newest first.
    pub async fn history(&self) -> Result<Vec<Transaction>, ClientError> {
        self.get("/history").await
    }

    /// Gets a recorded simulation by id.
    pub async fn transaction(&self, id: TransactionId) -> Result<Transaction, ClientError> {
        self.get(&format!("/history/{}", id)).await
    }

    /// Current (or fallback) JPY→VND exchange rate.
    pub async fn exchange_rate(&self) -> Result<ExchangeRateResponse, ClientError> {
        self.get("/exchange-rate").await
    }

    /// The published fee schedule.
    pub async fn fee_structure(&self) -> Result<FeeStructureResponse, ClientError> {
        self.get("/fee-structure").await
    }

    /// Fee for a specific JPY amount.
    pub async fn calculate_fee(&self, amount: i64) -> Result<FeeCalculationResponse, ClientError> {
        self.get(&format!("/calculate-fee?amount={}", amount)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

fn request_for(mode: InputMode, amount: i64) -> TransferRequest {
    match mode {
        InputMode::SourceInput => TransferRequest {
            input_mode: mode,
            source_amount: Some(amount),
            dest_amount: None,
        },
        InputMode::DestInput => TransferRequest {
            input_mode: mode,
            source_amount: None,
            dest_amount: Some(amount),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = RemitClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = RemitClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn request_carries_only_the_driving_amount() {
        let req = request_for(InputMode::SourceInput, 10_000);
        assert_eq!(req.source_amount, Some(10_000));
        assert_eq!(req.dest_amount, None);

        let req = request_for(InputMode::DestInput, 1_715_000);
        assert_eq!(req.source_amount, None);
        assert_eq!(req.dest_amount, Some(1_715_000));
    }
}
