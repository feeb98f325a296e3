//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Currency, InputMode, RateSource, fee::FeeTier};
use crate::error::DomainError;

// ─────────────────────────────────────────────────────────────────────────────
// Transfer DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request body shared by `/preview` and `/simulate`.
///
/// Exactly one of the two amounts drives the calculation, selected by
/// `input_mode`; the other side is derived and may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransferRequest {
    pub input_mode: InputMode,
    /// JPY send amount; required when `input_mode` is `SOURCE_INPUT`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 10000)]
    pub source_amount: Option<i64>,
    /// VND receive amount; required when `input_mode` is `DEST_INPUT`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 1715000)]
    pub dest_amount: Option<i64>,
}

impl TransferRequest {
    /// The caller-declared driving amount for the declared mode.
    pub fn driving_amount(&self) -> Result<i64, DomainError> {
        match self.input_mode {
            InputMode::SourceInput => self.source_amount.ok_or_else(|| {
                DomainError::Validation(
                    "source_amount is required when input_mode is SOURCE_INPUT".into(),
                )
            }),
            InputMode::DestInput => self.dest_amount.ok_or_else(|| {
                DomainError::Validation(
                    "dest_amount is required when input_mode is DEST_INPUT".into(),
                )
            }),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rate & fee DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Response for `GET /exchange-rate`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExchangeRateResponse {
    pub base: Currency,
    pub target: Currency,
    /// VND per JPY
    #[schema(example = 171.5)]
    pub rate: f64,
    /// Whether this is the live upstream rate or the configured fallback
    pub source: RateSource,
    #[schema(example = "1 JPY = 171.5 VND")]
    pub description: String,
}

impl ExchangeRateResponse {
    pub fn new(rate: f64, source: RateSource) -> Self {
        Self {
            base: Currency::JPY,
            target: Currency::VND,
            rate,
            source,
            description: format!("1 JPY = {rate} VND"),
        }
    }
}

/// Response for `GET /fee-structure`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeeStructureResponse {
    pub currency: Currency,
    /// Charged bands, lowest first; a missing `max_amount` means unbounded
    pub tiers: Vec<FeeTier>,
}

/// Response for `GET /calculate-fee`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeeCalculationResponse {
    #[schema(example = 10000)]
    pub amount: i64,
    #[schema(example = 100)]
    pub fee: i64,
    pub currency: Currency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driving_amount_follows_the_declared_mode() {
        let req = TransferRequest {
            input_mode: InputMode::SourceInput,
            source_amount: Some(10_000),
            dest_amount: None,
        };
        assert_eq!(req.driving_amount().unwrap(), 10_000);

        let req = TransferRequest {
            input_mode: InputMode::DestInput,
            source_amount: Some(10_000),
            dest_amount: Some(500_000),
        };
        assert_eq!(req.driving_amount().unwrap(), 500_000);
    }

    #[test]
    fn missing_driving_amount_is_a_validation_error() {
        let req = TransferRequest {
            input_mode: InputMode::DestInput,
            source_amount: Some(10_000),
            dest_amount: None,
        };
        assert!(matches!(
            req.driving_amount(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn request_parses_from_wire_json() {
        let req: TransferRequest =
            serde_json::from_str(r#"{"input_mode":"SOURCE_INPUT","source_amount":5000}"#).unwrap();
        assert_eq!(req.input_mode, InputMode::SourceInput);
        assert_eq!(req.source_amount, Some(5000));
        assert_eq!(req.dest_amount, None);
    }

    #[test]
    fn exchange_rate_response_describes_the_pair() {
        let resp = ExchangeRateResponse::new(171.5, RateSource::Fallback);
        assert_eq!(resp.base, Currency::JPY);
        assert_eq!(resp.target, Currency::VND);
        assert_eq!(resp.description, "1 JPY = 171.5 VND");

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["source"], "fallback");
    }
}
