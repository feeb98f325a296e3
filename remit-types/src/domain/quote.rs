//! Transfer quote computation.

use serde::{Deserialize, Serialize};

use super::{convert, fee, fee::MIN_TRANSFER_JPY};
use crate::error::DomainError;

/// Which side of the transfer the caller specified. The other side is
/// derived from the exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputMode {
    /// Caller declares the JPY send amount; VND is derived.
    SourceInput,
    /// Caller declares the VND receive amount; JPY is derived.
    DestInput,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputMode::SourceInput => write!(f, "SOURCE_INPUT"),
            InputMode::DestInput => write!(f, "DEST_INPUT"),
        }
    }
}

impl std::str::FromStr for InputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SOURCE_INPUT" => Ok(InputMode::SourceInput),
            "DEST_INPUT" => Ok(InputMode::DestInput),
            other => Err(format!("unknown input mode: {other}")),
        }
    }
}

/// Where the exchange rate of a quote came from. The fallback is a
/// degraded-but-available mode and must stay visible to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    /// Fetched from the upstream rate API.
    Live,
    /// The configured fallback rate; upstream was unavailable.
    Fallback,
}

/// A priced transfer, not yet persisted.
///
/// Amounts are whole currency units. `fee` and `net_source_amount` are in
/// JPY; the fee is always derived from the resolved JPY amount, never from
/// the VND side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Quote {
    /// JPY the sender pays
    #[schema(example = 10000)]
    pub source_amount: i64,
    /// VND the recipient receives
    #[schema(example = 1715000)]
    pub dest_amount: i64,
    /// Transfer fee in JPY
    #[schema(example = 100)]
    pub fee: i64,
    /// VND per JPY used for this quote
    #[schema(example = 171.5)]
    pub rate: f64,
    /// `source_amount - fee`
    #[schema(example = 9900)]
    pub net_source_amount: i64,
    pub rate_source: RateSource,
}

impl Quote {
    /// Prices a transfer from the caller-declared side.
    ///
    /// `SourceInput` amounts below the ¥100 minimum are rejected;
    /// `DestInput` amounts must merely be positive. The asymmetry is
    /// intentional: a VND-driven request may legally resolve to a JPY
    /// amount under the minimum.
    pub fn compute(
        mode: InputMode,
        amount: i64,
        rate: f64,
        rate_source: RateSource,
    ) -> Result<Self, DomainError> {
        if rate <= 0.0 || !rate.is_finite() {
            return Err(DomainError::InvalidRate { rate });
        }

        let (source_amount, dest_amount) = match mode {
            InputMode::SourceInput => {
                if amount < MIN_TRANSFER_JPY {
                    return Err(DomainError::BelowMinimum { amount });
                }
                (amount, convert::to_dest(amount, rate))
            }
            InputMode::DestInput => {
                if amount <= 0 {
                    return Err(DomainError::InvalidAmount { amount });
                }
                (convert::to_source(amount, rate), amount)
            }
        };

        let fee = fee::fee_for(source_amount);

        Ok(Self {
            source_amount,
            dest_amount,
            fee,
            rate,
            net_source_amount: source_amount - fee,
            rate_source,
        })
    }
}
