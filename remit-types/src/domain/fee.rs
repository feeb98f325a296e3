//! Tiered transfer fee schedule.
//!
//! Fees are charged in JPY and derived from the JPY side of the transfer,
//! regardless of which side the caller declared.

use serde::{Deserialize, Serialize};

/// Minimum transfer amount in JPY. Amounts below this are rejected at the
/// service boundary before any fee applies.
pub const MIN_TRANSFER_JPY: i64 = 100;

/// One contiguous band of the fee schedule. `max_amount: None` means
/// unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FeeTier {
    pub min_amount: i64,
    pub max_amount: Option<i64>,
    pub fee: i64,
}

/// The published fee schedule, lowest band first:
///
/// | JPY amount          | fee    |
/// |---------------------|--------|
/// | ¥100 – ¥10,000      | ¥100   |
/// | ¥10,001 – ¥50,000   | ¥400   |
/// | ¥50,001 – ¥100,000  | ¥700   |
/// | above ¥100,000      | ¥1,000 |
pub const TIERS: [FeeTier; 4] = [
    FeeTier {
        min_amount: 100,
        max_amount: Some(10_000),
        fee: 100,
    },
    FeeTier {
        min_amount: 10_001,
        max_amount: Some(50_000),
        fee: 400,
    },
    FeeTier {
        min_amount: 50_001,
        max_amount: Some(100_000),
        fee: 700,
    },
    FeeTier {
        min_amount: 100_001,
        max_amount: None,
        fee: 1000,
    },
];

/// Fee in JPY for a given JPY send amount.
///
/// Total over all integers: amounts under the ¥100 minimum cost nothing,
/// on the assumption the caller has already rejected them.
pub fn fee_for(source_amount: i64) -> i64 {
    if source_amount < MIN_TRANSFER_JPY {
        0
    } else if source_amount <= 10_000 {
        100
    } else if source_amount <= 50_000 {
        400
    } else if source_amount <= 100_000 {
        700
    } else {
        1000
    }
}
