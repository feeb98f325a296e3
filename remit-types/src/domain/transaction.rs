//! Recorded transfer simulations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::quote::{InputMode, Quote};

/// Unique identifier for a Transaction, assigned monotonically by the store.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A committed transfer simulation.
///
/// Transactions are immutable once created - they are an append-only audit
/// trail of simulate calls. `id` and `created_at` are assigned by the store,
/// never by the caller; everything else is copied from the Quote that
/// produced the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Transaction {
    pub id: TransactionId,
    /// When the store committed the record (ISO 8601)
    #[schema(value_type = String, example = "2026-08-06T12:00:00Z")]
    pub created_at: DateTime<Utc>,
    /// JPY the sender paid
    #[schema(example = 10000)]
    pub source_amount: i64,
    /// VND the recipient received
    #[schema(example = 1715000)]
    pub dest_amount: i64,
    /// Transfer fee in JPY
    #[schema(example = 100)]
    pub fee: i64,
    /// VND per JPY at commit time
    #[schema(example = 171.5)]
    pub rate: f64,
    pub input_mode: InputMode,
}

impl Transaction {
    /// Materializes a quote into a record. Only stores call this; they own
    /// id assignment and the commit timestamp.
    pub fn from_quote(
        id: TransactionId,
        created_at: DateTime<Utc>,
        quote: &Quote,
        input_mode: InputMode,
    ) -> Self {
        Self {
            id,
            created_at,
            source_amount: quote.source_amount,
            dest_amount: quote.dest_amount,
            fee: quote.fee,
            rate: quote.rate,
            input_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quote::RateSource;

    #[test]
    fn from_quote_copies_the_priced_fields() {
        let quote = Quote::compute(InputMode::SourceInput, 10_000, 171.5, RateSource::Live).unwrap();
        let now = Utc::now();
        let tx = Transaction::from_quote(TransactionId::new(7), now, &quote, InputMode::SourceInput);

        assert_eq!(tx.id.value(), 7);
        assert_eq!(tx.created_at, now);
        assert_eq!(tx.source_amount, 10_000);
        assert_eq!(tx.dest_amount, 1_715_000);
        assert_eq!(tx.fee, 100);
        assert_eq!(tx.input_mode, InputMode::SourceInput);
    }

    #[test]
    fn id_parses_from_path_segments() {
        let id: TransactionId = "42".parse().unwrap();
        assert_eq!(id, TransactionId::new(42));
        assert!("abc".parse::<TransactionId>().is_err());
    }

    #[test]
    fn serializes_with_flat_id_and_screaming_mode() {
        let quote = Quote::compute(InputMode::DestInput, 500_000, 171.5, RateSource::Live).unwrap();
        let tx = Transaction::from_quote(
            TransactionId::new(1),
            Utc::now(),
            &quote,
            InputMode::DestInput,
        );

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["input_mode"], "DEST_INPUT");
        assert!(json["created_at"].is_string());
    }
}
