//! Transaction store port trait.
//!
//! This is the primary outbound port of the service. Adapters (SQLite,
//! in-memory) implement this trait.

use crate::domain::{InputMode, Quote, Transaction, TransactionId};
use crate::error::StoreError;

/// Append-only record of committed transfer simulations.
///
/// There are deliberately no update or delete operations: the store is an
/// audit trail. Implementations must assign unique, monotonically
/// increasing ids even under concurrent appends, and a committed record
/// must be retrievable by id as soon as `append` returns.
#[async_trait::async_trait]
pub trait TransactionStore: Send + Sync + 'static {
    /// Persists a quote, assigning its id and commit timestamp. Returns the
    /// stored record.
    async fn append(&self, quote: &Quote, mode: InputMode) -> Result<Transaction, StoreError>;

    /// Snapshot of all records, newest first (`created_at` descending,
    /// ties broken by `id` descending).
    async fn list(&self) -> Result<Vec<Transaction>, StoreError>;

    /// Looks up a single record. `Ok(None)` when the id was never assigned.
    async fn get(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError>;
}
