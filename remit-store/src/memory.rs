//! In-process transaction store.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use remit_types::{InputMode, Quote, StoreError, Transaction, TransactionId, TransactionStore};

/// Mutex-guarded in-memory store.
///
/// Appends take the lock for id assignment and insertion, which keeps ids
/// unique and monotonic under concurrent use; reads take the same lock
/// briefly and return cloned snapshots.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    next_id: i64,
    records: Vec<Transaction>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                records: Vec::new(),
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn append(&self, quote: &Quote, mode: InputMode) -> Result<Transaction, StoreError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let id = TransactionId::new(inner.next_id);
        inner.next_id += 1;

        let tx = Transaction::from_quote(id, Utc::now(), quote, mode);
        inner.records.push(tx.clone());
        Ok(tx)
    }

    async fn list(&self) -> Result<Vec<Transaction>, StoreError> {
        let inner = self
            .inner
            .lock()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let mut records = inner.records.clone();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(records)
    }

    async fn get(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError> {
        let inner = self
            .inner
            .lock()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(inner.records.iter().find(|t| t.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use remit_types::RateSource;

    fn sample_quote() -> Quote {
        Quote::compute(InputMode::SourceInput, 10_000, 171.5, RateSource::Live).unwrap()
    }

    #[tokio::test]
    async fn append_assigns_increasing_ids() {
        let store = MemoryStore::new();
        let quote = sample_quote();

        let a = store.append(&quote, InputMode::SourceInput).await.unwrap();
        let b = store.append(&quote, InputMode::SourceInput).await.unwrap();

        assert_eq!(a.id, TransactionId::new(1));
        assert_eq!(b.id, TransactionId::new(2));
        assert!(a.created_at <= b.created_at);
    }

    #[tokio::test]
    async fn get_returns_the_appended_record() {
        let store = MemoryStore::new();
        let appended = store
            .append(&sample_quote(), InputMode::SourceInput)
            .await
            .unwrap();

        let fetched = store.get(appended.id).await.unwrap().unwrap();
        assert_eq!(fetched, appended);
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() {
        let store = MemoryStore::new();
        assert!(store.get(TransactionId::new(404)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_is_newest_first_with_id_tiebreak() {
        let store = MemoryStore::new();
        let quote = sample_quote();

        for _ in 0..3 {
            store.append(&quote, InputMode::SourceInput).await.unwrap();
        }

        let listed = store.list().await.unwrap();
        let ids: Vec<i64> = listed.iter().map(|t| t.id.value()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn concurrent_appends_never_reuse_an_id() {
        let store = Arc::new(MemoryStore::new());
        let quote = sample_quote();

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.append(&quote, InputMode::SourceInput).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id.value());
        }

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 32);
    }
}
