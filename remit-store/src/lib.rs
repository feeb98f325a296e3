//! # Remit Store
//!
//! Concrete `TransactionStore` implementations (adapters) for the
//! remittance service:
//!
//! - [`MemoryStore`] - in-process, mutex-guarded; for tests and ephemeral runs
//! - [`SqliteStore`] - sqlx-backed durable store (behind the `sqlite` feature)
//!
//! Both honor the append-only contract: ids are unique and monotonically
//! increasing, commit timestamps are assigned here, and there is no update
//! or delete path.

use async_trait::async_trait;

use remit_types::{InputMode, Quote, StoreError, Transaction, TransactionId, TransactionStore};

pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

/// Unified store wrapper so the application binary can pick an adapter from
/// its configured URL without generics leaking into wiring code.
pub enum Store {
    Memory(MemoryStore),
    #[cfg(feature = "sqlite")]
    Sqlite(SqliteStore),
}

/// Build and initialize a store from a URL.
///
/// - `memory:` → in-process store
/// - `sqlite:...` → SQLite (file created and migrated as needed)
///
/// # Examples
///
/// ```ignore
/// let store = build_store("memory:").await?;
/// let store = build_store("sqlite:remit.db?mode=rwc").await?;
/// ```
pub async fn build_store(database_url: &str) -> anyhow::Result<Store> {
    if database_url == "memory:" || database_url == "memory" {
        return Ok(Store::Memory(MemoryStore::new()));
    }

    #[cfg(feature = "sqlite")]
    if database_url.starts_with("sqlite:") {
        return Ok(Store::Sqlite(SqliteStore::new(database_url).await?));
    }

    anyhow::bail!("unsupported DATABASE_URL: {database_url}")
}

#[async_trait]
impl TransactionStore for Store {
    async fn append(&self, quote: &Quote, mode: InputMode) -> Result<Transaction, StoreError> {
        match self {
            Store::Memory(s) => s.append(quote, mode).await,
            #[cfg(feature = "sqlite")]
            Store::Sqlite(s) => s.append(quote, mode).await,
        }
    }

    async fn list(&self) -> Result<Vec<Transaction>, StoreError> {
        match self {
            Store::Memory(s) => s.list().await,
            #[cfg(feature = "sqlite")]
            Store::Sqlite(s) => s.list().await,
        }
    }

    async fn get(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError> {
        match self {
            Store::Memory(s) => s.get(id).await,
            #[cfg(feature = "sqlite")]
            Store::Sqlite(s) => s.get(id).await,
        }
    }
}
