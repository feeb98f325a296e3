//! SQLite store adapter.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use remit_types::{InputMode, Quote, StoreError, Transaction, TransactionId, TransactionStore};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite store
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite-backed transaction store.
///
/// Id assignment rides on `INTEGER PRIMARY KEY AUTOINCREMENT`, which is
/// monotonic and never reuses rowids. `append` returns only after the
/// INSERT has committed, so the record is immediately retrievable.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a new SQLite store with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url
            .strip_prefix("sqlite://")
            .or_else(|| database_url.strip_prefix("sqlite:"))
        {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // An in-memory database lives and dies with its connection; a
        // single-connection pool keeps every query on that one database.
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect_with(options)
                .await?
        } else {
            SqlitePool::connect_with(options).await?
        };

        let ddl = include_str!("../migrations/0001_create_transfers.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Row mapping
// ─────────────────────────────────────────────────────────────────────────────

#[derive(sqlx::FromRow)]
struct DbTransfer {
    id: i64,
    created_at: String,
    source_amount: i64,
    dest_amount: i64,
    fee: i64,
    rate: f64,
    input_mode: String,
}

impl TryFrom<DbTransfer> for Transaction {
    type Error = StoreError;

    fn try_from(row: DbTransfer) -> Result<Self, Self::Error> {
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| StoreError::Database(format!("bad created_at in row {}: {e}", row.id)))?
            .with_timezone(&Utc);

        let input_mode: InputMode = row
            .input_mode
            .parse()
            .map_err(|e: String| StoreError::Database(format!("bad input_mode: {e}")))?;

        Ok(Transaction {
            id: TransactionId::new(row.id),
            created_at,
            source_amount: row.source_amount,
            dest_amount: row.dest_amount,
            fee: row.fee,
            rate: row.rate,
            input_mode,
        })
    }
}

/// Fixed-width UTC timestamp so lexicographic TEXT ordering matches
/// chronological ordering.
fn format_created_at(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

// ─────────────────────────────────────────────────────────────────────────────
// Store implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl TransactionStore for SqliteStore {
    async fn append(&self, quote: &Quote, mode: InputMode) -> Result<Transaction, StoreError> {
        // Truncated to what the TEXT column holds, so the returned record
        // compares equal to what a later `get` reads back.
        let created_at = Utc::now().trunc_subsecs(6);
        let created_at_str = format_created_at(created_at);
        let mode_str = mode.to_string();

        let result = sqlx::query(
            r#"INSERT INTO transfers (created_at, source_amount, dest_amount, fee, rate, input_mode)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&created_at_str)
        .bind(quote.source_amount)
        .bind(quote.dest_amount)
        .bind(quote.fee)
        .bind(quote.rate)
        .bind(&mode_str)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        let id = TransactionId::new(result.last_insert_rowid());
        tracing::info!(
            id = %id,
            source_amount = quote.source_amount,
            dest_amount = quote.dest_amount,
            fee = quote.fee,
            "committed transfer simulation"
        );

        Ok(Transaction::from_quote(id, created_at, quote, mode))
    }

    async fn list(&self) -> Result<Vec<Transaction>, StoreError> {
        let rows: Vec<DbTransfer> = sqlx::query_as(
            r#"SELECT id, created_at, source_amount, dest_amount, fee, rate, input_mode
               FROM transfers
               ORDER BY created_at DESC, id DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        rows.into_iter().map(Transaction::try_from).collect()
    }

    async fn get(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError> {
        let row: Option<DbTransfer> = sqlx::query_as(
            r#"SELECT id, created_at, source_amount, dest_amount, fee, rate, input_mode
               FROM transfers WHERE id = ?"#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        row.map(Transaction::try_from).transpose()
    }
}
