//! Database connection handle
//!
//! [Database] owns the SQLite pool. Resolvers read it from the GraphQL context
//! and mutations open a scoped transaction with [Database::begin].

pub mod schema_sync;

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool, Transaction};

/// Database wrapper providing connection pool access
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database wrapper from an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `url`, creating the database file when missing.
    ///
    /// An in-memory URL gets a single long-lived connection so every request
    /// sees the same database.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        if is_memory_url(url) {
            return Self::connect_in_memory().await;
        }

        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("Invalid DATABASE_URL {}", url))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open database {}", url))?;

        tracing::info!(url = %url, max_connections, "Database pool ready");
        Ok(Self { pool })
    }

    /// Private in-memory database that lives as long as the pool.
    pub async fn connect_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        // One connection that is never recycled, or the data would vanish
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("Failed to open in-memory database")?;

        tracing::info!("In-memory database ready");
        Ok(Self { pool })
    }

    /// Get the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Start a transaction. It rolls back when dropped without `commit`.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin().await
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_memory_url(url: &str) -> bool {
    url == "sqlite::memory:" || url.contains("mode=memory") || url.ends_with(":memory:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_urls() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url("sqlite://file?mode=memory&cache=shared"));
        assert!(!is_memory_url("sqlite://data/fltbase.db"));
    }

    #[tokio::test]
    async fn test_uncommitted_transaction_rolls_back() {
        let db = Database::connect_in_memory().await.unwrap();
        sqlx::query("CREATE TABLE t (id TEXT PRIMARY KEY)")
            .execute(db.pool())
            .await
            .unwrap();

        {
            let mut tx = db.begin().await.unwrap();
            sqlx::query("INSERT INTO t (id) VALUES ('a')")
                .execute(&mut *tx)
                .await
                .unwrap();
        }

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM t")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
