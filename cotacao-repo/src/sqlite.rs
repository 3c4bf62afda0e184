//! SQLite store adapter.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection, SqliteConnection};

use cotacao_types::{Quote, QuoteStore, StoreError};

use crate::types::StoredQuote;

/// SQLite-backed quote store.
///
/// Every call opens its own connection, runs the idempotent DDL, does its
/// work and closes the connection again. Reopening the file per request is
/// the documented baseline behavior of this system; a shared pool would
/// also satisfy the contract without changing what callers observe.
pub struct SqliteStore {
    database_url: String,
}

impl SqliteStore {
    /// Creates a store for the given SQLite URL. The database file is
    /// created on first use.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    /// Opens a fresh connection and ensures the `cotacoes` table exists.
    async fn connect(&self) -> Result<SqliteConnection, StoreError> {
        let options = SqliteConnectOptions::from_str(&self.database_url)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .create_if_missing(true);

        let mut conn = options
            .connect()
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let ddl = include_str!("../migrations/0001_create_cotacoes.sql");
        sqlx::query(ddl)
            .execute(&mut conn)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(conn)
    }

    /// Returns the newest `limit` persisted quotes, most recent first.
    pub async fn recent(&self, limit: i64) -> Result<Vec<StoredQuote>, StoreError> {
        let mut conn = self.connect().await?;

        let rows: Vec<StoredQuote> = sqlx::query_as(
            r#"SELECT id, bid, created_at FROM cotacoes ORDER BY id DESC LIMIT ?"#,
        )
        .bind(limit)
        .fetch_all(&mut conn)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        conn.close()
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(rows)
    }
}

#[async_trait]
impl QuoteStore for SqliteStore {
    async fn save(&self, quote: &Quote) -> Result<(), StoreError> {
        let mut conn = self.connect().await?;

        sqlx::query(r#"INSERT INTO cotacoes (bid) VALUES (?)"#)
            .bind(&quote.bid)
            .execute(&mut conn)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        conn.close()
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        tracing::debug!(bid = %quote.bid, "quote persisted");
        Ok(())
    }
}
