//! Row types for the SQLite adapter.

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// One persisted quote row as SQLite hands it back.
#[derive(Debug, Clone, FromRow)]
pub struct StoredQuote {
    /// Surrogate autoincrement id assigned by SQLite.
    pub id: i64,
    /// The quote's bid value, stored verbatim.
    pub bid: String,
    /// Insertion timestamp assigned by SQLite.
    pub created_at: NaiveDateTime,
}
