//! Error types for the quote service.
//!
//! Adapters map their library errors into these variants at the edge, so
//! the core stays free of IO dependencies. Every failure is terminal for
//! its enclosing request or run; nothing here is ever retried.

/// Upstream fetch errors (one per failure stage, none recovered from).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build upstream request: {0}")]
    BuildRequest(String),

    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("unexpected upstream status: {0}")]
    UnexpectedStatus(u16),

    #[error("failed to decode upstream payload: {0}")]
    Decode(String),

    #[error("upstream payload has no {0} entry")]
    MissingPair(&'static str),

    #[error("quote fetch exceeded its {0}ms budget")]
    DeadlineExceeded(u64),
}

/// Persistence errors (table creation, insert, read-back).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),

    #[error("quote persistence exceeded its {0}ms budget")]
    DeadlineExceeded(u64),
}

/// Service-boundary error.
///
/// Whatever the stage, the HTTP adapter converts this into a generic 500;
/// the full detail only ever reaches the log.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
