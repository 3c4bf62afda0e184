//! Quote persistence port.

use crate::domain::Quote;
use crate::error::StoreError;

/// Port trait for the append-only quote store.
#[async_trait::async_trait]
pub trait QuoteStore: Send + Sync + 'static {
    /// Appends one quote.
    ///
    /// Table creation must be idempotent; the surrogate id and creation
    /// timestamp are assigned by the storage engine. A failed save is
    /// never retried and completed fetches are never compensated.
    async fn save(&self, quote: &Quote) -> Result<(), StoreError>;
}
