//! Upstream quote source port.

use crate::domain::Quote;
use crate::error::FetchError;

/// Port trait for the upstream quote provider.
///
/// One call is one bounded outbound request. The caller owns the deadline:
/// it wraps `fetch` in a timeout and drops the future once the budget
/// elapses, which cancels the in-flight request. Implementations carry
/// their own transport-level timeout as well, so the effective budget is
/// the minimum of the two.
#[async_trait::async_trait]
pub trait QuoteSource: Send + Sync + 'static {
    /// Fetches the current quote. Never retried.
    async fn fetch(&self) -> Result<Quote, FetchError>;
}
