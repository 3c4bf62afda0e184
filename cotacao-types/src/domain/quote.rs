//! Quote domain model.

use serde::{Deserialize, Serialize};

/// A single USD-BRL exchange-rate quote.
///
/// `bid` is the purchase-side rate exactly as the upstream provider reports
/// it and stays an opaque decimal-formatted string for its whole lifetime.
/// A quote is constructed fresh per request, serialized to the response,
/// the store or the output file, then discarded; it has no identity and is
/// never mutated. The surrogate id and timestamp a persisted quote carries
/// are assigned by the storage engine, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Purchase-side exchange rate, decimal-formatted.
    pub bid: String,
}

impl Quote {
    /// Creates a quote from the raw upstream `bid` value.
    pub fn new(bid: impl Into<String>) -> Self {
        Self { bid: bid.into() }
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bid)
    }
}
