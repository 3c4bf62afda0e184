//! Quote application service.
//!
//! Orchestrates the fetch → persist pipeline through the ports, enforcing
//! one fixed time budget per downstream hop. Contains NO transport logic -
//! pure orchestration.

use std::time::Duration;

use cotacao_types::{AppError, FetchError, Quote, QuoteSource, QuoteStore, StoreError};

/// Per-hop time budgets for one request.
///
/// Each budget is derived from, and must be shorter than, the inbound
/// request's own lifetime. The defaults are the production contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budgets {
    /// Budget for the upstream quote fetch.
    pub fetch: Duration,
    /// Budget for the persistence write.
    pub store: Duration,
}

impl Default for Budgets {
    fn default() -> Self {
        Self {
            fetch: Duration::from_millis(200),
            store: Duration::from_millis(10),
        }
    }
}

/// Application service for quote requests.
///
/// Generic over the source and store ports - the adapters are injected at
/// construction, not registered globally. The store is optional: `new`
/// yields the persisting configuration, `without_store` the serve-only one.
pub struct QuoteService<S: QuoteSource, P: QuoteStore> {
    source: S,
    store: Option<P>,
    budgets: Budgets,
}

impl<S: QuoteSource, P: QuoteStore> QuoteService<S, P> {
    /// Creates a service that persists every fetched quote.
    pub fn new(source: S, store: P) -> Self {
        Self {
            source,
            store: Some(store),
            budgets: Budgets::default(),
        }
    }

    /// Creates a service that serves quotes without persisting them.
    pub fn without_store(source: S) -> Self {
        Self {
            source,
            store: None,
            budgets: Budgets::default(),
        }
    }

    /// Overrides the per-hop budgets. Tests widen these; production wiring
    /// keeps the defaults.
    pub fn with_budgets(mut self, budgets: Budgets) -> Self {
        self.budgets = budgets;
        self
    }

    /// Fetches the current quote and, when a store is configured, appends it.
    ///
    /// Strictly sequential: the fetch must finish inside its budget before
    /// the store runs inside its own. A budget elapsing drops the hop's
    /// future, which cancels the in-flight IO; the first failure ends the
    /// request. A store timeout after a successful fetch discards the
    /// fetched value - there is no compensation and no partial result.
    pub async fn cotacao(&self) -> Result<Quote, AppError> {
        let quote = tokio::time::timeout(self.budgets.fetch, self.source.fetch())
            .await
            .map_err(|_| FetchError::DeadlineExceeded(self.budgets.fetch.as_millis() as u64))??;

        if let Some(store) = &self.store {
            tokio::time::timeout(self.budgets.store, store.save(&quote))
                .await
                .map_err(|_| StoreError::DeadlineExceeded(self.budgets.store.as_millis() as u64))??;
        }

        Ok(quote)
    }
}
