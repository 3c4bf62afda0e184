//! QuoteService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use async_trait::async_trait;

    use cotacao_types::{AppError, FetchError, Quote, QuoteSource, QuoteStore, StoreError};

    use crate::{Budgets, QuoteService};

    /// Source stub with canned behavior per test.
    pub enum MockSource {
        Ok(&'static str),
        Fail,
        Slow(&'static str, Duration),
    }

    #[async_trait]
    impl QuoteSource for MockSource {
        async fn fetch(&self) -> Result<Quote, FetchError> {
            match self {
                MockSource::Ok(bid) => Ok(Quote::new(*bid)),
                MockSource::Fail => Err(FetchError::UnexpectedStatus(502)),
                MockSource::Slow(bid, delay) => {
                    tokio::time::sleep(*delay).await;
                    Ok(Quote::new(*bid))
                }
            }
        }
    }

    /// Store stub recording every save it accepts. The service takes the
    /// store by value, so the recorded saves are read back through a
    /// shared handle.
    pub struct MockStore {
        saved: Arc<Mutex<Vec<Quote>>>,
        fail: bool,
        delay: Option<Duration>,
    }

    impl MockStore {
        pub fn ok() -> Self {
            Self {
                saved: Arc::new(Mutex::new(Vec::new())),
                fail: false,
                delay: None,
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::ok()
            }
        }

        pub fn slow(delay: Duration) -> Self {
            Self {
                delay: Some(delay),
                ..Self::ok()
            }
        }

        pub fn saved_handle(&self) -> Arc<Mutex<Vec<Quote>>> {
            self.saved.clone()
        }
    }

    #[async_trait]
    impl QuoteStore for MockStore {
        async fn save(&self, quote: &Quote) -> Result<(), StoreError> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail {
                return Err(StoreError::Database("insert failed".into()));
            }
            self.saved.lock().unwrap().push(quote.clone());
            Ok(())
        }
    }

    /// Budgets wide enough that only the mocks' own behavior decides the
    /// outcome.
    fn wide_budgets() -> Budgets {
        Budgets {
            fetch: Duration::from_secs(1),
            store: Duration::from_secs(1),
        }
    }

    #[tokio::test]
    async fn test_fetch_success_returns_quote() {
        let service = QuoteService::<_, MockStore>::without_store(MockSource::Ok("5.43"));

        let quote = service.cotacao().await.unwrap();

        assert_eq!(quote, Quote::new("5.43"));
    }

    #[tokio::test]
    async fn test_fetch_failure_terminates_the_request() {
        let store = MockStore::ok();
        let saved = store.saved_handle();
        let service = QuoteService::new(MockSource::Fail, store);

        let result = service.cotacao().await;

        assert!(matches!(
            result,
            Err(AppError::Fetch(FetchError::UnexpectedStatus(502)))
        ));
        // The store never runs when the fetch fails.
        assert!(saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_slow_fetch_exceeds_its_budget() {
        let service = QuoteService::<_, MockStore>::without_store(MockSource::Slow(
            "5.43",
            Duration::from_millis(500),
        ))
        .with_budgets(Budgets {
            fetch: Duration::from_millis(50),
            store: Duration::from_millis(10),
        });

        let started = Instant::now();
        let result = service.cotacao().await;
        let elapsed = started.elapsed();

        assert!(matches!(
            result,
            Err(AppError::Fetch(FetchError::DeadlineExceeded(50)))
        ));
        assert!(
            elapsed < Duration::from_millis(300),
            "request blocked for {elapsed:?} past its 50ms fetch budget"
        );
    }

    #[tokio::test]
    async fn test_store_failure_terminates_the_request() {
        let service =
            QuoteService::new(MockSource::Ok("5.43"), MockStore::failing())
                .with_budgets(wide_budgets());

        let result = service.cotacao().await;

        assert!(matches!(
            result,
            Err(AppError::Store(StoreError::Database(_)))
        ));
    }

    #[tokio::test]
    async fn test_slow_store_exceeds_its_budget_and_discards_the_quote() {
        let store = MockStore::slow(Duration::from_millis(500));
        let saved = store.saved_handle();
        let service = QuoteService::new(MockSource::Ok("5.43"), store).with_budgets(Budgets {
            fetch: Duration::from_secs(1),
            store: Duration::from_millis(10),
        });

        let result = service.cotacao().await;

        // The fetch succeeded, but the expired store budget discards the
        // quote; nothing was persisted and nothing is compensated.
        assert!(matches!(
            result,
            Err(AppError::Store(StoreError::DeadlineExceeded(10)))
        ));
        assert!(saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_saved_quote_matches_the_fetched_one() {
        let store = MockStore::ok();
        let saved = store.saved_handle();
        let service =
            QuoteService::new(MockSource::Ok("5.43"), store).with_budgets(wide_budgets());

        let quote = service.cotacao().await.unwrap();

        assert_eq!(quote.bid, "5.43");
        assert_eq!(*saved.lock().unwrap(), vec![Quote::new("5.43")]);
    }

    #[tokio::test]
    async fn test_without_store_serves_within_the_fetch_budget_alone() {
        let service = QuoteService::<_, MockStore>::without_store(MockSource::Ok("5.43"));

        let quote = service.cotacao().await.unwrap();

        assert_eq!(quote.bid, "5.43");
    }

    #[tokio::test]
    async fn test_default_budgets_match_the_contract() {
        let budgets = Budgets::default();

        assert_eq!(budgets.fetch, Duration::from_millis(200));
        assert_eq!(budgets.store, Duration::from_millis(10));
    }
}
