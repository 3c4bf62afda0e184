//! # Cotação Upstream
//!
//! Outbound adapter for the awesomeapi currency endpoint. Implements the
//! `QuoteSource` port: one bounded GET, extract the `bid` field of the
//! `USDBRL` entry, ignore everything else in the payload.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use cotacao_types::{FetchError, Quote, QuoteSource};

/// Endpoint serving the latest USD-BRL quote.
pub const DEFAULT_ENDPOINT: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Key the provider uses for the USD-BRL pair in its response map.
const PAIR_KEY: &str = "USDBRL";

/// Transport-level budget for one upstream round trip.
///
/// The effective deadline is the minimum of this and whatever timeout the
/// caller wraps around `fetch`.
pub const FETCH_TIMEOUT: Duration = Duration::from_millis(200);

/// Per-pair payload of the provider response. A payload without `bid` is a
/// decode failure, never a silent empty quote.
#[derive(Debug, Deserialize)]
struct PairQuote {
    bid: String,
}

/// `QuoteSource` adapter for the awesomeapi currency endpoint.
pub struct AwesomeApiSource {
    endpoint: String,
    http: reqwest::Client,
}

impl AwesomeApiSource {
    /// Creates a source against the production endpoint.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Creates a source against a custom endpoint.
    ///
    /// Tests point this at a local stand-in server.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(endpoint, FETCH_TIMEOUT)
    }

    /// Creates a source with a custom transport timeout.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::BuildRequest(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }
}

#[async_trait]
impl QuoteSource for AwesomeApiSource {
    async fn fetch(&self) -> Result<Quote, FetchError> {
        let resp = self.http.get(&self.endpoint).send().await.map_err(|e| {
            if e.is_builder() {
                FetchError::BuildRequest(e.to_string())
            } else {
                FetchError::Transport(e.to_string())
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus(status.as_u16()));
        }

        let mut payload: HashMap<String, PairQuote> = resp
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        let pair = payload
            .remove(PAIR_KEY)
            .ok_or(FetchError::MissingPair(PAIR_KEY))?;

        tracing::debug!(bid = %pair.bid, "fetched upstream quote");
        Ok(Quote::new(pair.bid))
    }
}
