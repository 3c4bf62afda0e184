//! # Cotação Client SDK
//!
//! A typed Rust client for the quote service, plus the local-file sink the
//! command-line client writes through.

use std::path::Path;
use std::time::Duration;

use cotacao_types::Quote;

/// Whole-run budget for one quote request against the service.
///
/// Deliberately wider than the service's own 200ms upstream budget, so the
/// service normally fails first and the client sees its 500.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(300);

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: status {status}")]
    Api { status: u16 },

    #[error("decode error: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Quote service client.
pub struct CotacaoClient {
    base_url: String,
    http: reqwest::Client,
}

impl CotacaoClient {
    /// Creates a new client bound to the 300ms whole-request budget.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Creates a client with a custom request budget.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Fetches the current quote from the service.
    ///
    /// Transport failures and the request budget expiring surface as
    /// `Http`; a non-2xx response is `Api` with the status attached.
    pub async fn cotacao(&self) -> Result<Quote, ClientError> {
        let resp = self
            .http
            .get(format!("{}/cotacao", self.base_url))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
            });
        }

        resp.json::<Quote>().await.map_err(|e| {
            if e.is_decode() {
                ClientError::Decode(e)
            } else {
                ClientError::Http(e)
            }
        })
    }
}

/// Renders the line the client writes for a quote.
pub fn render_quote_line(quote: &Quote) -> String {
    format!("Dólar: {}\n", quote.bid)
}

/// Writes the quote line to `path`, replacing any previous file.
///
/// The line lands in a sibling temporary file first and is renamed over the
/// target, so a failed run leaves either the old file or no file, never a
/// truncated one.
pub async fn write_quote_file(path: impl AsRef<Path>, quote: &Quote) -> Result<(), ClientError> {
    let path = path.as_ref();
    let tmp = path.with_extension("tmp");

    tokio::fs::write(&tmp, render_quote_line(quote)).await?;
    tokio::fs::rename(&tmp, path).await?;

    Ok(())
}
