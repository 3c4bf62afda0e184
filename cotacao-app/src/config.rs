//! Configuration loading from environment.

use std::env;

/// Application configuration.
///
/// The defaults are the reference deployment: port 8080, a local SQLite
/// file, the production quote endpoint and persistence switched on.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub upstream_url: String,
    pub persist_quotes: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://cotacoes.db?mode=rwc".to_string());

        let upstream_url = env::var("UPSTREAM_URL")
            .unwrap_or_else(|_| cotacao_upstream::DEFAULT_ENDPOINT.to_string());

        let persist_quotes = env::var("PERSIST_QUOTES")
            .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
            .unwrap_or(true);

        Ok(Self {
            port,
            database_url,
            upstream_url,
            persist_quotes,
        })
    }
}
