//! # Cotação Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the upstream source and the SQLite store
//! - Create the quote service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cotacao_hex::{QuoteService, inbound::HttpServer};
use cotacao_repo::SqliteStore;
use cotacao_upstream::AwesomeApiSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cotacao_app=debug,cotacao_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting cotacao server on port {}", config.port);
    tracing::info!("Upstream quote endpoint: {}", config.upstream_url);

    let source = AwesomeApiSource::with_endpoint(&config.upstream_url)?;

    // With or without persistence, per configuration
    let service = if config.persist_quotes {
        tracing::info!("Persisting quotes to {}", config.database_url);
        QuoteService::new(source, SqliteStore::new(&config.database_url))
    } else {
        QuoteService::without_store(source)
    };

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
