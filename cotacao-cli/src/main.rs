//! Cotação CLI
//!
//! Standalone client process: one bounded GET against the local quote
//! service, then the result is written to a local file. Any failure is
//! logged and ends the run with nothing written; there is no retry.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cotacao_client::{CotacaoClient, write_quote_file};

#[derive(Parser)]
#[command(name = "cotacao")]
#[command(author, version, about = "Fetches the USD-BRL quote and saves it locally", long_about = None)]
struct Cli {
    /// Base URL of the quote service
    #[arg(long, env = "COTACAO_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    /// File the quote line is written to
    #[arg(long, default_value = "cotacao.txt")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let client = CotacaoClient::new(&cli.api_url)?;

    let quote = client
        .cotacao()
        .await
        .context("failed to fetch quote from service")?;

    write_quote_file(&cli.output, &quote)
        .await
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    tracing::info!(bid = %quote.bid, output = %cli.output.display(), "quote saved");

    Ok(())
}
