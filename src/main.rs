use anyhow::Result;
use clap::Parser;
use gmail_sweep::cli::Cli;
use gmail_sweep::client::GmailApiClient;
use gmail_sweep::mutation::MutationExecutor;
use gmail_sweep::search::SearchEngine;
use gmail_sweep::token_store::TokenStore;
use gmail_sweep::{auth, confirm};
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Exit with proper code on error; user decline is not an error
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Install default crypto provider for rustls
    // On non-Windows platforms, use aws-lc-rs (better performance, FIPS support)
    // On Windows, use ring (better compatibility, no NASM/CMake required)
    #[cfg(not(windows))]
    rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install default crypto provider"))?;

    #[cfg(windows)]
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install default crypto provider"))?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing with level based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gmail_sweep=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("gmail_sweep=info,warn,error"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Authenticate, running the interactive flow if no cached token is usable
    let token_store = TokenStore::new(&cli.token_cache);
    let hub = auth::initialize_gmail_hub(&cli.credentials, &token_store).await?;
    let client = GmailApiClient::new(hub);

    // Collect every match across all queries, then gate the mutation on an
    // explicit confirmation. Declining exits cleanly with nothing touched.
    let records = SearchEngine::new(&client).search(&cli.search).await?;

    if confirm::confirm(records.len()) {
        MutationExecutor::new(&client)
            .apply(&records, cli.mutation_mode())
            .await?;
    }

    Ok(())
}
