//! `folio` binary entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use folio_catalog::HttpCatalog;
use folio_storefront::cli::Cli;
use folio_storefront::config::StorefrontConfig;
use folio_storefront::{init_tracing, run};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = StorefrontConfig::load(cli.config.as_deref(), cli.api_url.as_deref())
        .context("Failed to load storefront configuration")?;
    info!(catalog = %config.catalog.base_url, "Configuration loaded");

    let catalog =
        HttpCatalog::new(&config.catalog).context("Failed to set up the catalog client")?;

    match run(cli.command, &catalog).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            debug!(code = ?e.code, "Command failed");
            eprintln!("Error: {}", e);
            Ok(ExitCode::from(e.code.exit_code()))
        }
    }
}
