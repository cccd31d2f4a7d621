//! # Folio Storefront
//!
//! The `folio` command-line storefront.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Folio Storefront                                   │
//! │                                                                         │
//! │  main.rs                                                                │
//! │    ├── Cli::parse()                                                     │
//! │    ├── init_tracing()          logs to stderr, RUST_LOG aware           │
//! │    ├── StorefrontConfig::load  defaults → toml → env → flags            │
//! │    ├── HttpCatalog::new                                                 │
//! │    └── run(command, catalog)                                            │
//! │          │                                                              │
//! │          ├── books   ──► commands::list_books                           │
//! │          ├── book    ──► commands::show_book                            │
//! │          ├── submit  ──► commands::read_draft + submit_draft            │
//! │          └── shop    ──► ShopSession (CartStore + Carousel)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//! - `cli` - clap definitions
//! - `commands` - one module per user-facing command
//! - `config` - storefront.toml loading
//! - `error` - `AppError` and exit codes
//! - `render` - terminal views
//! - `state` - the session's cart store

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod state;

use std::io::Write;

use chrono::Datelike;
use tracing_subscriber::EnvFilter;

use folio_catalog::Catalog;

use crate::cli::Command;
use crate::commands::ShopSession;
use crate::error::AppResult;
use crate::state::CartStore;

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - Default: `warn`
/// - `--verbose`: `info,folio=debug`
/// - Override with the `RUST_LOG` environment variable
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "info,folio=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one storefront command against `catalog`, writing views to stdout.
pub async fn run<C: Catalog + ?Sized>(command: Command, catalog: &C) -> AppResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Books { search } => {
            commands::list_books(catalog, search.as_deref(), &mut out).await?;
        }
        Command::Book { id } => {
            commands::show_book(catalog, &id, &mut out).await?;
        }
        Command::Submit { file } => {
            let draft = commands::read_draft(&file)?;
            let current_year = chrono::Utc::now().year();
            commands::submit_draft(catalog, draft, current_year, &mut out).await?;
        }
        Command::Shop => {
            let stdin = std::io::stdin();
            let mut session = ShopSession::new(catalog, CartStore::new());
            session.run(stdin.lock(), &mut out).await?;
        }
    }

    out.flush()?;
    Ok(())
}
