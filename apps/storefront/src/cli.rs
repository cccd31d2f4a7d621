//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Folio bookstore storefront", long_about = None)]
pub struct Cli {
    /// Path to storefront.toml
    #[arg(long, global = true, value_name = "PATH", env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog base URL (overrides the config file and FOLIO_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the books in the catalog
    Books {
        /// Only books whose title contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one book with its editions
    Book {
        /// Catalog id of the book
        id: String,
    },

    /// Validate a book draft (JSON or TOML) and add it to the catalog
    Submit {
        /// Draft file path
        file: PathBuf,
    },

    /// Start an interactive shopping session
    Shop,
}
