//! # folio-catalog: Remote Book Catalog Client
//!
//! The storefront's only network dependency. Books are listed, fetched and
//! created over a small REST API; everything else happens in `folio-core`.
//!
//! ## Module Organization
//! - [`client`] - `Catalog` trait and the reqwest-backed `HttpCatalog`
//! - [`config`] - Base URL and timeout settings
//! - [`error`] - `CatalogError`
//!
//! ## Example
//! ```rust,no_run
//! use folio_catalog::{Catalog, CatalogConfig, HttpCatalog};
//! use folio_core::BookId;
//!
//! # async fn run() -> folio_catalog::CatalogResult<()> {
//! let catalog = HttpCatalog::new(&CatalogConfig::default())?;
//! let books = catalog.list_books().await?;
//! let first = catalog.get_book(&BookId::new("1")).await?;
//! println!("{} books, first is {}", books.len(), first.title);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{provisional_id, Catalog, HttpCatalog};
pub use config::{CatalogConfig, DEFAULT_BASE_URL};
pub use error::{CatalogError, CatalogResult};
