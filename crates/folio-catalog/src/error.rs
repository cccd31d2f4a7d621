//! # Catalog Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐  │
//! │  │  Configuration  │  │   Transport     │  │     Response            │  │
//! │  │                 │  │                 │  │                         │  │
//! │  │  InvalidUrl     │  │  Network        │  │  NotFound (404)         │  │
//! │  │  InvalidConfig  │  │                 │  │  UnexpectedStatus       │  │
//! │  │                 │  │                 │  │  Decode                 │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use folio_core::BookId;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Everything that can go wrong between the storefront and the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Base URL that cannot be parsed or is not http(s).
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Connection refused, DNS failure, timeout, broken body stream.
    #[error("Catalog request failed: {0}")]
    Network(#[from] reqwest::Error),

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// The catalog answered 404 for a single book.
    #[error("Book not found: {id}")]
    NotFound { id: BookId },

    /// Any other non-success status.
    #[error("Catalog returned unexpected status {status}")]
    UnexpectedStatus { status: u16 },

    /// The body was not the JSON shape we expect.
    #[error("Could not decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}
