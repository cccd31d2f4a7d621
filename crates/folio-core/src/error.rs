//! # Error Types
//!
//! Domain-specific error types for folio-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  folio-core errors (this file)                                          │
//! │  ├── CoreError        - Storefront rule violations                      │
//! │  └── ValidationError  - One form field failing one rule                 │
//! │                                                                         │
//! │  folio-catalog errors (separate crate)                                  │
//! │  └── CatalogError     - Remote catalog failures                         │
//! │                                                                         │
//! │  storefront errors (in app)                                             │
//! │  └── AppError         - What the terminal shows                         │
//! │                                                                         │
//! │  Flow: ValidationError → FormErrors → CoreError → AppError → terminal   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart has no error type: the reducer never fails (see [`crate::cart`]).

use thiserror::Error;

use crate::validation::FormErrors;

// =============================================================================
// Core Error
// =============================================================================

/// Storefront rule violations raised before anything reaches the cart or
/// the catalog.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The book has no edition with this name.
    #[error("'{title}' has no edition named '{edition}'")]
    EditionNotFound { title: String, edition: String },

    /// Sold-out editions cannot be added to the cart.
    #[error("'{title}' ({edition}) is out of stock")]
    OutOfStock { title: String, edition: String },

    /// Every edition of the book is sold out.
    #[error("'{title}' has no edition in stock")]
    NothingInStock { title: String },

    /// The book form failed validation; the map holds one message per field.
    #[error("Book form has {} invalid field(s)", .0.len())]
    InvalidBook(FormErrors),
}

// =============================================================================
// Validation Error
// =============================================================================

/// One form field failing one rule.
///
/// The `Display` text is exactly what the form shows next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{label} is required")]
    Required { label: String },

    /// Value must be strictly positive.
    #[error("{label} must be greater than 0")]
    MustBePositive { label: String },

    /// A publication year after the current one.
    #[error("Year cannot be later than the current year")]
    YearInFuture { year: i32, current_year: i32 },

    /// A collection that needs at least one entry.
    #[error("Add at least one {item}")]
    AtLeastOne { item: String },
}

impl ValidationError {
    pub fn required(label: &str) -> Self {
        ValidationError::Required {
            label: label.to_string(),
        }
    }

    pub fn must_be_positive(label: &str) -> Self {
        ValidationError::MustBePositive {
            label: label.to_string(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
