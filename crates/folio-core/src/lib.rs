//! # folio-core: Pure Storefront Logic for Folio
//!
//! Everything the bookstore decides without talking to anything: the cart
//! reducer, book types, prices, form validation, title search and the
//! featured-books carousel.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Folio Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                 storefront (folio binary)                       │    │
//! │  │    books ──► book ──► shop session ──► submit                   │    │
//! │  └──────────────┬───────────────────────────────┬──────────────────┘    │
//! │                 │                               │                       │
//! │  ┌──────────────▼──────────────────┐  ┌─────────▼──────────────────┐    │
//! │  │   ★ folio-core (THIS CRATE) ★   │  │      folio-catalog         │    │
//! │  │                                 │  │  REST client for the       │    │
//! │  │  cart  types  money  validation │◄─┤  remote book catalog       │    │
//! │  │  search  carousel               │  │                            │    │
//! │  │                                 │  └────────────────────────────┘    │
//! │  │  NO I/O • NO NETWORK • PURE     │                                    │
//! │  └─────────────────────────────────┘                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - Cart reducer, actions and selectors
//! - [`types`] - Book, Edition, BookId, Currency, BookDraft
//! - [`money`] - Integer minor-unit prices
//! - [`validation`] - The "add a book" form rules
//! - [`search`] - Title filtering
//! - [`carousel`] - Featured books cursor
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use folio_core::cart::{reduce, CartAction, CartState};
//! use folio_core::{Book, BookId, Currency, Edition, Money};
//!
//! let book = Book {
//!     id: Some(BookId::new("12")),
//!     title: "Ion".into(),
//!     editions: vec![Edition::new("Paperback", Money::from_minor(9900), Currency::Mdl, true)],
//!     ..Book::default()
//! };
//!
//! let cart = reduce(CartState::new(), CartAction::add(&book, "Paperback"));
//! let cart = reduce(cart, CartAction::update_quantity(&book, "Paperback", Some(2)));
//!
//! let (total, currency) = cart.lines()[0].line_total().unwrap();
//! assert_eq!(format!("{} {}", total, currency), "297.00 MDL");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod carousel;
pub mod cart;
pub mod error;
pub mod money;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{
    choose_edition, reduce, select_lines, select_total_quantity, CartAction, CartLine, CartState,
};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use validation::FormErrors;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity change applied by `UpdateQuantity` when the action carries none.
pub const DEFAULT_QUANTITY_DELTA: i64 = 1;
