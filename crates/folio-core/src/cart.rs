//! # Cart Reducer
//!
//! The shopping cart as a pure state machine: `reduce(state, action) → state`.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Action                          Effect on CartState                    │
//! │  ──────                          ───────────────────                    │
//! │                                                                         │
//! │  Add { book, edition } ────────► line.quantity += 1  (or new line, 1)   │
//! │                                  total_quantity += 1                    │
//! │                                                                         │
//! │  Remove { book, edition } ─────► total_quantity -= line.quantity        │
//! │                                  line deleted                           │
//! │                                                                         │
//! │  UpdateQuantity { .., q } ─────► line.quantity += q (default 1)         │
//! │                                  total_quantity += q                    │
//! │                                  line deleted if quantity <= 0          │
//! │                                                                         │
//! │  Book without id ──────────────► state returned unchanged               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per `(book id, edition name)`
//! - Every stored line has `quantity > 0`
//! - `total_quantity` is maintained incrementally, never recomputed
//!
//! ## Silent No-Op Policy
//! No cart operation reports an error. A book without an id, or a key that
//! is not in the cart, leaves the state exactly as it was.
//!
//! ## Known Drift
//! When `UpdateQuantity` pushes a line below zero (quantity 1, delta -3),
//! the line is deleted but `total_quantity` only moves by the delta, so it
//! ends up lower than the sum of the remaining lines.
//!
//! Counts saturate at the `i64` bounds instead of overflowing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Book, BookId, Currency, Edition};
use crate::DEFAULT_QUANTITY_DELTA;

// =============================================================================
// Cart Line
// =============================================================================

/// One `(book, edition)` pairing in the cart.
///
/// The book is a snapshot taken when the line was created; later catalog
/// edits do not reach lines already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub book: Book,

    /// Edition name; unique within the book.
    pub edition: String,

    /// Always at least 1 while the line exists.
    pub quantity: i64,
}

impl CartLine {
    fn matches(&self, id: &BookId, edition: &str) -> bool {
        self.book.identity() == Some(id) && self.edition == edition
    }

    /// The edition record from the book snapshot.
    pub fn edition_details(&self) -> Option<&Edition> {
        self.book.edition(&self.edition)
    }

    /// Unit price × quantity, with the edition's currency.
    ///
    /// `None` when the snapshot no longer lists the edition.
    pub fn line_total(&self) -> Option<(Money, &Currency)> {
        self.edition_details()
            .map(|e| (e.price.multiply_quantity(self.quantity), &e.currency))
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// The whole cart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    lines: Vec<CartLine>,
    total_quantity: i64,
}

impl CartState {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total_quantity(&self) -> i64 {
        self.total_quantity
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct `(book, edition)` lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Finds the line for `(book, edition)`.
    pub fn find_line(&self, book: &Book, edition: &str) -> Option<&CartLine> {
        let id = book.identity()?;
        self.lines.iter().find(|line| line.matches(id, edition))
    }

    /// Sum of line totals, one entry per currency.
    ///
    /// Lines whose edition vanished from the snapshot contribute nothing.
    pub fn totals_by_currency(&self) -> BTreeMap<Currency, Money> {
        let mut totals = BTreeMap::new();
        for (amount, currency) in self.lines.iter().filter_map(CartLine::line_total) {
            *totals.entry(currency.clone()).or_insert_with(Money::zero) += amount;
        }
        totals
    }

    fn position(&self, id: &BookId, edition: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.matches(id, edition))
    }
}

// =============================================================================
// Actions
// =============================================================================

/// Cart operations, in the payload shape the storefront dispatches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CartAction {
    /// Add one copy of an edition.
    Add { book: Book, edition: String },

    /// Drop the whole line.
    Remove { book: Book, edition: String },

    /// Shift the line's quantity by `quantity` (default +1, may be negative).
    UpdateQuantity {
        book: Book,
        edition: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quantity: Option<i64>,
    },
}

impl CartAction {
    pub fn add(book: &Book, edition: impl Into<String>) -> Self {
        CartAction::Add {
            book: book.clone(),
            edition: edition.into(),
        }
    }

    pub fn remove(book: &Book, edition: impl Into<String>) -> Self {
        CartAction::Remove {
            book: book.clone(),
            edition: edition.into(),
        }
    }

    pub fn update_quantity(book: &Book, edition: impl Into<String>, delta: Option<i64>) -> Self {
        CartAction::UpdateQuantity {
            book: book.clone(),
            edition: edition.into(),
            quantity: delta,
        }
    }

    fn book(&self) -> &Book {
        match self {
            CartAction::Add { book, .. }
            | CartAction::Remove { book, .. }
            | CartAction::UpdateQuantity { book, .. } => book,
        }
    }
}

// =============================================================================
// Reducer
// =============================================================================

/// Applies one action and returns the next state.
///
/// ## Example
/// ```rust
/// use folio_core::cart::{reduce, select_total_quantity, CartAction, CartState};
/// use folio_core::types::{Book, BookId};
///
/// let book = Book { id: Some(BookId::new("1")), ..Book::default() };
///
/// let state = reduce(CartState::new(), CartAction::add(&book, "Hardcover"));
/// let state = reduce(state, CartAction::add(&book, "Hardcover"));
///
/// assert_eq!(state.lines().len(), 1);
/// assert_eq!(state.lines()[0].quantity, 2);
/// assert_eq!(select_total_quantity(&state), 2);
/// ```
pub fn reduce(mut state: CartState, action: CartAction) -> CartState {
    let Some(id) = action.book().identity().cloned() else {
        debug!(?action, "Ignoring cart action for a book without id");
        return state;
    };

    match action {
        CartAction::Add { book, edition } => {
            match state.position(&id, &edition) {
                Some(index) => {
                    let line = &mut state.lines[index];
                    line.quantity = line.quantity.saturating_add(1);
                }
                None => state.lines.push(CartLine {
                    book,
                    edition,
                    quantity: 1,
                }),
            }
            state.total_quantity = state.total_quantity.saturating_add(1);
        }

        CartAction::Remove { edition, .. } => {
            if let Some(index) = state.position(&id, &edition) {
                let line = state.lines.remove(index);
                state.total_quantity = state.total_quantity.saturating_sub(line.quantity);
            } else {
                debug!(book_id = %id, edition = %edition, "Remove for a line not in cart");
            }
        }

        CartAction::UpdateQuantity {
            edition, quantity, ..
        } => {
            let delta = quantity.unwrap_or(DEFAULT_QUANTITY_DELTA);
            if let Some(index) = state.position(&id, &edition) {
                let line = &mut state.lines[index];
                line.quantity = line.quantity.saturating_add(delta);
                state.total_quantity = state.total_quantity.saturating_add(delta);
                if state.lines[index].quantity <= 0 {
                    state.lines.remove(index);
                }
            } else {
                debug!(book_id = %id, edition = %edition, "Quantity update for a line not in cart");
            }
        }
    }

    state
}

// =============================================================================
// Edition Selection
// =============================================================================

/// Picks the edition an "add to cart" click would add.
///
/// With a name, that edition must exist and be in stock. Without one, the
/// first in-stock edition is used, matching the book page's preselection.
pub fn choose_edition<'a>(book: &'a Book, requested: Option<&str>) -> CoreResult<&'a Edition> {
    match requested {
        Some(name) => {
            let edition = book
                .edition(name)
                .ok_or_else(|| CoreError::EditionNotFound {
                    title: book.title.clone(),
                    edition: name.to_string(),
                })?;
            if !edition.in_stock {
                return Err(CoreError::OutOfStock {
                    title: book.title.clone(),
                    edition: edition.edition.clone(),
                });
            }
            Ok(edition)
        }
        None => book.first_in_stock().ok_or_else(|| CoreError::NothingInStock {
            title: book.title.clone(),
        }),
    }
}

// =============================================================================
// Selectors
// =============================================================================

/// All cart lines, in the order they were first added.
pub fn select_lines(state: &CartState) -> &[CartLine] {
    state.lines()
}

/// Total quantity across all lines (the header badge).
pub fn select_total_quantity(state: &CartState) -> i64 {
    state.total_quantity()
}

// =============================================================================
// Unit Tests
// =============================================================================
