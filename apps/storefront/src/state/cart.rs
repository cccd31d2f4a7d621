//! # Cart Store
//!
//! Holds the session's cart and routes every change through the reducer.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Shop Command         CartStore method        Action dispatched         │
//! │  ────────────         ────────────────        ─────────────────         │
//! │                                                                         │
//! │  add 12 Paperback ──► add(book, ed) ────────► CartAction::Add           │
//! │  inc 1 ─────────────► update_quantity(+1) ──► CartAction::UpdateQuantity│
//! │  dec 1 ─────────────► update_quantity(-1) ──► CartAction::UpdateQuantity│
//! │  remove 1 ──────────► remove(book, ed) ─────► CartAction::Remove        │
//! │  cart ──────────────► lines() (read only)                               │
//! │                                                                         │
//! │  The lock is held for exactly one reducer call.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use folio_core::cart::{reduce, select_lines, select_total_quantity, CartAction, CartLine, CartState};
use folio_core::Book;

/// Shared handle to the cart. Clones see the same cart.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: Arc<Mutex<CartState>>,
}

impl CartStore {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action and returns the new total quantity.
    pub fn dispatch(&self, action: CartAction) -> i64 {
        let mut state = self.lock();
        *state = reduce(state.clone(), action);
        debug!(
            lines = state.line_count(),
            total_quantity = state.total_quantity(),
            "Cart updated"
        );
        state.total_quantity()
    }

    pub fn add(&self, book: &Book, edition: &str) -> i64 {
        self.dispatch(CartAction::add(book, edition))
    }

    pub fn remove(&self, book: &Book, edition: &str) -> i64 {
        self.dispatch(CartAction::remove(book, edition))
    }

    pub fn update_quantity(&self, book: &Book, edition: &str, delta: Option<i64>) -> i64 {
        self.dispatch(CartAction::update_quantity(book, edition, delta))
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartState) -> R,
    {
        f(&self.lock())
    }

    /// Copy of every line, in cart order.
    pub fn lines(&self) -> Vec<CartLine> {
        self.with_cart(|state| select_lines(state).to_vec())
    }

    /// The header badge count.
    pub fn total_quantity(&self) -> i64 {
        self.with_cart(select_total_quantity)
    }

    /// Line at a 1-based cart position.
    pub fn line_at(&self, position: usize) -> Option<CartLine> {
        let index = position.checked_sub(1)?;
        self.with_cart(|state| state.lines().get(index).cloned())
    }

    /// The guarded cart is only replaced after `reduce` returns, so a
    /// poisoned lock still holds the last complete cart.
    fn lock(&self) -> MutexGuard<'_, CartState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{BookId, Currency, Edition, Money};

    fn test_book(id: &str) -> Book {
        Book {
            id: Some(BookId::new(id)),
            title: format!("Book {}", id),
            editions: vec![Edition::new("Paperback", Money::from_minor(1000), Currency::Mdl, true)],
            ..Book::default()
        }
    }

    #[test]
    fn test_store_dispatches_through_reducer() {
        let store = CartStore::new();
        let book = test_book("1");

        assert_eq!(store.add(&book, "Paperback"), 1);
        assert_eq!(store.add(&book, "Paperback"), 2);
        assert_eq!(store.update_quantity(&book, "Paperback", Some(-1)), 1);
        assert_eq!(store.lines().len(), 1);

        assert_eq!(store.remove(&book, "Paperback"), 0);
        assert!(store.lines().is_empty());
    }

    #[test]
    fn test_clones_share_the_cart() {
        let store = CartStore::new();
        let other = store.clone();

        other.add(&test_book("1"), "Paperback");
        assert_eq!(store.total_quantity(), 1);
    }

    #[test]
    fn test_line_at_is_one_based() {
        let store = CartStore::new();
        store.add(&test_book("1"), "Paperback");
        store.add(&test_book("2"), "Paperback");

        assert!(store.line_at(0).is_none());
        assert_eq!(store.line_at(2).unwrap().book.title, "Book 2");
        assert!(store.line_at(3).is_none());
    }

    #[test]
    fn test_store_survives_poisoned_lock() {
        let store = CartStore::new();
        store.add(&test_book("1"), "Paperback");

        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.state.lock().unwrap();
            panic!("poison the cart lock");
        })
        .join();

        assert_eq!(store.add(&test_book("1"), "Paperback"), 2);
    }

    #[test]
    fn test_huge_delta_from_another_thread_keeps_cart() {
        let store = CartStore::new();
        let first = test_book("1");
        let second = test_book("2");
        store.add(&first, "Paperback");
        store.add(&second, "Paperback");

        let writer = store.clone();
        let handle = std::thread::spawn(move || {
            writer.update_quantity(&first, "Paperback", Some(i64::MAX))
        });

        assert_eq!(handle.join().unwrap(), i64::MAX);
        assert_eq!(store.lines().len(), 2);
        assert_eq!(store.line_at(1).unwrap().quantity, i64::MAX);
        assert_eq!(store.line_at(2).unwrap().quantity, 1);
    }
}
