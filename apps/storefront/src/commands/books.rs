//! # Book Commands
//!
//! The catalog page and the book page.
//!
//! ## Failure Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  list_books:  catalog down ──► logged ──► empty listing ("Nothing found")│
//! │  show_book:   id not numeric ──────────┐                                │
//! │               catalog 404 ─────────────┼──► "Book not found" view       │
//! │               catalog down ────────────┘    + NotFound error            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;

use tracing::{debug, warn};

use folio_catalog::Catalog;
use folio_core::search::filter_by_title;
use folio_core::{Book, BookId};

use crate::error::{AppError, AppResult, ErrorCode};
use crate::render;

/// Loads the catalog, filters it by title and renders the listing.
///
/// Returns the full, unfiltered catalog so callers can reuse it.
pub async fn list_books<C, W>(catalog: &C, search: Option<&str>, out: &mut W) -> AppResult<Vec<Book>>
where
    C: Catalog + ?Sized,
    W: Write,
{
    let query = search.unwrap_or_default();

    let books = catalog.list_books().await.unwrap_or_else(|e| {
        warn!(error = %e, "Showing empty catalog");
        Vec::new()
    });

    let matches = filter_by_title(&books, query);
    debug!(total = books.len(), shown = matches.len(), query = %query, "Rendering catalog");
    render::book_list(out, &matches)?;

    Ok(books)
}

/// Renders the book page for `id`, or the not-found view.
pub async fn show_book<C, W>(catalog: &C, id: &str, out: &mut W) -> AppResult<Book>
where
    C: Catalog + ?Sized,
    W: Write,
{
    let id = BookId::new(id.trim());

    if !id.is_numeric() {
        debug!(book_id = %id, "Rejecting non-numeric book id");
        render::not_found(out)?;
        return Err(AppError::not_found("Book", id.as_str()));
    }

    match catalog.get_book(&id).await {
        Ok(book) => {
            render::book_detail(out, &book)?;
            Ok(book)
        }
        Err(e) => {
            render::not_found(out)?;
            Err(AppError::new(
                ErrorCode::NotFound,
                format!("Book not found: {} ({})", id, e),
            ))
        }
    }
}
