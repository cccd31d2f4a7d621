//! # Storefront Commands
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  books.rs   folio books, folio book <id>   (catalog list / book page)   │
//! │  submit.rs  folio submit <file>            (the "add a book" form)      │
//! │  shop.rs    folio shop                     (interactive cart session)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands take any [`Catalog`](folio_catalog::Catalog) and any `Write`,
//! so tests drive them with an in-memory catalog and a byte buffer.

mod books;
mod shop;
mod submit;

pub use books::{list_books, show_book};
pub use shop::{ShopCommand, ShopSession};
pub use submit::{read_draft, submit_draft};
