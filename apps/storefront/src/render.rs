//! Terminal views.
//!
//! Every view writes to a caller-supplied `Write` so the shop session and
//! the tests can capture output.

use std::io::{self, Write};

use folio_core::{Book, CartState, FormErrors};

pub const NOTHING_FOUND: &str = "Nothing found";
pub const BOOK_NOT_FOUND: &str = "Book not found";
pub const CART_EMPTY: &str = "The cart is empty";

fn id_label(book: &Book) -> &str {
    book.identity().map(|id| id.as_str()).unwrap_or("-")
}

/// The catalog listing, or the empty state.
pub fn book_list<W: Write>(out: &mut W, books: &[&Book]) -> io::Result<()> {
    if books.is_empty() {
        return writeln!(out, "{}", NOTHING_FOUND);
    }
    for book in books {
        let in_stock = book.editions.iter().filter(|e| e.in_stock).count();
        writeln!(
            out,
            "#{:<6} {} - {} ({}) [{} of {} editions in stock]",
            id_label(book),
            book.title,
            book.author,
            book.year,
            in_stock,
            book.editions.len()
        )?;
    }
    Ok(())
}

/// A book page with its editions.
pub fn book_detail<W: Write>(out: &mut W, book: &Book) -> io::Result<()> {
    writeln!(out, "{} (#{})", book.title, id_label(book))?;
    writeln!(out, "  Author:   {}", book.author)?;
    writeln!(out, "  Year:     {}", book.year)?;
    writeln!(out, "  Genre:    {}", book.genre)?;
    writeln!(out, "  Language: {}", book.language)?;
    if !book.image_url.is_empty() {
        writeln!(out, "  Cover:    {}", book.image_url)?;
    }
    writeln!(out, "  Editions:")?;
    for edition in &book.editions {
        if edition.in_stock {
            writeln!(
                out,
                "    {:<16} {} {}",
                edition.edition, edition.price, edition.currency
            )?;
        } else {
            writeln!(out, "    {:<16} Out of stock", edition.edition)?;
        }
    }
    Ok(())
}

pub fn not_found<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BOOK_NOT_FOUND)
}

/// The cart page: numbered lines, item count and per-currency totals.
pub fn cart<W: Write>(out: &mut W, state: &CartState) -> io::Result<()> {
    if state.is_empty() {
        return writeln!(out, "{}", CART_EMPTY);
    }

    for (position, line) in state.lines().iter().enumerate() {
        let total = match line.line_total() {
            Some((amount, currency)) => format!("{} {}", amount, currency),
            None => "unavailable".to_string(),
        };
        writeln!(
            out,
            "{}. {} ({}) x{}  {}",
            position + 1,
            line.book.title,
            line.edition,
            line.quantity,
            total
        )?;
    }

    let totals: Vec<String> = state
        .totals_by_currency()
        .into_iter()
        .map(|(currency, amount)| format!("{} {}", amount, currency))
        .collect();
    writeln!(out, "Items: {}", state.total_quantity())?;
    writeln!(out, "Total: {}", totals.join(" + "))
}

/// One line per failing form field.
pub fn form_errors<W: Write>(out: &mut W, errors: &FormErrors) -> io::Result<()> {
    writeln!(out, "The book form has errors:")?;
    for (field, error) in errors.iter() {
        writeln!(out, "  {}: {}", field, error)?;
    }
    Ok(())
}
