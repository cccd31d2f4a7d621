//! # Shop Session
//!
//! An interactive storefront on a line-based terminal: browse, open books,
//! fill the cart, adjust quantities.
//!
//! ## Session Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  start ──► load catalog ──► featured carousel ──► prompt "[cart: N] > " │
//! │                                                        │                │
//! │             ┌──────────────────────────────────────────┘                │
//! │             ▼                                                           │
//! │      parse ShopCommand ──► execute ──► render ──► prompt again          │
//! │             │                  │                                        │
//! │             │                  └── error: print message, keep going     │
//! │             └── quit / end of input ──► session ends                    │
//! │                                                                         │
//! │  Catalog requests are awaited inline; a response always lands on the   │
//! │  view that asked for it.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Commands
//! | Command | Effect |
//! |---------|--------|
//! | `list [text]` | Catalog listing, optionally filtered by title |
//! | `show <id>` | Book page |
//! | `add <id> [edition]` | Add one copy; default edition is the first in stock |
//! | `inc <n>` / `dec <n>` | Change the quantity of cart line `n` by one |
//! | `remove <n>` | Drop cart line `n` |
//! | `cart` | Cart page |
//! | `next` / `prev` | Rotate the featured books |
//! | `help` / `quit` | |

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, info, warn};

use folio_catalog::Catalog;
use folio_core::carousel::Carousel;
use folio_core::{choose_edition, Book, BookId};

use crate::commands::books::{list_books, show_book};
use crate::error::{AppError, AppResult};
use crate::render;
use crate::state::CartStore;

const HELP: &str = "\
Commands:
  list [text]           list books, optionally filtered by title
  show <id>             show a book
  add <id> [edition]    add a book to the cart (first in-stock edition by default)
  inc <n>               one more copy of cart line n
  dec <n>               one less copy of cart line n
  remove <n>            remove cart line n
  cart                  show the cart
  next, prev            rotate the featured books
  help                  show this help
  quit                  leave the shop";

// =============================================================================
// Shop Commands
// =============================================================================

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopCommand {
    List(Option<String>),
    Show(String),
    Add { id: String, edition: Option<String> },
    Increment(usize),
    Decrement(usize),
    Remove(usize),
    Cart,
    Next,
    Prev,
    Help,
    Quit,
}

fn line_position(command: &str, arg: &str) -> AppResult<usize> {
    arg.parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| AppError::validation(format!("Usage: {} <line number>", command)))
}

fn non_empty(arg: &str) -> Option<String> {
    (!arg.is_empty()).then(|| arg.to_string())
}

impl FromStr for ShopCommand {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, arg) = line
            .split_once(char::is_whitespace)
            .map(|(c, a)| (c, a.trim()))
            .unwrap_or((line, ""));

        match command.to_lowercase().as_str() {
            "list" | "ls" => Ok(ShopCommand::List(non_empty(arg))),
            "show" => non_empty(arg)
                .map(ShopCommand::Show)
                .ok_or_else(|| AppError::validation("Usage: show <id>")),
            "add" => {
                let (id, edition) = arg
                    .split_once(char::is_whitespace)
                    .map(|(id, ed)| (id, ed.trim()))
                    .unwrap_or((arg, ""));
                if id.is_empty() {
                    return Err(AppError::validation("Usage: add <id> [edition]"));
                }
                Ok(ShopCommand::Add {
                    id: id.to_string(),
                    edition: non_empty(edition),
                })
            }
            "inc" => line_position("inc", arg).map(ShopCommand::Increment),
            "dec" => line_position("dec", arg).map(ShopCommand::Decrement),
            "remove" | "rm" => line_position("remove", arg).map(ShopCommand::Remove),
            "cart" => Ok(ShopCommand::Cart),
            "next" => Ok(ShopCommand::Next),
            "prev" => Ok(ShopCommand::Prev),
            "help" | "?" => Ok(ShopCommand::Help),
            "quit" | "exit" => Ok(ShopCommand::Quit),
            other => Err(AppError::validation(format!(
                "Unknown command: '{}'. Type 'help' for the list of commands.",
                other
            ))),
        }
    }
}

// =============================================================================
// Shop Session
// =============================================================================

/// One customer's visit: a cart, the featured carousel and the last
/// catalog listing.
pub struct ShopSession<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
    cart: CartStore,
    carousel: Carousel,
    listing: Vec<Book>,
}

impl<'a, C: Catalog + ?Sized> ShopSession<'a, C> {
    pub fn new(catalog: &'a C, cart: CartStore) -> Self {
        ShopSession {
            catalog,
            cart,
            carousel: Carousel::default(),
            listing: Vec::new(),
        }
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Runs commands from `input` until `quit` or end of input.
    pub async fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> AppResult<()> {
        self.load_featured().await;

        writeln!(out, "Welcome to Folio. Type 'help' for commands.")?;
        self.show_featured(out)?;

        let mut lines = input.lines();
        loop {
            write!(out, "[cart: {}] > ", self.cart.total_quantity())?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<ShopCommand>() {
                Ok(ShopCommand::Quit) => break,
                Ok(command) => command,
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    continue;
                }
            };

            debug!(?command, "Shop command");
            if let Err(e) = self.execute(command, out).await {
                writeln!(out, "{}", e)?;
            }
        }

        info!(
            total_quantity = self.cart.total_quantity(),
            lines = self.cart.lines().len(),
            "Shop session ended"
        );
        Ok(())
    }

    /// Executes one command against the session.
    pub async fn execute<W: Write>(&mut self, command: ShopCommand, out: &mut W) -> AppResult<()> {
        match command {
            ShopCommand::List(query) => {
                self.listing = list_books(self.catalog, query.as_deref(), out).await?;
                if self.carousel.is_empty() {
                    self.carousel = featured(&self.listing);
                }
            }

            ShopCommand::Show(id) => {
                // The not-found view is already on screen.
                if let Err(e) = show_book(self.catalog, &id, out).await {
                    debug!(error = %e, "Book page not shown");
                }
            }

            ShopCommand::Add { id, edition } => {
                let book = self.find_book(&id).await?;
                let edition = choose_edition(&book, edition.as_deref())?.edition.clone();
                self.cart.add(&book, &edition);
                writeln!(out, "Added {} ({}) to the cart.", book.title, edition)?;
            }

            ShopCommand::Increment(position) => self.change_quantity(position, 1, out)?,
            ShopCommand::Decrement(position) => self.change_quantity(position, -1, out)?,

            ShopCommand::Remove(position) => {
                let line = self.line(position)?;
                self.cart.remove(&line.book, &line.edition);
                writeln!(out, "Removed {} ({}) from the cart.", line.book.title, line.edition)?;
            }

            ShopCommand::Cart => self.cart.with_cart(|state| render::cart(out, state))?,

            ShopCommand::Next => {
                self.carousel.advance();
                self.show_featured(out)?;
            }
            ShopCommand::Prev => {
                self.carousel.retreat();
                self.show_featured(out)?;
            }

            ShopCommand::Help => writeln!(out, "{}", HELP)?,
            ShopCommand::Quit => {}
        }
        Ok(())
    }

    fn change_quantity<W: Write>(&self, position: usize, delta: i64, out: &mut W) -> AppResult<()> {
        let line = self.line(position)?;
        self.cart.update_quantity(&line.book, &line.edition, Some(delta));
        self.cart.with_cart(|state| render::cart(out, state))?;
        Ok(())
    }

    fn line(&self, position: usize) -> AppResult<folio_core::CartLine> {
        self.cart
            .line_at(position)
            .ok_or_else(|| AppError::not_found("Cart line", &position.to_string()))
    }

    /// Looks in the last listing first, then asks the catalog.
    async fn find_book(&self, id: &str) -> AppResult<Book> {
        let id = BookId::new(id.trim());
        if let Some(book) = self.listing.iter().find(|b| b.identity() == Some(&id)) {
            return Ok(book.clone());
        }
        if !id.is_numeric() {
            return Err(AppError::not_found("Book", id.as_str()));
        }
        Ok(self.catalog.get_book(&id).await?)
    }

    async fn load_featured(&mut self) {
        match self.catalog.list_books().await {
            Ok(books) => {
                self.carousel = featured(&books);
                self.listing = books;
            }
            Err(e) => warn!(error = %e, "Starting without featured books"),
        }
    }

    fn show_featured<W: Write>(&self, out: &mut W) -> AppResult<()> {
        let Some(id) = self.carousel.current() else {
            return Ok(());
        };
        if let Some(book) = self.listing.iter().find(|b| b.identity() == Some(id)) {
            writeln!(
                out,
                "Featured ({}/{}): {} by {} ({}) - show {}",
                self.carousel.position() + 1,
                self.carousel.len(),
                book.title,
                book.author,
                book.year,
                id
            )?;
        }
        Ok(())
    }
}

fn featured(books: &[Book]) -> Carousel {
    Carousel::new(books.iter().filter_map(|b| b.identity().cloned()))
}
