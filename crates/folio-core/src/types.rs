//! # Domain Types
//!
//! Catalog records as served by the remote `/books` collection.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                         │
//! │  │      Book       │ 1    * │     Edition     │                         │
//! │  │  ─────────────  │───────►│  ─────────────  │                         │
//! │  │  id (optional)  │        │  edition (name) │                         │
//! │  │  title, author  │        │  price (Money)  │                         │
//! │  │  genre, year    │        │  currency       │                         │
//! │  │  imageUrl       │        │  inStock        │                         │
//! │  └─────────────────┘        └─────────────────┘                         │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │    BookDraft    │  Form payload for POST /books (no identity yet)    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! The mock API hands out ids as strings (`"12"`) but echoes numbers back
//! when a client posts one. [`BookId`] accepts both and keeps a string.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Book Id
// =============================================================================

/// Server-assigned book identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        BookId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty id is treated as no identity at all.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Detail pages only accept numeric ids; anything else is a 404.
    pub fn is_numeric(&self) -> bool {
        !self.0.is_empty() && self.0.chars().all(|c| c.is_ascii_digit())
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        BookId::new(id)
    }
}

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        BookId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            // A numeric zero is as good as no id.
            RawId::Number(0) => BookId(String::new()),
            RawId::Number(n) => BookId(n.to_string()),
            RawId::Text(s) => BookId(s),
        })
    }
}

// =============================================================================
// Currency
// =============================================================================

/// Currency of an edition price.
///
/// The storefront form offers MDL, USD and EUR. Records created elsewhere
/// may carry other codes; those are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    /// Moldovan leu.
    #[default]
    Mdl,
    Usd,
    Eur,
    Other(String),
}

impl Currency {
    pub fn code(&self) -> &str {
        match self {
            Currency::Mdl => "MDL",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Other(code) => code,
        }
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        match code.trim().to_uppercase().as_str() {
            "MDL" => Currency::Mdl,
            "USD" => Currency::Usd,
            "EUR" => Currency::Eur,
            _ => Currency::Other(code),
        }
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Edition
// =============================================================================

/// A purchasable variant of a book (format or printing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edition {
    /// Edition name, unique within its book ("Hardcover", "Paperback").
    #[serde(default)]
    pub edition: String,

    #[serde(default)]
    pub price: Money,

    #[serde(default)]
    pub currency: Currency,

    #[serde(default)]
    pub in_stock: bool,
}

impl Edition {
    pub fn new(name: impl Into<String>, price: Money, currency: Currency, in_stock: bool) -> Self {
        Edition {
            edition: name.into(),
            price,
            currency,
            in_stock,
        }
    }

    /// A fresh form row: no name, zero price, MDL, in stock.
    pub fn blank() -> Self {
        Edition::new("", Money::zero(), Currency::default(), true)
    }
}

// =============================================================================
// Book
// =============================================================================

/// A book record from the catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    /// Server identity. `None` only for values that never came from the
    /// catalog; the cart ignores such books.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<BookId>,

    pub title: String,
    pub author: String,
    pub genre: String,
    pub language: String,
    #[serde(deserialize_with = "lenient_year::required")]
    pub year: i32,
    pub image_url: String,
    pub editions: Vec<Edition>,
}

impl Book {
    /// Returns the id when it is present and non-empty.
    pub fn identity(&self) -> Option<&BookId> {
        self.id.as_ref().filter(|id| !id.is_empty())
    }

    /// Looks up an edition by name.
    pub fn edition(&self, name: &str) -> Option<&Edition> {
        self.editions.iter().find(|e| e.edition == name)
    }

    /// The edition a detail page preselects: the first one in stock.
    pub fn first_in_stock(&self) -> Option<&Edition> {
        self.editions.iter().find(|e| e.in_stock)
    }
}

// =============================================================================
// Book Draft
// =============================================================================

/// The "add a book" form, before the catalog assigns an identity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub language: String,
    #[serde(deserialize_with = "lenient_year::optional")]
    pub year: Option<i32>,
    pub image_url: String,
    pub editions: Vec<Edition>,
}

impl BookDraft {
    /// An empty form; the year field starts at the current year.
    pub fn new(current_year: i32) -> Self {
        BookDraft {
            year: Some(current_year),
            ..BookDraft::default()
        }
    }

    /// Appends a blank edition row.
    pub fn add_edition(&mut self) -> &mut Edition {
        self.editions.push(Edition::blank());
        let last = self.editions.len() - 1;
        &mut self.editions[last]
    }

    /// Removes the edition row at `index`, if any.
    pub fn remove_edition(&mut self, index: usize) -> Option<Edition> {
        (index < self.editions.len()).then(|| self.editions.remove(index))
    }

    /// Builds the record posted to the catalog.
    pub fn into_book(self, id: Option<BookId>) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            genre: self.genre,
            language: self.language,
            year: self.year.unwrap_or_default(),
            image_url: self.image_url,
            editions: self.editions,
        }
    }
}

// =============================================================================
// Year Parsing
// =============================================================================

/// Years posted from a number input arrive as strings (`"1967"`).
mod lenient_year {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Number(i32),
        Text(String),
    }

    pub fn optional<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
        match Option::<RawYear>::deserialize(deserializer)? {
            None => Ok(None),
            Some(RawYear::Number(year)) => Ok(Some(year)),
            Some(RawYear::Text(text)) if text.trim().is_empty() => Ok(None),
            Some(RawYear::Text(text)) => text
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid year: '{}'", text))),
        }
    }

    pub fn required<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        optional(deserializer).map(Option::unwrap_or_default)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
