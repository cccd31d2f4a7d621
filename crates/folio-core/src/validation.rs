//! # Validation Module
//!
//! Client-side validation of the "add a book" form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Book Form Validation                               │
//! │                                                                         │
//! │  BookDraft                                                              │
//! │     │                                                                   │
//! │     ├── title, author, genre, language, imageUrl ── non-blank           │
//! │     ├── year ──────────────────────────────────── present, not future   │
//! │     └── editions ──────────────────────────────── at least one          │
//! │            └── each: name non-blank, price > 0                          │
//! │                                                                         │
//! │  Every rule runs; failures are collected per field key:                 │
//! │     { "title": "Title is required", "price-0": "Price must be ..." }    │
//! │                                                                         │
//! │  Submission is blocked while the map is non-empty.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use folio_core::types::BookDraft;
//! use folio_core::validation::validate_book_draft;
//!
//! let draft = BookDraft::new(2026);
//! let errors = validate_book_draft(&draft, 2026).unwrap_err();
//! assert_eq!(errors.get("title"), Some("Title is required".to_string()));
//! assert_eq!(errors.get("editions"), Some("Add at least one edition".to_string()));
//! ```

use chrono::Datelike;
use serde::ser::SerializeMap;
use serde::Serialize;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::BookDraft;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Form Errors
// =============================================================================

/// Field key → failure, in form order.
///
/// Inserting a key twice keeps the position of the first insert and the
/// error of the last, so a later, more specific rule wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    entries: Vec<(String, ValidationError)>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, error: ValidationError) {
        let field = field.into();
        match self.entries.iter_mut().find(|(key, _)| *key == field) {
            Some(entry) => entry.1 = error,
            None => self.entries.push((field, error)),
        }
    }

    /// The human-readable message for a field, if it failed.
    pub fn get(&self, field: &str) -> Option<String> {
        self.error(field).map(ToString::to_string)
    }

    pub fn error(&self, field: &str) -> Option<&ValidationError> {
        self.entries
            .iter()
            .find(|(key, _)| key == field)
            .map(|(_, error)| error)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.error(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates `(field, error)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.entries.iter().map(|(key, error)| (key.as_str(), error))
    }
}

/// Serialized as a JSON object of field → message.
impl Serialize for FormErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, error) in &self.entries {
            map.serialize_entry(key, &error.to_string())?;
        }
        map.end()
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// A text field that must not be blank.
pub fn validate_required(value: &str, label: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(label));
    }
    Ok(())
}

/// Publication year: present, non-zero and not after `current_year`.
pub fn validate_year(year: Option<i32>, current_year: i32) -> ValidationResult<()> {
    match year {
        None | Some(0) => Err(ValidationError::required("Year")),
        Some(year) if year > current_year => {
            Err(ValidationError::YearInFuture { year, current_year })
        }
        Some(_) => Ok(()),
    }
}

/// Edition prices must be strictly positive.
///
/// ```rust
/// use folio_core::money::Money;
/// use folio_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_minor(1250)).is_ok());
/// assert!(validate_price(Money::zero()).is_err());
/// assert!(validate_price(Money::from_minor(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::must_be_positive("Price"));
    }
    Ok(())
}

// =============================================================================
// Form Validator
// =============================================================================

/// Runs every rule of the book form against `draft`.
///
/// ## Field Keys
/// `title`, `author`, `genre`, `language`, `year`, `imageUrl`, `editions`,
/// and per edition row `edition-{i}` (name) and `price-{i}`.
pub fn validate_book_draft(draft: &BookDraft, current_year: i32) -> Result<(), FormErrors> {
    let mut errors = FormErrors::new();

    let text_fields = [
        ("title", draft.title.as_str(), "Title"),
        ("author", draft.author.as_str(), "Author"),
        ("genre", draft.genre.as_str(), "Genre"),
        ("language", draft.language.as_str(), "Language"),
    ];
    for (key, value, label) in text_fields {
        if let Err(e) = validate_required(value, label) {
            errors.insert(key, e);
        }
    }

    if let Err(e) = validate_year(draft.year, current_year) {
        errors.insert("year", e);
    }

    if let Err(e) = validate_required(&draft.image_url, "Image URL") {
        errors.insert("imageUrl", e);
    }

    if draft.editions.is_empty() {
        errors.insert(
            "editions",
            ValidationError::AtLeastOne {
                item: "edition".to_string(),
            },
        );
    }

    for (index, edition) in draft.editions.iter().enumerate() {
        if let Err(e) = validate_required(&edition.edition, "Edition name") {
            errors.insert(format!("edition-{}", index), e);
        }
        if let Err(e) = validate_price(edition.price) {
            errors.insert(format!("price-{}", index), e);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// [`validate_book_draft`] against the current UTC year.
pub fn validate_book_draft_now(draft: &BookDraft) -> Result<(), FormErrors> {
    validate_book_draft(draft, chrono::Utc::now().year())
}

// =============================================================================
// Unit Tests
// =============================================================================
