//! # Book Submission
//!
//! The "add a book" form as a file: read a draft, validate every field,
//! and only then post it to the catalog.

use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use folio_catalog::Catalog;
use folio_core::validation::validate_book_draft;
use folio_core::{Book, BookDraft, CoreError};

use crate::error::{AppError, AppResult};
use crate::render;

/// Reads a draft from a `.toml` file, or JSON for any other extension.
pub fn read_draft(path: &Path) -> AppResult<BookDraft> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        AppError::validation(format!("Cannot read draft file {}: {}", path.display(), e))
    })?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let parsed = if is_toml {
        toml::from_str(&contents).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&contents).map_err(|e| e.to_string())
    };

    parsed.map_err(|e| AppError::validation(format!("Invalid draft file {}: {}", path.display(), e)))
}

/// Validates `draft` against `current_year` and creates it.
///
/// An invalid draft renders one line per failing field and never reaches
/// the catalog.
pub async fn submit_draft<C, W>(
    catalog: &C,
    draft: BookDraft,
    current_year: i32,
    out: &mut W,
) -> AppResult<Book>
where
    C: Catalog + ?Sized,
    W: Write,
{
    if let Err(errors) = validate_book_draft(&draft, current_year) {
        warn!(fields = errors.len(), title = %draft.title, "Book form rejected");
        render::form_errors(out, &errors)?;
        return Err(CoreError::InvalidBook(errors).into());
    }

    let book = catalog.create_book(draft).await?;
    info!(book_id = ?book.id, "Book submitted");

    writeln!(out, "Book added to the catalog.")?;
    render::book_detail(out, &book)?;
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::FakeCatalog;
    use crate::error::ErrorCode;
    use folio_core::{Currency, Edition, Money};
    use std::io::Write as _;

    fn valid_draft() -> BookDraft {
        BookDraft {
            title: "Solaris".to_string(),
            author: "Stanisław Lem".to_string(),
            genre: "Science fiction".to_string(),
            language: "Polish".to_string(),
            year: Some(1961),
            image_url: "https://example.com/solaris.jpg".to_string(),
            editions: vec![Edition::new("Hardcover", Money::from_minor(3450), Currency::Eur, true)],
        }
    }

    #[tokio::test]
    async fn test_valid_draft_is_created() {
        let catalog = FakeCatalog::default();
        let mut out = Vec::new();

        let book = submit_draft(&catalog, valid_draft(), 2026, &mut out).await.unwrap();

        assert_eq!(book.identity().map(|id| id.as_str()), Some("100"));
        assert_eq!(catalog.created.lock().unwrap().len(), 1);
        assert!(String::from_utf8(out).unwrap().contains("Solaris (#100)"));
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_catalog() {
        let catalog = FakeCatalog::default();
        let mut draft = valid_draft();
        draft.title.clear();
        draft.editions[0].price = Money::zero();
        let mut out = Vec::new();

        let err = submit_draft(&catalog, draft, 2026, &mut out).await.unwrap_err();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Book form has 2 invalid field(s)");
        assert!(text.contains("title: Title is required"));
        assert!(text.contains("price-0: Price must be greater than 0"));
        assert!(catalog.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_failure_is_reported() {
        let catalog = FakeCatalog::offline();
        let err = submit_draft(&catalog, valid_draft(), 2026, &mut Vec::new())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogUnavailable);
    }

    #[test]
    fn test_read_draft_from_toml_and_json() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("book.toml");
        let mut file = std::fs::File::create(&toml_path).unwrap();
        writeln!(
            file,
            r#"title = "Solaris"
year = "1961"
imageUrl = "https://example.com/solaris.jpg"

[[editions]]
edition = "Hardcover"
price = "34.50"
currency = "EUR"
inStock = true"#
        )
        .unwrap();

        let draft = read_draft(&toml_path).unwrap();
        assert_eq!(draft.title, "Solaris");
        assert_eq!(draft.year, Some(1961));
        assert_eq!(draft.editions[0].price.minor(), 3450);
        assert_eq!(draft.editions[0].currency, Currency::Eur);

        let json_path = dir.path().join("book.json");
        std::fs::write(&json_path, r#"{"title": "Ion", "year": 1920, "editions": []}"#).unwrap();
        let draft = read_draft(&json_path).unwrap();
        assert_eq!(draft.title, "Ion");
        assert!(draft.editions.is_empty());
    }

    #[test]
    fn test_read_draft_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert_eq!(read_draft(&missing).unwrap_err().code, ErrorCode::ValidationError);

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        let err = read_draft(&broken).unwrap_err();
        assert!(err.message.starts_with("Invalid draft file"));
    }
}
