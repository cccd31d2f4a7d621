//! # Catalog Client
//!
//! The three requests the storefront makes, behind the [`Catalog`] trait.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  list_books()   ──► GET  {base}/books       ──► 2xx ──► Vec<Book>       │
//! │  get_book(id)   ──► GET  {base}/books/{id}  ──► 2xx ──► Book            │
//! │                                             ──► 404 ──► NotFound        │
//! │  create_book(d) ──► POST {base}/books       ──► 2xx ──► Book (echoed)   │
//! │                                                                         │
//! │  any other status ─────────────────────────────────► UnexpectedStatus   │
//! │  connection/DNS/timeout ───────────────────────────► Network            │
//! │  body not a Book ──────────────────────────────────► Decode             │
//! │                                                                         │
//! │  Every failure is logged once here, then returned. No retries.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};
use url::Url;

use folio_core::{Book, BookDraft, BookId};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Catalog Trait
// =============================================================================

/// Read and create access to the book catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Every book in the catalog, in server order.
    async fn list_books(&self) -> CatalogResult<Vec<Book>>;

    /// One book by id.
    async fn get_book(&self, id: &BookId) -> CatalogResult<Book>;

    /// Posts a new book and returns the record the catalog stored.
    async fn create_book(&self, draft: BookDraft) -> CatalogResult<Book>;
}

// =============================================================================
// HTTP Catalog
// =============================================================================

/// [`Catalog`] over the REST API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: Url,
}

impl HttpCatalog {
    /// Validates `config` and builds the underlying HTTP client.
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        let base_url = config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!(base_url = %base_url, "Catalog client ready");
        Ok(Self { client, base_url })
    }

    /// `{base}/books[/{id}]`, tolerant of a trailing slash on the base.
    fn books_url(&self, id: Option<&BookId>) -> CatalogResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| CatalogError::InvalidUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push("books");
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }

    async fn fetch_all(&self) -> CatalogResult<Vec<Book>> {
        let url = self.books_url(None)?;
        debug!(%url, "GET books");

        let response = self.client.get(url).send().await?;
        decode(ensure_success(response, None)?).await
    }

    async fn fetch_one(&self, id: &BookId) -> CatalogResult<Book> {
        let url = self.books_url(Some(id))?;
        debug!(%url, "GET book");

        let response = self.client.get(url).send().await?;
        decode(ensure_success(response, Some(id))?).await
    }

    async fn post(&self, book: &Book) -> CatalogResult<Book> {
        let url = self.books_url(None)?;
        debug!(%url, title = %book.title, "POST book");

        let response = self.client.post(url).json(book).send().await?;
        decode(ensure_success(response, None)?).await
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn list_books(&self) -> CatalogResult<Vec<Book>> {
        let books = self
            .fetch_all()
            .await
            .inspect_err(|e| error!(error = %e, "Failed to load books"))?;

        debug!(count = books.len(), "Loaded books");
        Ok(books)
    }

    async fn get_book(&self, id: &BookId) -> CatalogResult<Book> {
        self.fetch_one(id)
            .await
            .inspect_err(|e| error!(book_id = %id, error = %e, "Failed to load book"))
    }

    async fn create_book(&self, draft: BookDraft) -> CatalogResult<Book> {
        let book = draft.into_book(Some(provisional_id()));

        let created = self
            .post(&book)
            .await
            .inspect_err(|e| error!(title = %book.title, error = %e, "Failed to create book"))?;

        info!(book_id = ?created.id, title = %created.title, "Book created");
        Ok(created)
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Identity stamped on new books before the catalog assigns its own:
/// the current Unix time in milliseconds.
pub fn provisional_id() -> BookId {
    BookId::from(Utc::now().timestamp_millis())
}

fn ensure_success(response: Response, id: Option<&BookId>) -> CatalogResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => Err(CatalogError::NotFound { id: id.clone() }),
        _ => Err(CatalogError::UnexpectedStatus {
            status: status.as_u16(),
        }),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> CatalogResult<T> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
