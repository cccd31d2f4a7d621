//! HTTP tests against a local catalog server.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use folio_catalog::{Catalog, CatalogConfig, CatalogError, HttpCatalog};
use folio_core::{BookDraft, BookId, Currency, Edition, Money};

#[derive(Clone, Default)]
struct ServerState {
    posted: Arc<Mutex<Vec<Value>>>,
}

fn catalog_json() -> Value {
    json!([
        {
            "id": "1",
            "title": "Ion",
            "author": "Liviu Rebreanu",
            "genre": "Novel",
            "language": "Romanian",
            "year": 1920,
            "imageUrl": "https://example.com/ion.jpg",
            "editions": [
                { "edition": "Hardcover", "price": 250, "currency": "MDL", "inStock": false },
                { "edition": "Paperback", "price": 99.9, "currency": "MDL", "inStock": true }
            ]
        },
        {
            "id": 2,
            "title": "Dune",
            "author": "Frank Herbert",
            "genre": "Science fiction",
            "language": "English",
            "year": "1965",
            "imageUrl": "https://example.com/dune.jpg",
            "editions": [
                { "edition": "Paperback", "price": "12.5", "currency": "USD", "inStock": true }
            ]
        }
    ])
}

async fn list_books() -> Json<Value> {
    Json(catalog_json())
}

async fn get_book(Path(id): Path<String>) -> Result<Json<Value>, (StatusCode, &'static str)> {
    catalog_json()
        .as_array()
        .and_then(|books| books.iter().find(|b| b["id"].to_string().trim_matches('"') == id))
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "\"Not found\""))
}

async fn create_book(
    State(state): State<ServerState>,
    Json(mut body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.posted.lock().unwrap().push(body.clone());
    body["id"] = json!("51");
    (StatusCode::CREATED, Json(body))
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn garbled() -> &'static str {
    "<html>maintenance</html>"
}

async fn spawn_server() -> (String, ServerState) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = ServerState::default();
    let app = Router::new()
        .route("/api/books", get(list_books).post(create_book))
        .route("/api/books/{id}", get(get_book))
        .route("/down/books", get(broken).post(broken))
        .route("/down/books/{id}", get(broken))
        .route("/garbled/books", get(garbled))
        .with_state(state.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), state)
}

fn catalog_at(base: &str) -> HttpCatalog {
    HttpCatalog::new(&CatalogConfig::with_base_url(base)).unwrap()
}

fn valid_draft() -> BookDraft {
    BookDraft {
        title: "Solaris".to_string(),
        author: "Stanisław Lem".to_string(),
        genre: "Science fiction".to_string(),
        language: "Polish".to_string(),
        year: Some(1961),
        image_url: "https://example.com/solaris.jpg".to_string(),
        editions: vec![Edition::new(
            "Hardcover",
            Money::from_minor(3450),
            Currency::Eur,
            true,
        )],
    }
}

#[tokio::test]
async fn test_list_books_decodes_catalog() {
    let (base, _) = spawn_server().await;
    let books = catalog_at(&format!("{base}/api")).list_books().await.unwrap();

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].title, "Ion");
    assert_eq!(books[0].editions[1].price.minor(), 9990);
    assert!(!books[0].editions[0].in_stock);

    assert_eq!(books[1].identity(), Some(&BookId::new("2")));
    assert_eq!(books[1].year, 1965);
    assert_eq!(books[1].editions[0].currency, Currency::Usd);
}

#[tokio::test]
async fn test_get_book_by_id() {
    let (base, _) = spawn_server().await;
    let book = catalog_at(&format!("{base}/api/"))
        .get_book(&BookId::new("1"))
        .await
        .unwrap();

    assert_eq!(book.author, "Liviu Rebreanu");
    assert_eq!(book.first_in_stock().map(|e| e.edition.as_str()), Some("Paperback"));
}

#[tokio::test]
async fn test_missing_book_is_not_found() {
    let (base, _) = spawn_server().await;
    let err = catalog_at(&format!("{base}/api"))
        .get_book(&BookId::new("999"))
        .await
        .unwrap_err();

    match err {
        CatalogError::NotFound { id } => assert_eq!(id.as_str(), "999"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_book_posts_book_shape() {
    let (base, state) = spawn_server().await;
    let created = catalog_at(&format!("{base}/api"))
        .create_book(valid_draft())
        .await
        .unwrap();

    assert_eq!(created.identity(), Some(&BookId::new("51")));
    assert_eq!(created.title, "Solaris");

    let posted = state.posted.lock().unwrap();
    assert_eq!(posted.len(), 1);
    let body = &posted[0];
    assert!(body["id"].as_str().unwrap().chars().all(|c| c.is_ascii_digit()));
    assert_eq!(body["imageUrl"], "https://example.com/solaris.jpg");
    assert_eq!(body["year"], 1961);
    assert_eq!(body["editions"][0]["price"], 34.5);
    assert_eq!(body["editions"][0]["currency"], "EUR");
    assert_eq!(body["editions"][0]["inStock"], true);
}

#[tokio::test]
async fn test_server_error_is_unexpected_status() {
    let (base, _) = spawn_server().await;
    let catalog = catalog_at(&format!("{base}/down"));

    let err = catalog.list_books().await.unwrap_err();
    assert!(matches!(err, CatalogError::UnexpectedStatus { status: 500 }));

    // Only a 404 means "no such book".
    let err = catalog.get_book(&BookId::new("1")).await.unwrap_err();
    assert!(matches!(err, CatalogError::UnexpectedStatus { status: 500 }));

    let err = catalog.create_book(valid_draft()).await.unwrap_err();
    assert!(matches!(err, CatalogError::UnexpectedStatus { status: 500 }));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let (base, _) = spawn_server().await;
    let err = catalog_at(&format!("{base}/garbled"))
        .list_books()
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_catalog_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = catalog_at(&format!("http://{addr}/api"))
        .list_books()
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Network(_)));
}
