//! End-to-end tests for the catalog client and session loading

use axum::routing::get;
use axum::{Json, Router};

use lector::catalog::CatalogClient;
use lector::reader::{ReaderSession, Rendition, RenditionError};

struct NoopRendition;

impl Rendition for NoopRendition {
    fn display(&mut self, _location: &str) -> Result<(), RenditionError> {
        Ok(())
    }

    fn mark_highlight(&mut self, _cfi_range: &str, _color: &str) -> Result<(), RenditionError> {
        Ok(())
    }

    fn clear_highlight(&mut self, _cfi_range: &str) -> Result<(), RenditionError> {
        Ok(())
    }
}

/// Stand-in for Gutendex: one page with two well-known books.
async fn spawn_catalog() -> String {
    let app = Router::new().route(
        "/books/",
        get(|| async {
            Json(serde_json::json!({
                "count": 2,
                "next": null,
                "previous": null,
                "results": [
                    {
                        "id": 84,
                        "title": "Frankenstein; Or, The Modern Prometheus",
                        "authors": [
                            {"name": "Shelley, Mary Wollstonecraft", "birth_year": 1797}
                        ],
                        "download_count": 104393
                    },
                    {
                        "id": 2701,
                        "title": "Moby Dick; Or, The Whale",
                        "authors": [{"name": "Melville, Herman"}]
                    }
                ]
            }))
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn fetch_books_decodes_the_catalog_page() {
    let base = spawn_catalog().await;
    let client = CatalogClient::new(reqwest::Client::new(), base.as_str());

    let books = client.fetch_books().await.unwrap();

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].id, 84);
    assert_eq!(
        books[0].label(),
        "Frankenstein; Or, The Modern Prometheus by Shelley, Mary Wollstonecraft"
    );
}

#[tokio::test]
async fn a_session_loads_the_catalog_and_selects_a_book() {
    let base = spawn_catalog().await;
    let client = CatalogClient::new(reqwest::Client::new(), base.as_str());

    let mut session: ReaderSession<NoopRendition> = ReaderSession::new();
    session.load_catalog(&client).await;

    assert!(session.error().is_none());
    assert_eq!(session.books().len(), 2);

    let url = session.select_book(1).map(str::to_string);
    assert_eq!(
        url.as_deref(),
        Some("https://www.gutenberg.org/cache/epub/2701/pg2701.epub")
    );
    assert!(session.is_loading());
}

#[tokio::test]
async fn a_dead_catalog_sets_the_user_visible_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = CatalogClient::new(
        reqwest::Client::new(),
        format!("http://127.0.0.1:{}", port),
    );
    let mut session: ReaderSession<NoopRendition> = ReaderSession::new();
    session.load_catalog(&client).await;

    assert_eq!(
        session.error(),
        Some("Failed to fetch books. Please try again later.")
    );
    assert!(session.books().is_empty());
}
