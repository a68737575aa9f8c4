//! HTTP client for the public book catalog

use reqwest::Client;
use thiserror::Error;

use super::types::{Book, CatalogPage};

/// Public Gutendex instance.
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://gutendex.com";

/// Project Gutenberg file host the EPUBs are served from.
pub const DEFAULT_CONTENT_BASE_URL: &str = "https://www.gutenberg.org";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("catalog response did not decode: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Thin client for `GET {base}/books/`.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Client against the public instance with a fresh connection pool.
    pub fn with_defaults() -> Self {
        Self::new(Client::new(), DEFAULT_CATALOG_BASE_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the first catalog page. Non-2xx responses and transport
    /// failures surface as [`CatalogError::Request`], malformed bodies as
    /// [`CatalogError::Decode`].
    pub async fn fetch_books(&self) -> Result<Vec<Book>, CatalogError> {
        let url = format!("{}/books/", self.base_url.trim_end_matches('/'));
        tracing::debug!(%url, "fetching book catalog");

        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let page: CatalogPage = serde_json::from_str(&body)?;

        tracing::debug!(count = page.results.len(), "catalog page decoded");
        Ok(page.results)
    }
}

/// Download URL for a book in the Gutenberg cache layout,
/// e.g. `https://www.gutenberg.org/cache/epub/84/pg84.epub`.
pub fn epub_url(content_base: &str, book_id: u64) -> String {
    format!(
        "{}/cache/epub/{id}/pg{id}.epub",
        content_base.trim_end_matches('/'),
        id = book_id
    )
}

/// Same download routed through the delivery proxy, with the upstream URL
/// percent-encoded into the query string.
pub fn proxied_url(proxy_base: &str, upstream: &str) -> String {
    format!(
        "{}/proxy-epub?url={}",
        proxy_base.trim_end_matches('/'),
        urlencoding::encode(upstream)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epub_url_follows_the_gutenberg_cache_layout() {
        assert_eq!(
            epub_url(DEFAULT_CONTENT_BASE_URL, 84),
            "https://www.gutenberg.org/cache/epub/84/pg84.epub"
        );
    }

    #[test]
    fn epub_url_tolerates_a_trailing_slash() {
        assert_eq!(
            epub_url("https://mirror.example/", 2701),
            "https://mirror.example/cache/epub/2701/pg2701.epub"
        );
    }

    #[test]
    fn proxied_url_percent_encodes_the_upstream() {
        assert_eq!(
            proxied_url(
                "http://localhost:3001",
                "https://www.gutenberg.org/cache/epub/84/pg84.epub"
            ),
            "http://localhost:3001/proxy-epub?url=https%3A%2F%2Fwww.gutenberg.org%2Fcache%2Fepub%2F84%2Fpg84.epub"
        );
    }

    #[test]
    fn malformed_bodies_map_to_the_decode_variant() {
        let err = serde_json::from_str::<CatalogPage>("{").unwrap_err();
        assert!(matches!(CatalogError::from(err), CatalogError::Decode(_)));
    }
}
