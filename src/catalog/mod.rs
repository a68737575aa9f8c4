//! Project Gutenberg catalog access
//!
//! One-page Gutendex client plus the URL builders for fetching a book's
//! EPUB, either straight from the content host or through the delivery
//! proxy.

mod client;
mod types;

pub use client::{
    epub_url, proxied_url, CatalogClient, CatalogError, DEFAULT_CATALOG_BASE_URL,
    DEFAULT_CONTENT_BASE_URL,
};
pub use types::{Author, Book, CatalogPage};
