//! Reader session state and its entry points
//!
//! One `ReaderSession` owns everything the UI renders for one reader tab:
//! the catalog list, the open book, loading/error indicators, the active
//! highlight color, the pending selection and the annotation store. All
//! mutation goes through named methods on the session; the host never
//! touches the fields directly.

use crate::annotations::{AnnotationStore, DEFAULT_COLOR};
use crate::catalog::{epub_url, Book, CatalogClient, CatalogError, DEFAULT_CONTENT_BASE_URL};

use super::rendition::{Anchor, Rendition};

/// Shown when the catalog list cannot be fetched.
pub const CATALOG_FETCH_ERROR: &str = "Failed to fetch books. Please try again later.";

/// Shown when the engine cannot load or render the selected book.
pub const BOOK_LOAD_ERROR: &str =
    "An error occurred while loading the book. Please try again later.";

/// A completed text selection waiting for the user to confirm or dismiss.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSelection {
    pub cfi_range: String,
    pub text: String,
    pub anchor: Anchor,
}

/// State of one reader tab, generic over the engine handle.
#[derive(Debug)]
pub struct ReaderSession<R: Rendition> {
    pub(super) content_base_url: String,
    pub(super) books: Vec<Book>,
    pub(super) selected: Option<usize>,
    pub(super) epub_url: Option<String>,
    pub(super) location: Option<String>,
    pub(super) loading: bool,
    pub(super) error: Option<String>,
    pub(super) highlight_color: String,
    pub(super) pending: Option<PendingSelection>,
    pub(super) annotations: AnnotationStore,
    pub(super) rendition: Option<R>,
}

impl<R: Rendition> ReaderSession<R> {
    /// Session against the public Gutenberg content host.
    pub fn new() -> Self {
        Self::with_content_base(DEFAULT_CONTENT_BASE_URL)
    }

    pub fn with_content_base(content_base_url: impl Into<String>) -> Self {
        Self {
            content_base_url: content_base_url.into(),
            books: Vec::new(),
            selected: None,
            epub_url: None,
            location: None,
            loading: false,
            error: None,
            highlight_color: DEFAULT_COLOR.to_string(),
            pending: None,
            annotations: AnnotationStore::new(),
            rendition: None,
        }
    }

    /// Fetch the catalog list and apply the outcome.
    pub async fn load_catalog(&mut self, client: &CatalogClient) {
        let result = client.fetch_books().await;
        self.apply_catalog(result);
    }

    /// Apply a catalog fetch outcome, however the host obtained it.
    pub fn apply_catalog(&mut self, result: Result<Vec<Book>, CatalogError>) {
        match result {
            Ok(books) => {
                tracing::debug!(count = books.len(), "book list applied");
                self.books = books;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch books");
                self.error = Some(CATALOG_FETCH_ERROR.to_string());
            }
        }
    }

    /// Open the book at `index` in the current list.
    ///
    /// Discards the previous book's annotations and pending selection, drops
    /// the rendition handle (unhooking its engine callbacks), raises the
    /// loading flag and returns the EPUB download URL for the host to hand
    /// to the engine. Out-of-range indexes leave the session untouched.
    pub fn select_book(&mut self, index: usize) -> Option<&str> {
        let book = self.books.get(index)?;
        let id = book.id;
        let title = book.title.clone();

        self.annotations.clear();
        self.rendition = None;
        self.pending = None;
        self.selected = Some(index);
        self.loading = true;
        self.epub_url = Some(epub_url(&self.content_base_url, id));

        tracing::info!(book_id = id, title = %title, "book selected");
        self.epub_url.as_deref()
    }

    /// Hand over the live engine handle for the open book.
    pub fn attach_rendition(&mut self, rendition: R) {
        self.rendition = Some(rendition);
    }

    /// Reclaim the engine handle, if one is attached.
    pub fn detach_rendition(&mut self) -> Option<R> {
        self.rendition.take()
    }

    /// Choose the color newly saved highlights are drawn in.
    pub fn set_highlight_color(&mut self, color: impl Into<String>) {
        self.highlight_color = color.into();
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.books.get(self.selected?)
    }

    pub fn epub_url(&self) -> Option<&str> {
        self.epub_url.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn highlight_color(&self) -> &str {
        &self.highlight_color
    }

    pub fn pending_selection(&self) -> Option<&PendingSelection> {
        self.pending.as_ref()
    }

    pub fn annotations(&self) -> &AnnotationStore {
        &self.annotations
    }

    pub fn has_rendition(&self) -> bool {
        self.rendition.is_some()
    }
}

impl<R: Rendition> Default for ReaderSession<R> {
    fn default() -> Self {
        Self::new()
    }
}
