//! In-memory store for the open book's annotations
//!
//! The list lives only for the session: it is discarded wholesale when a
//! different book is selected and is never persisted.

use super::types::Annotation;

/// Ordered list of the reader's highlights, keyed by their CFI range.
#[derive(Debug, Default)]
pub struct AnnotationStore {
    entries: Vec<Annotation>,
}

impl AnnotationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a highlight and return the stored record.
    ///
    /// A record over an identical range replaces the stored one, and the
    /// replacement counts as a new creation, so it moves to the end of the
    /// list. A missing range or missing text makes the call a silent no-op
    /// returning `None`; the comment may be empty.
    pub fn add(
        &mut self,
        cfi_range: &str,
        text: &str,
        comment: &str,
        color: &str,
    ) -> Option<&Annotation> {
        if cfi_range.is_empty() || text.is_empty() {
            tracing::debug!("ignoring highlight with missing range or text");
            return None;
        }

        self.entries.retain(|a| a.cfi_range != cfi_range);
        self.entries
            .push(Annotation::new(cfi_range, text, comment, color));
        self.entries.last()
    }

    /// Remove the record matching the range. Returns whether one existed.
    pub fn remove(&mut self, cfi_range: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|a| a.cfi_range != cfi_range);
        self.entries.len() < before
    }

    /// Look up a record by its range.
    pub fn get(&self, cfi_range: &str) -> Option<&Annotation> {
        self.entries.iter().find(|a| a.cfi_range == cfi_range)
    }

    /// Read-only snapshot in creation order.
    pub fn list(&self) -> &[Annotation] {
        &self.entries
    }

    /// Discard every record (book change).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the store holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
