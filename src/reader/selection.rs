//! Bridging engine events to annotation and rendition commands

use crate::annotations::Annotation;

use super::rendition::{Rendition, RenditionError, RenditionEvent};
use super::session::{PendingSelection, ReaderSession, BOOK_LOAD_ERROR};

impl<R: Rendition> ReaderSession<R> {
    /// Apply one engine event to the session.
    ///
    /// `Selected` text is trimmed first; a selection that trims away to
    /// nothing is dropped without touching the pending state.
    pub fn handle_event(&mut self, event: RenditionEvent) {
        match event {
            RenditionEvent::Started => {
                self.loading = false;
            }
            RenditionEvent::Relocated { location } => {
                self.location = Some(location);
            }
            RenditionEvent::Selected {
                cfi_range,
                text,
                rect,
            } => {
                let text = text.trim();
                if text.is_empty() {
                    return;
                }
                self.pending = Some(PendingSelection {
                    cfi_range,
                    text: text.to_string(),
                    anchor: rect.picker_anchor(),
                });
            }
            RenditionEvent::Failed { message } => {
                tracing::error!(%message, "rendering engine reported a failure");
                self.error = Some(BOOK_LOAD_ERROR.to_string());
                self.loading = false;
            }
        }
    }

    /// Confirm the pending selection as a highlight in the active color.
    ///
    /// Needs a pending selection with a range and a non-empty comment;
    /// otherwise the session stays untouched and `None` comes back. The mark
    /// over the range is cleared and redrawn so a re-highlight never stacks.
    /// An engine failure while redrawing sets the book-load error, but the
    /// record is stored regardless.
    pub fn save_highlight(&mut self, comment: &str) -> Option<&Annotation> {
        let pending = match self.pending.take() {
            Some(p) if !comment.is_empty() && !p.cfi_range.is_empty() => p,
            other => {
                self.pending = other;
                return None;
            }
        };

        let mut engine_err = None;
        if let Some(rendition) = self.rendition.as_mut() {
            if let Err(err) = rendition.clear_highlight(&pending.cfi_range) {
                engine_err = Some(err);
            }
            if let Err(err) = rendition.mark_highlight(&pending.cfi_range, &self.highlight_color) {
                engine_err = Some(err);
            }
        }
        if let Some(err) = engine_err {
            self.note_engine_error(err);
        }

        self.annotations.add(
            &pending.cfi_range,
            &pending.text,
            comment,
            &self.highlight_color,
        )
    }

    /// Jump the view back to a stored highlight.
    pub fn show_annotation(&mut self, cfi_range: &str) {
        let mut engine_err = None;
        if let Some(rendition) = self.rendition.as_mut() {
            if let Err(err) = rendition.display(cfi_range) {
                engine_err = Some(err);
            }
        }
        if let Some(err) = engine_err {
            self.note_engine_error(err);
        }
    }

    /// Delete a highlight: clear its visual mark and drop the record.
    ///
    /// The record goes away even when no rendition is attached. Returns
    /// whether a record existed.
    pub fn remove_highlight(&mut self, cfi_range: &str) -> bool {
        let mut engine_err = None;
        if let Some(rendition) = self.rendition.as_mut() {
            if let Err(err) = rendition.clear_highlight(cfi_range) {
                engine_err = Some(err);
            }
        }
        if let Some(err) = engine_err {
            self.note_engine_error(err);
        }

        self.annotations.remove(cfi_range)
    }

    /// Drop the pending selection without saving (picker closed).
    pub fn dismiss_selection(&mut self) {
        self.pending = None;
    }

    fn note_engine_error(&mut self, err: RenditionError) {
        tracing::error!(error = %err, "rendition command failed");
        self.error = Some(BOOK_LOAD_ERROR.to_string());
        self.loading = false;
    }
}
