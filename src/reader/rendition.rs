//! Seam to the external EPUB rendering engine

use thiserror::Error;

/// Failure reported by the rendering engine for a display or markup command.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct RenditionError {
    pub message: String,
}

impl RenditionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Live handle to the engine rendering the open book.
///
/// Implementations own whatever engine callbacks they registered and must
/// unhook them when dropped; the session counts on that when it discards
/// the handle on book change.
pub trait Rendition {
    /// Move the view to a location or CFI range.
    fn display(&mut self, location: &str) -> Result<(), RenditionError>;

    /// Draw a highlight mark over the range in the given color.
    fn mark_highlight(&mut self, cfi_range: &str, color: &str) -> Result<(), RenditionError>;

    /// Remove the highlight mark over the range.
    fn clear_highlight(&mut self, cfi_range: &str) -> Result<(), RenditionError>;
}

/// Viewport-relative bounding box of a text selection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// Where the color/comment picker opens: just under the selection,
    /// horizontally centered on it.
    pub fn picker_anchor(&self) -> Anchor {
        Anchor {
            top: self.bottom,
            left: self.left + (self.right - self.left) / 2.0,
        }
    }
}

/// Screen position the picker is anchored to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub top: f64,
    pub left: f64,
}

/// Events the host forwards from the rendering engine.
#[derive(Debug, Clone, PartialEq)]
pub enum RenditionEvent {
    /// The engine finished preparing the book and began rendering.
    Started,
    /// The view moved to a new location.
    Relocated { location: String },
    /// The user selected a span of text.
    Selected {
        cfi_range: String,
        text: String,
        rect: Rect,
    },
    /// The engine could not load or render the book.
    Failed { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_opens_under_the_selection_midpoint() {
        let rect = Rect {
            left: 10.0,
            top: 20.0,
            right: 30.0,
            bottom: 44.0,
        };
        let anchor = rect.picker_anchor();
        assert_eq!(anchor.top, 44.0);
        assert_eq!(anchor.left, 20.0);
    }
}
