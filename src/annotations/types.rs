//! Highlight/note records for the open book

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The pastel palette the highlight picker offers.
pub const PALETTE: [&str; 5] = ["#FFB3BA", "#FFDFBA", "#FFFFBA", "#BAFFC9", "#BAE1FF"];

/// Color used when none was chosen.
pub const DEFAULT_COLOR: &str = PALETTE[0];

/// A saved highlight, optionally carrying a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Position-range token from the rendering engine (an EPUB CFI in
    /// practice). Opaque to us; unique within the active list.
    #[serde(rename = "cfiRange")]
    pub cfi_range: String,
    /// Plain text of the selected span, captured at creation time.
    pub text: String,
    /// User note; may be empty.
    pub comment: String,
    /// Display color, normally one of [`PALETTE`].
    pub color: String,
    /// Creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Annotation {
    /// Build a record, substituting the default color for an empty one.
    pub fn new(cfi_range: &str, text: &str, comment: &str, color: &str) -> Self {
        let color = if color.is_empty() { DEFAULT_COLOR } else { color };
        Self {
            cfi_range: cfi_range.to_string(),
            text: text.to_string(),
            comment: comment.to_string(),
            color: color.to_string(),
            created_at: Utc::now(),
        }
    }
}
