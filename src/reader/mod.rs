//! Reader application core
//!
//! The session controller owning all reader state, the trait seam to the
//! external EPUB rendering engine, and the bridge that turns engine events
//! into annotation and rendition commands.

mod rendition;
mod selection;
mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use rendition::{Anchor, Rect, Rendition, RenditionError, RenditionEvent};
pub use session::{PendingSelection, ReaderSession, BOOK_LOAD_ERROR, CATALOG_FETCH_ERROR};
