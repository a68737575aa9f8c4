//! Highlights and notes for the open book

mod store;
mod types;

pub use store::AnnotationStore;
pub use types::{Annotation, DEFAULT_COLOR, PALETTE};
