//! Test double for the rendition seam

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::rendition::{Rendition, RenditionError};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Display(String),
    Mark(String, String),
    Clear(String),
}

/// Rendition that records every command and flags its own drop.
#[derive(Debug)]
pub struct RecordingRendition {
    pub ops: Vec<Op>,
    fail: bool,
    drop_flag: Option<Arc<AtomicBool>>,
}

impl RecordingRendition {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            fail: false,
            drop_flag: None,
        }
    }

    /// Rendition whose every command errors (after recording it).
    pub fn failing() -> Self {
        Self {
            ops: Vec::new(),
            fail: true,
            drop_flag: None,
        }
    }

    /// Rendition that raises `flag` when dropped.
    pub fn with_drop_flag(flag: Arc<AtomicBool>) -> Self {
        Self {
            ops: Vec::new(),
            fail: false,
            drop_flag: Some(flag),
        }
    }

    fn command(&mut self, op: Op) -> Result<(), RenditionError> {
        self.ops.push(op);
        if self.fail {
            return Err(RenditionError::new("engine refused the command"));
        }
        Ok(())
    }
}

impl Rendition for RecordingRendition {
    fn display(&mut self, location: &str) -> Result<(), RenditionError> {
        self.command(Op::Display(location.to_string()))
    }

    fn mark_highlight(&mut self, cfi_range: &str, color: &str) -> Result<(), RenditionError> {
        self.command(Op::Mark(cfi_range.to_string(), color.to_string()))
    }

    fn clear_highlight(&mut self, cfi_range: &str) -> Result<(), RenditionError> {
        self.command(Op::Clear(cfi_range.to_string()))
    }
}

impl Drop for RecordingRendition {
    fn drop(&mut self) {
        if let Some(flag) = &self.drop_flag {
            flag.store(true, Ordering::SeqCst);
        }
    }
}
