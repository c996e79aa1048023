//! In-process clipboard, used when the host has no system clipboard and to exercise failed copies.

use crate::kernel::services::ports::clipboard::{ClipboardError, ClipboardSink};

const COPY_MAX_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug)]
pub struct MemoryClipboard {
    text: Option<String>,
    available: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self {
            text: None,
            available: true,
        }
    }

    /// A clipboard that rejects every write.
    pub fn unavailable() -> Self {
        Self {
            text: None,
            available: false,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.available {
            return Err(ClipboardError::NotAvailable);
        }
        if text.len() > COPY_MAX_SIZE {
            return Err(ClipboardError::TooLarge(text.len()));
        }
        self.text = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/clipboard.rs"]
mod tests;
