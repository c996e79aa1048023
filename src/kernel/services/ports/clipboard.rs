use std::fmt;

#[derive(Debug)]
pub enum ClipboardError {
    NotAvailable,
    SetFailed(String),
    TooLarge(usize),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::NotAvailable => write!(f, "clipboard not available"),
            ClipboardError::SetFailed(e) => write!(f, "clipboard write failed: {}", e),
            ClipboardError::TooLarge(size) => {
                write!(f, "text too large for clipboard ({} bytes)", size)
            }
        }
    }
}

impl std::error::Error for ClipboardError {}

pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
