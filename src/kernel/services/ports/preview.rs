use std::fmt;

use crate::kernel::preview::PreviewSources;

#[derive(Debug)]
pub enum PreviewError {
    Io(std::io::Error),
    Unavailable,
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::Io(e) => write!(f, "preview write failed: {}", e),
            PreviewError::Unavailable => write!(f, "preview surface unavailable"),
        }
    }
}

impl std::error::Error for PreviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PreviewError::Io(e) => Some(e),
            PreviewError::Unavailable => None,
        }
    }
}

impl From<std::io::Error> for PreviewError {
    fn from(e: std::io::Error) -> Self {
        PreviewError::Io(e)
    }
}

/// Isolated preview surface. Each call fully replaces the previous render.
pub trait PreviewRenderer {
    fn render(&mut self, sources: &PreviewSources<'_>) -> Result<(), PreviewError>;
}
