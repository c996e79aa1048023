use std::path::{Path, PathBuf};

use crate::kernel::preview::{build_document, PreviewSources};
use crate::kernel::services::ports::preview::{PreviewError, PreviewRenderer};

/// Writes the preview document to a file, replacing the previous one.
pub struct FilePreview {
    path: PathBuf,
}

impl FilePreview {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreviewRenderer for FilePreview {
    fn render(&mut self, sources: &PreviewSources<'_>) -> Result<(), PreviewError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, build_document(sources))?;
        Ok(())
    }
}

/// Keeps the last rendered document in memory.
#[derive(Debug, Default)]
pub struct MemoryPreview {
    document: Option<String>,
    renders: usize,
}

impl MemoryPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl PreviewRenderer for MemoryPreview {
    fn render(&mut self, sources: &PreviewSources<'_>) -> Result<(), PreviewError> {
        self.document = Some(build_document(sources));
        self.renders += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/preview.rs"]
mod tests;
