use crate::kernel::language::Language;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PersistBuffer {
        language: Language,
        text: String,
    },
    PersistPreference {
        key: &'static str,
        value: &'static str,
    },
    /// Rebuild the preview document from the three buffers.
    RefreshPreview,
    /// The kernel changed the text itself; the host must write it back to the input surface.
    ReplaceInput {
        text: String,
        cursor: usize,
    },
    WriteClipboard(String),
}
