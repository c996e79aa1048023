//! Service ports: traits + data contracts.

pub mod clipboard;
pub mod config;
pub mod preview;
pub mod settings;
pub mod storage;

pub use clipboard::{ClipboardError, ClipboardSink};
pub use config::{EditorConfig, EditorFeatures};
pub use preview::{PreviewError, PreviewRenderer};
pub use settings::{PanelOffset, Settings, SettingsError};
pub use storage::{BufferStore, Result as StorageResult, StorageError};
