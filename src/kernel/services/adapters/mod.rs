//! Service adapters: in-memory and filesystem implementations of the ports.

pub mod clipboard;
pub mod file_store;
pub mod memory_store;
pub mod paths;
pub mod preview;
pub mod settings;

pub use clipboard::MemoryClipboard;
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use paths::{ensure_log_dir, get_log_dir, get_preview_path, get_store_path};
pub use preview::{FilePreview, MemoryPreview};
pub use settings::{
    ensure_settings_file, ensure_settings_file_at, get_settings_path, load_settings,
    load_settings_from,
};
