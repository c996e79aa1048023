use std::fmt;

#[derive(Debug)]
pub enum StorageError {
    QuotaExceeded { needed: usize, quota: usize },
    Unavailable(String),
    Io(std::io::Error),
    Corrupt(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::QuotaExceeded { needed, quota } => {
                write!(f, "storage quota exceeded ({} > {} bytes)", needed, quota)
            }
            StorageError::Unavailable(e) => write!(f, "storage unavailable: {}", e),
            StorageError::Io(e) => write!(f, "storage io error: {}", e),
            StorageError::Corrupt(e) => write!(f, "storage data is corrupt: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// String-valued key-value store holding one entry per buffer (plus page preferences).
pub trait BufferStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
