use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kernel::completion::Suggestion;
use crate::kernel::language::Language;

use super::config::EditorFeatures;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_preview_debounce_ms")]
    pub preview_debounce_ms: u64,
    #[serde(default = "default_copy_label_ms")]
    pub copy_label_ms: u64,
    #[serde(default)]
    pub features: EditorFeatures,
    #[serde(default)]
    pub panel_offset: PanelOffset,
    /// Whole-table replacements, keyed by `html` / `css` / `js`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub suggestions: BTreeMap<Language, Vec<Suggestion>>,
}

fn default_preview_debounce_ms() -> u64 {
    400
}

fn default_copy_label_ms() -> u64 {
    800
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preview_debounce_ms: default_preview_debounce_ms(),
            copy_label_ms: default_copy_label_ms(),
            features: EditorFeatures::default(),
            panel_offset: PanelOffset::default(),
            suggestions: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelOffset {
    pub x: f32,
    pub y: f32,
}

impl Default for PanelOffset {
    fn default() -> Self {
        Self { x: 10.0, y: 40.0 }
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings io error: {}", e),
            SettingsError::Parse(e) => write!(f, "settings parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}
