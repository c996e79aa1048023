use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::kernel::completion::{PanelPosition, SuggestionTables, MAX_SUGGESTIONS};

use super::settings::Settings;

/// Optional editor layers. Every combination drives the same recompute path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorFeatures {
    pub line_numbers: bool,
    pub active_line: bool,
    pub autocomplete: bool,
}

impl Default for EditorFeatures {
    fn default() -> Self {
        Self {
            line_numbers: true,
            active_line: true,
            autocomplete: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EditorConfig {
    pub preview_debounce: Duration,
    pub copy_label_revert: Duration,
    pub features: EditorFeatures,
    /// Offset of the suggestion panel from the input surface's top-left corner.
    pub panel_offset: PanelPosition,
    pub max_suggestions: usize,
    pub suggestions: SuggestionTables,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            preview_debounce: Duration::from_millis(400),
            copy_label_revert: Duration::from_millis(800),
            features: EditorFeatures::default(),
            panel_offset: PanelPosition {
                left: 10.0,
                top: 40.0,
            },
            max_suggestions: MAX_SUGGESTIONS,
            suggestions: SuggestionTables::builtin(),
        }
    }
}

impl EditorConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            preview_debounce: Duration::from_millis(settings.preview_debounce_ms),
            copy_label_revert: Duration::from_millis(settings.copy_label_ms),
            features: settings.features,
            panel_offset: PanelPosition {
                left: settings.panel_offset.x,
                top: settings.panel_offset.y,
            },
            max_suggestions: MAX_SUGGESTIONS,
            suggestions: SuggestionTables::with_overrides(&settings.suggestions),
        }
    }
}
