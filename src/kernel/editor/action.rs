use std::time::Instant;

use crate::kernel::completion::Rect;
use crate::kernel::language::Language;

/// Keys the editor reacts to, named after DOM `KeyboardEvent.key` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Other,
}

impl Key {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Backspace" => Self::Backspace,
            "Delete" => Self::Delete,
            "Enter" => Self::Enter,
            "Tab" => Self::Tab,
            "Escape" | "Esc" => Self::Escape,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::Char(ch),
                    _ => Self::Other,
                }
            }
        }
    }

    /// Keys after which the suggestion list is rebuilt.
    pub fn edits_word(self) -> bool {
        matches!(self, Self::Char(_) | Self::Backspace | Self::Delete)
    }
}

#[derive(Debug, Clone)]
pub enum EditorAction {
    /// Put text into a buffer without switching to it.
    LoadBuffer {
        language: Language,
        stored: Option<String>,
    },
    SwitchLanguage {
        language: Language,
        stored: Option<String>,
    },
    /// The input surface's text changed (typing, paste, cut).
    Input {
        text: String,
        cursor: usize,
        now: Instant,
    },
    Click {
        cursor: usize,
    },
    KeyUp {
        key: Key,
        cursor: usize,
    },
    KeyDown {
        key: Key,
        now: Instant,
    },
    /// Pointer pick from the suggestion panel.
    AcceptSuggestion {
        index: usize,
        now: Instant,
    },
    Scroll {
        top: f32,
        left: f32,
    },
    SetInputRect(Rect),
    Run,
    Reset,
    Format,
    Copy,
    CopyFinished {
        success: bool,
        now: Instant,
    },
    Tick {
        now: Instant,
    },
}
