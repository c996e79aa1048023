//! Prefix autocomplete over static per-language snippet tables.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use compact_str::CompactString;
use ropey::Rope;
use serde::{Deserialize, Serialize};

use crate::kernel::escape::escape;
use crate::kernel::language::Language;

/// Marks where the cursor lands after a snippet is inserted.
pub const PLACEHOLDER: char = '|';
pub const MAX_SUGGESTIONS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub key: CompactString,
    #[serde(alias = "snippet")]
    pub template: CompactString,
}

impl Suggestion {
    pub fn new(key: &str, template: &str) -> Self {
        Self {
            key: CompactString::new(key),
            template: CompactString::new(template),
        }
    }
}

fn builtin(language: Language) -> Vec<Suggestion> {
    let entries: &[(&str, &str)] = match language {
        Language::Markup => &[
            ("div", "<div>|</div>"),
            ("span", "<span>|</span>"),
            ("p", "<p>|</p>"),
            ("h1", "<h1>|</h1>"),
            ("h2", "<h2>|</h2>"),
            ("ul", "<ul>\n  <li>|</li>\n</ul>"),
            ("li", "<li>|</li>"),
            ("button", "<button>|</button>"),
            ("input", "<input>|"),
        ],
        Language::Stylesheet => &[
            ("display", "display: |;"),
            ("margin", "margin: |;"),
            ("padding", "padding: |;"),
            ("color", "color: |;"),
            ("background", "background: |;"),
        ],
        Language::Script => &[
            ("function", "function name() {\n  |\n}"),
            ("for", "for (let i = 0; i < |; i++) {\n  \n}"),
            ("if", "if (|) {\n  \n}"),
            ("log", "console.log(|);"),
        ],
    };
    entries
        .iter()
        .map(|(key, template)| Suggestion::new(key, template))
        .collect()
}

/// Ordered suggestion table per language. Read-only once built.
#[derive(Debug, Clone)]
pub struct SuggestionTables {
    tables: [Vec<Suggestion>; 3],
}

impl SuggestionTables {
    pub fn builtin() -> Self {
        Self {
            tables: Language::ALL.map(builtin),
        }
    }

    /// Built-in tables with whole-table replacements for the given languages.
    pub fn with_overrides(overrides: &BTreeMap<Language, Vec<Suggestion>>) -> Self {
        let mut tables = Self::builtin();
        for (language, table) in overrides {
            tables.tables[language.index()] = table.clone();
        }
        tables
    }

    pub fn table(&self, language: Language) -> &[Suggestion] {
        &self.tables[language.index()]
    }
}

impl Default for SuggestionTables {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

/// Char offset where the word ending at `cursor` starts.
pub fn word_start(rope: &Rope, cursor: usize) -> usize {
    let end = cursor.min(rope.len_chars());
    let mut start = end;
    while start > 0 && is_word_char(rope.char(start - 1)) {
        start -= 1;
    }
    start
}

/// Maximal trailing run of `[A-Za-z0-9_-]` ending at `cursor`.
pub fn current_word(rope: &Rope, cursor: usize) -> String {
    let end = cursor.min(rope.len_chars());
    let start = word_start(rope, end);
    rope.slice(start..end).to_string()
}

/// Entries whose key starts with `word` (case-sensitive), in table order, at most `limit`.
pub fn suggest(word: &str, table: &[Suggestion], limit: usize) -> Vec<Suggestion> {
    if word.is_empty() {
        return Vec::new();
    }
    table
        .iter()
        .filter(|item| item.key.starts_with(word))
        .take(limit)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelPosition {
    pub left: f32,
    pub top: f32,
}

/// Visible suggestion panel: filtered entries plus the keyboard selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionList {
    items: Vec<Suggestion>,
    selected: usize,
    position: PanelPosition,
}

impl SuggestionList {
    /// `None` when there is nothing to show.
    pub fn open(items: Vec<Suggestion>, position: PanelPosition) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            items,
            selected: 0,
            position,
        })
    }

    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&Suggestion> {
        self.items.get(self.selected)
    }

    pub fn position(&self) -> PanelPosition {
        self.position
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + self.items.len() - 1) % self.items.len();
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, item) in self.items.iter().enumerate() {
            let class = if i == self.selected { "selected" } else { "" };
            let _ = write!(
                out,
                "<div data-index=\"{i}\" class=\"{class}\">{}</div>",
                escape(&item.key)
            );
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    /// Char offset where the snippet was inserted.
    pub start: usize,
    /// Char offset of the cursor after insertion.
    pub cursor: usize,
}

/// Replace the word ending at `cursor` with `template`, stripping its placeholder.
///
/// When the template opens with non-word characters (`<` in `<div>|</div>`) that are already
/// typed right before the word, they are replaced too, so `<di` becomes `<div></div>`.
/// The cursor goes to the placeholder, or to the end of the inserted text when the template
/// has none.
pub fn insert_snippet(rope: &mut Rope, cursor: usize, template: &str) -> Insertion {
    let end = cursor.min(rope.len_chars());
    let start = absorb_lead(rope, word_start(rope, end), template);

    let (text, marker) = match template.find(PLACEHOLDER) {
        Some(byte_idx) => {
            let marker = template[..byte_idx].chars().count();
            let mut text = String::with_capacity(template.len());
            text.push_str(&template[..byte_idx]);
            text.push_str(&template[byte_idx + PLACEHOLDER.len_utf8()..]);
            (text, Some(marker))
        }
        None => (template.to_string(), None),
    };

    rope.remove(start..end);
    rope.insert(start, &text);

    let cursor = start + marker.unwrap_or_else(|| text.chars().count());
    Insertion { start, cursor }
}

fn absorb_lead(rope: &Rope, start: usize, template: &str) -> usize {
    let lead: Vec<char> = template
        .chars()
        .take_while(|&ch| !is_word_char(ch) && ch != PLACEHOLDER)
        .collect();
    if lead.is_empty() || lead.len() > start {
        return start;
    }
    let from = start - lead.len();
    if rope.slice(from..start).chars().eq(lead.iter().copied()) {
        from
    } else {
        start
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/completion.rs"]
mod tests;
