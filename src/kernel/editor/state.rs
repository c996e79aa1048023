use ropey::Rope;

use crate::kernel::completion::{Rect, SuggestionList};
use crate::kernel::debounce::Debouncer;
use crate::kernel::language::Language;
use crate::kernel::overlay::{Gutter, Overlay};
use crate::kernel::services::ports::EditorConfig;
use crate::kernel::sync::{ActiveLine, LayerScroll};

/// Editable text of one language plus its cursor (a char offset).
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    rope: Rope,
    cursor: usize,
}

impl Buffer {
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: 0,
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub(super) fn rope_mut(&mut self) -> &mut Rope {
        &mut self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = self.cursor.min(self.rope.len_chars());
    }

    pub fn set_cursor(&mut self, cursor: usize) -> bool {
        let cursor = cursor.min(self.rope.len_chars());
        let changed = cursor != self.cursor;
        self.cursor = cursor;
        changed
    }

    pub fn cursor_to_end(&mut self) {
        self.cursor = self.rope.len_chars();
    }
}

/// Everything stacked on the input surface: colorized overlay, gutter, markers, scroll.
#[derive(Debug, Clone, Default)]
pub struct SurfaceState {
    pub overlay: Overlay,
    /// `None` when line numbers are disabled.
    pub gutter: Option<Gutter>,
    pub active_line: ActiveLine,
    pub scroll: LayerScroll,
}

impl SurfaceState {
    pub fn render_overlay(&self) -> String {
        self.overlay.render(self.active_line.index())
    }

    pub fn render_gutter(&self) -> Option<String> {
        self.gutter
            .as_ref()
            .map(|gutter| gutter.render(self.active_line.index()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyLabel {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyLabel {
    /// Temporary glyph shown on the copy control; `None` means the normal label.
    pub const fn glyph(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Copied => Some("✔️"),
            Self::Failed => Some("✖"),
        }
    }
}

pub struct EditorState {
    pub(super) language: Language,
    pub(super) buffers: [Buffer; 3],
    pub(super) surface: SurfaceState,
    pub(super) completion: Option<SuggestionList>,
    pub(super) input_rect: Rect,
    pub(super) preview_debounce: Debouncer,
    pub(super) copy_label: CopyLabel,
    pub(super) copy_label_timer: Debouncer,
    pub(super) config: EditorConfig,
}

impl EditorState {
    pub fn new(config: EditorConfig) -> Self {
        let mut state = Self {
            language: Language::Markup,
            buffers: Default::default(),
            surface: SurfaceState::default(),
            completion: None,
            input_rect: Rect::default(),
            preview_debounce: Debouncer::new(config.preview_debounce),
            copy_label: CopyLabel::Idle,
            copy_label_timer: Debouncer::new(config.copy_label_revert),
            config,
        };
        state.recompute();
        state
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffers[self.language.index()]
    }

    pub fn buffer_for(&self, language: Language) -> &Buffer {
        &self.buffers[language.index()]
    }

    pub(super) fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffers[self.language.index()]
    }

    pub fn surface(&self) -> &SurfaceState {
        &self.surface
    }

    pub fn active_line(&self) -> Option<usize> {
        self.surface.active_line.index()
    }

    pub fn completion(&self) -> Option<&SuggestionList> {
        self.completion.as_ref()
    }

    pub fn input_rect(&self) -> Rect {
        self.input_rect
    }

    pub fn copy_label(&self) -> CopyLabel {
        self.copy_label
    }

    pub fn preview_pending(&self) -> bool {
        self.preview_debounce.is_pending()
    }

    pub(crate) fn disable_autocomplete(&mut self) {
        self.config.features.autocomplete = false;
        self.completion = None;
    }
}
