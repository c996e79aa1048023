use std::time::Instant;

use crate::kernel::completion::{
    current_word, insert_snippet, suggest, PanelPosition, Rect, SuggestionList,
};
use crate::kernel::format;
use crate::kernel::language::Language;
use crate::kernel::overlay::{Gutter, Overlay};
use crate::kernel::sync::{active_line_index, ScrollOffset};
use crate::kernel::{syntax, Effect};

use super::action::{EditorAction, Key};
use super::state::{CopyLabel, EditorState};

impl EditorState {
    pub fn dispatch_action(&mut self, action: EditorAction) -> (bool, Vec<Effect>) {
        match action {
            EditorAction::LoadBuffer { language, stored } => self.load_buffer(language, stored),
            EditorAction::SwitchLanguage { language, stored } => {
                self.switch_language(language, stored)
            }
            EditorAction::Input { text, cursor, now } => self.input(text, cursor, now),
            EditorAction::Click { cursor } => self.click(cursor),
            EditorAction::KeyUp { key, cursor } => self.key_up(key, cursor),
            EditorAction::KeyDown { key, now } => {
                let (changed, effects, _) = self.key_down(key, now);
                (changed, effects)
            }
            EditorAction::AcceptSuggestion { index, now } => self.accept_suggestion(index, now),
            EditorAction::Scroll { top, left } => (
                self.surface.scroll.scroll_input(ScrollOffset::new(top, left)),
                Vec::new(),
            ),
            EditorAction::SetInputRect(rect) => self.set_input_rect(rect),
            EditorAction::Run => {
                self.preview_debounce.cancel();
                (false, vec![Effect::RefreshPreview])
            }
            EditorAction::Reset => self.reset(),
            EditorAction::Format => self.format(),
            EditorAction::Copy => (false, vec![Effect::WriteClipboard(self.buffer().text())]),
            EditorAction::CopyFinished { success, now } => self.copy_finished(success, now),
            EditorAction::Tick { now } => self.tick(now),
        }
    }

    /// Key press on the input surface. The third value tells the host to suppress the
    /// surface's default handling of the key.
    pub fn key_down(&mut self, key: Key, now: Instant) -> (bool, Vec<Effect>, bool) {
        let Some(list) = self.completion.as_mut() else {
            return (false, Vec::new(), false);
        };

        match key {
            Key::ArrowDown => {
                list.select_next();
                (true, Vec::new(), true)
            }
            Key::ArrowUp => {
                list.select_prev();
                (true, Vec::new(), true)
            }
            Key::Enter | Key::Tab => {
                let index = list.selected();
                let (changed, effects) = self.accept_suggestion(index, now);
                (changed, effects, true)
            }
            Key::Escape => {
                self.completion = None;
                (true, Vec::new(), false)
            }
            _ => (false, Vec::new(), false),
        }
    }

    /// highlight -> split into lines -> line numbers -> active line -> scroll sync.
    pub(super) fn recompute(&mut self) {
        let language = self.language;
        let rope = self.buffers[language.index()].rope();
        let text = rope.to_string();

        let markup = syntax::highlight(language, &text);
        self.surface.overlay = Overlay::from_markup(&markup);
        self.surface.gutter = self
            .config
            .features
            .line_numbers
            .then(|| Gutter::for_line_count(rope.len_lines()));
        debug_assert_eq!(self.surface.overlay.line_count(), rope.len_lines());

        self.refresh_active_line();
        self.surface.scroll.sync();

        tracing::debug!(
            language = %language,
            lines = self.surface.overlay.line_count(),
            bytes = text.len(),
            "recompute"
        );
    }

    fn refresh_active_line(&mut self) -> bool {
        if !self.config.features.active_line {
            return self.surface.active_line.clear();
        }
        let buffer = self.buffer();
        let index = active_line_index(buffer.rope(), buffer.cursor());
        let line_count = self.surface.overlay.line_count();
        self.surface.active_line.apply(index, line_count)
    }

    fn refresh_completion(&mut self) -> bool {
        if !self.config.features.autocomplete {
            return self.completion.take().is_some();
        }

        let buffer = self.buffer();
        let word = current_word(buffer.rope(), buffer.cursor());
        let items = suggest(
            &word,
            self.config.suggestions.table(self.language),
            self.config.max_suggestions,
        );
        let position = PanelPosition {
            left: self.input_rect.left + self.config.panel_offset.left,
            top: self.input_rect.top + self.config.panel_offset.top,
        };
        let next = SuggestionList::open(items, position);
        let changed = next != self.completion;
        self.completion = next;
        changed
    }

    fn load_buffer(&mut self, language: Language, stored: Option<String>) -> (bool, Vec<Effect>) {
        let text = stored.unwrap_or_else(|| language.default_snippet().to_string());
        let buffer = &mut self.buffers[language.index()];
        buffer.set_text(&text);
        buffer.cursor_to_end();
        if language == self.language {
            self.completion = None;
            self.recompute();
        }
        (true, Vec::new())
    }

    fn switch_language(
        &mut self,
        language: Language,
        stored: Option<String>,
    ) -> (bool, Vec<Effect>) {
        tracing::info!(from = %self.language, to = %language, "switch language");
        self.language = language;
        self.load_buffer(language, stored);
        // The immediate refresh below supersedes any pending one.
        self.preview_debounce.cancel();

        let buffer = self.buffer();
        let effects = vec![
            Effect::ReplaceInput {
                text: buffer.text(),
                cursor: buffer.cursor(),
            },
            Effect::RefreshPreview,
        ];
        (true, effects)
    }

    fn input(&mut self, text: String, cursor: usize, now: Instant) -> (bool, Vec<Effect>) {
        let language = self.language;
        let buffer = self.buffer_mut();
        buffer.set_text(&text);
        buffer.set_cursor(cursor);

        self.recompute();
        self.preview_debounce.schedule(now);
        self.refresh_completion();

        (true, vec![Effect::PersistBuffer { language, text }])
    }

    fn click(&mut self, cursor: usize) -> (bool, Vec<Effect>) {
        let mut changed = self.buffer_mut().set_cursor(cursor);
        changed |= self.refresh_active_line();
        changed |= self.refresh_completion();
        (changed, Vec::new())
    }

    fn key_up(&mut self, key: Key, cursor: usize) -> (bool, Vec<Effect>) {
        let mut changed = self.buffer_mut().set_cursor(cursor);
        changed |= self.refresh_active_line();
        if key.edits_word() {
            changed |= self.refresh_completion();
        }
        (changed, Vec::new())
    }

    fn accept_suggestion(&mut self, index: usize, now: Instant) -> (bool, Vec<Effect>) {
        let Some(template) = self
            .completion
            .as_ref()
            .and_then(|list| list.items().get(index))
            .map(|item| item.template.clone())
        else {
            return (false, Vec::new());
        };

        let language = self.language;
        let buffer = self.buffer_mut();
        let cursor = buffer.cursor();
        let insertion = insert_snippet(buffer.rope_mut(), cursor, &template);
        buffer.set_cursor(insertion.cursor);

        self.completion = None;
        self.recompute();
        self.preview_debounce.schedule(now);

        let buffer = self.buffer();
        let text = buffer.text();
        let effects = vec![
            Effect::ReplaceInput {
                text: text.clone(),
                cursor: buffer.cursor(),
            },
            Effect::PersistBuffer { language, text },
        ];
        (true, effects)
    }

    fn set_input_rect(&mut self, rect: Rect) -> (bool, Vec<Effect>) {
        let changed = rect != self.input_rect;
        self.input_rect = rect;
        (changed, Vec::new())
    }

    fn reset(&mut self) -> (bool, Vec<Effect>) {
        let language = self.language;
        let text = language.default_snippet().to_string();
        self.replace_text(&text);
        self.preview_debounce.cancel();

        let effects = vec![
            Effect::ReplaceInput {
                text: text.clone(),
                cursor: self.buffer().cursor(),
            },
            Effect::PersistBuffer { language, text },
            Effect::RefreshPreview,
        ];
        (true, effects)
    }

    fn format(&mut self) -> (bool, Vec<Effect>) {
        let language = self.language;
        let text = format::format(language, &self.buffer().text());
        self.replace_text(&text);

        let effects = vec![
            Effect::ReplaceInput {
                text: text.clone(),
                cursor: self.buffer().cursor(),
            },
            Effect::PersistBuffer { language, text },
        ];
        (true, effects)
    }

    fn replace_text(&mut self, text: &str) {
        let buffer = self.buffer_mut();
        buffer.set_text(text);
        buffer.cursor_to_end();
        self.completion = None;
        self.recompute();
    }

    fn copy_finished(&mut self, success: bool, now: Instant) -> (bool, Vec<Effect>) {
        self.copy_label = if success {
            CopyLabel::Copied
        } else {
            CopyLabel::Failed
        };
        // Revert regardless of outcome.
        self.copy_label_timer.schedule(now);
        (true, Vec::new())
    }

    fn tick(&mut self, now: Instant) -> (bool, Vec<Effect>) {
        let mut changed = false;
        let mut effects = Vec::new();

        if self.preview_debounce.poll(now) {
            effects.push(Effect::RefreshPreview);
        }
        if self.copy_label_timer.poll(now) {
            self.copy_label = CopyLabel::Idle;
            changed = true;
        }

        (changed, effects)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/reducer.rs"]
mod tests;
