//! Runtime around the kernel store: executes effects against the service ports.

use std::fmt;
use std::time::Instant;

use crate::kernel::completion::Rect;
use crate::kernel::language::Language;
use crate::kernel::prefs::{ORIENTATION_KEY, THEME_KEY};
use crate::kernel::preview::PreviewSources;
use crate::kernel::services::ports::{
    BufferStore, ClipboardError, ClipboardSink, EditorConfig, PreviewError, PreviewRenderer,
    StorageError,
};
use crate::kernel::{Action, AppState, DispatchResult, EditorAction, Effect, Store};

/// Surfaces the host found on its page.
#[derive(Debug, Clone, Copy, Default)]
pub struct Surfaces {
    /// Bounding box of the editable input surface.
    pub input: Option<Rect>,
    pub overlay: bool,
    pub gutter: bool,
    pub preview: bool,
    pub suggestion_panel: bool,
}

impl Surfaces {
    fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.input.is_none() {
            missing.push("input");
        }
        if !self.overlay {
            missing.push("overlay");
        }
        if !self.gutter {
            missing.push("gutter");
        }
        if !self.preview {
            missing.push("preview");
        }
        missing
    }
}

pub struct Services {
    pub store: Box<dyn BufferStore>,
    pub preview: Box<dyn PreviewRenderer>,
    pub clipboard: Option<Box<dyn ClipboardSink>>,
}

/// Non-fatal failures of the external collaborators. Editing keeps working.
#[derive(Debug)]
pub enum PlaygroundWarning {
    Load {
        key: &'static str,
        error: StorageError,
    },
    Persist {
        key: &'static str,
        error: StorageError,
    },
    Preview(PreviewError),
    Clipboard(ClipboardError),
}

impl fmt::Display for PlaygroundWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaygroundWarning::Load { key, error } => {
                write!(f, "failed to load {}: {}", key, error)
            }
            PlaygroundWarning::Persist { key, error } => {
                write!(f, "failed to save {}: {}", key, error)
            }
            PlaygroundWarning::Preview(e) => write!(f, "{}", e),
            PlaygroundWarning::Clipboard(e) => write!(f, "{}", e),
        }
    }
}

/// Oldest warnings are dropped past this many until the host drains them.
pub const MAX_WARNINGS: usize = 64;

pub struct Playground {
    store: Store,
    services: Services,
    warnings: Vec<PlaygroundWarning>,
}

impl Playground {
    /// Wire the editor to its surfaces and load the markup buffer.
    ///
    /// Returns `None` (and does nothing else) when a required surface is missing.
    pub fn mount(surfaces: &Surfaces, config: EditorConfig, services: Services) -> Option<Self> {
        let missing = surfaces.missing();
        if !missing.is_empty() {
            tracing::debug!(?missing, "required surfaces missing, playground not mounted");
            return None;
        }
        let input = surfaces.input?;

        let mut playground = Self {
            store: Store::new(AppState::new(config)),
            services,
            warnings: Vec::new(),
        };
        if !surfaces.suggestion_panel {
            playground.store.disable_autocomplete();
        }
        playground.dispatch(Action::Editor(EditorAction::SetInputRect(input)));

        let theme = playground.load(THEME_KEY);
        let orientation = playground.load(ORIENTATION_KEY);
        playground.dispatch(Action::LoadPreferences { theme, orientation });

        for language in Language::ALL {
            let stored = playground.load(language.storage_key());
            playground.dispatch(Action::Editor(EditorAction::LoadBuffer { language, stored }));
        }
        playground.switch_language(Language::Markup);

        tracing::info!("playground mounted");
        Some(playground)
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Load the language's buffer from the store (default when absent) and make it current.
    pub fn switch_language(&mut self, language: Language) -> DispatchResult {
        let stored = self.load(language.storage_key());
        self.dispatch(Action::Editor(EditorAction::SwitchLanguage {
            language,
            stored,
        }))
    }

    /// Dispatch and execute the effects this runtime owns. The returned effects still contain
    /// everything, so the host can apply `ReplaceInput`.
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let result = self.store.dispatch(action);
        for effect in &result.effects {
            self.run_effect(effect);
        }
        result
    }

    pub fn tick(&mut self, now: Instant) -> DispatchResult {
        self.dispatch(Action::Tick { now })
    }

    pub fn warnings(&self) -> &[PlaygroundWarning] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<PlaygroundWarning> {
        std::mem::take(&mut self.warnings)
    }

    fn push_warning(&mut self, warning: PlaygroundWarning) {
        if self.warnings.len() >= MAX_WARNINGS {
            let dropped = self.warnings.len() + 1 - MAX_WARNINGS;
            self.warnings.drain(..dropped);
            tracing::debug!(dropped, "warning backlog full, dropping oldest");
        }
        self.warnings.push(warning);
    }

    fn load(&mut self, key: &'static str) -> Option<String> {
        match self.services.store.get(key) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(key, error = %error, "store read failed, using default");
                self.push_warning(PlaygroundWarning::Load { key, error });
                None
            }
        }
    }

    fn persist(&mut self, key: &'static str, value: &str) {
        if let Err(error) = self.services.store.set(key, value) {
            tracing::warn!(key, error = %error, "store write failed");
            self.push_warning(PlaygroundWarning::Persist { key, error });
        }
    }

    fn run_effect(&mut self, effect: &Effect) {
        match effect {
            Effect::PersistBuffer { language, text } => self.persist(language.storage_key(), text),
            Effect::PersistPreference { key, value } => self.persist(*key, *value),
            Effect::RefreshPreview => self.refresh_preview(),
            Effect::WriteClipboard(text) => self.write_clipboard(text),
            Effect::ReplaceInput { .. } => {}
        }
    }

    fn refresh_preview(&mut self) {
        let editor = &self.store.state().editor;
        let texts = Language::ALL.map(|language| editor.buffer_for(language).text());
        let sources = PreviewSources::from_fn(|language| texts[language.index()].as_str());
        if let Err(e) = self.services.preview.render(&sources) {
            tracing::warn!(error = %e, "preview render failed");
            self.push_warning(PlaygroundWarning::Preview(e));
        } else {
            tracing::debug!("preview refreshed");
        }
    }

    fn write_clipboard(&mut self, text: &str) {
        let success = match self.services.clipboard.as_mut() {
            Some(clipboard) => match clipboard.write_text(text) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "clipboard write failed");
                    self.push_warning(PlaygroundWarning::Clipboard(e));
                    false
                }
            },
            None => {
                self.push_warning(PlaygroundWarning::Clipboard(ClipboardError::NotAvailable));
                false
            }
        };
        let result = self.store.dispatch(Action::Editor(EditorAction::CopyFinished {
            success,
            now: Instant::now(),
        }));
        for effect in &result.effects {
            self.run_effect(effect);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/playground.rs"]
mod tests;
