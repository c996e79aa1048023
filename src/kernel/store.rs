use crate::kernel::editor::EditorAction;
use crate::kernel::prefs::{Orientation, Theme, ORIENTATION_KEY, THEME_KEY};

use super::{Action, AppState, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
    /// The host should suppress the input surface's default handling of the key.
    pub prevent_default: bool,
}

impl DispatchResult {
    fn new(state_changed: bool, effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed,
            prevent_default: false,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Editor(EditorAction::KeyDown { key, now }) => {
                let (state_changed, effects, prevent_default) =
                    self.state.editor.key_down(key, now);
                DispatchResult {
                    effects,
                    state_changed,
                    prevent_default,
                }
            }
            Action::Editor(editor_action) => {
                let (state_changed, effects) = self.state.editor.dispatch_action(editor_action);
                DispatchResult::new(state_changed, effects)
            }
            Action::LoadPreferences { theme, orientation } => {
                let prefs = &mut self.state.prefs;
                let prev = (prefs.theme, prefs.orientation);
                prefs.theme = Theme::from_stored(theme.as_deref());
                prefs.orientation = Orientation::from_stored(orientation.as_deref());
                DispatchResult::new(prev != (prefs.theme, prefs.orientation), Vec::new())
            }
            Action::ToggleTheme => {
                let theme = self.state.prefs.theme.toggled();
                self.state.prefs.theme = theme;
                DispatchResult::new(
                    true,
                    vec![Effect::PersistPreference {
                        key: THEME_KEY,
                        value: theme.as_str(),
                    }],
                )
            }
            Action::ToggleOrientation => {
                let orientation = self.state.prefs.orientation.toggled();
                self.state.prefs.orientation = orientation;
                DispatchResult::new(
                    true,
                    vec![Effect::PersistPreference {
                        key: ORIENTATION_KEY,
                        value: orientation.as_str(),
                    }],
                )
            }
            Action::DividerPress => {
                let changed = !self.state.prefs.dragging;
                self.state.prefs.dragging = true;
                DispatchResult::new(changed, Vec::new())
            }
            Action::DividerRelease => {
                let changed = self.state.prefs.dragging;
                self.state.prefs.dragging = false;
                DispatchResult::new(changed, Vec::new())
            }
            Action::DividerDrag { pointer, total } => {
                DispatchResult::new(self.state.prefs.drag_to(pointer, total), Vec::new())
            }
            Action::Tick { now } => {
                let (state_changed, effects) = self
                    .state
                    .editor
                    .dispatch_action(EditorAction::Tick { now });
                DispatchResult::new(state_changed, effects)
            }
        }
    }

    pub(crate) fn disable_autocomplete(&mut self) {
        self.state.editor.disable_autocomplete();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
