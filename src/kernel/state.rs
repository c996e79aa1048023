use crate::kernel::editor::EditorState;
use crate::kernel::prefs::PrefsState;
use crate::kernel::services::ports::EditorConfig;

pub struct AppState {
    pub editor: EditorState,
    pub prefs: PrefsState,
}

impl AppState {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            editor: EditorState::new(config),
            prefs: PrefsState::default(),
        }
    }
}
