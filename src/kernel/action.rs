use std::time::Instant;

use crate::kernel::editor::EditorAction;

#[derive(Debug, Clone)]
pub enum Action {
    Editor(EditorAction),
    LoadPreferences {
        theme: Option<String>,
        orientation: Option<String>,
    },
    ToggleTheme,
    ToggleOrientation,
    DividerPress,
    DividerRelease,
    /// Pointer moved; `pointer` and `total` are along the split axis.
    DividerDrag {
        pointer: f32,
        total: f32,
    },
    Tick {
        now: Instant,
    },
}
