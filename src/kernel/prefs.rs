//! Page-level preferences: color theme, panel orientation and divider position.

pub const THEME_KEY: &str = "tryit-theme";
pub const ORIENTATION_KEY: &str = "tryit-orientation";

const MIN_PANEL_PERCENT: f32 = 20.0;
const MAX_PANEL_PERCENT: f32 = 80.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything but the stored dark value means light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("theme-dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("layout-vertical") => Self::Vertical,
            _ => Self::Horizontal,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "layout-horizontal",
            Self::Vertical => "layout-vertical",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefsState {
    pub theme: Theme,
    pub orientation: Orientation,
    pub dragging: bool,
    /// Editor panel share of the window, in percent. `None` until first dragged.
    pub editor_percent: Option<f32>,
}

impl Default for PrefsState {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            orientation: Orientation::Horizontal,
            dragging: false,
            editor_percent: None,
        }
    }
}

impl PrefsState {
    /// Pointer position along the split axis (x when horizontal, y when vertical).
    pub fn drag_to(&mut self, pointer: f32, total: f32) -> bool {
        if !self.dragging || total <= 0.0 {
            return false;
        }
        let percent = divider_percent(pointer, total);
        let changed = self.editor_percent != Some(percent);
        self.editor_percent = Some(percent);
        changed
    }
}

pub fn divider_percent(pointer: f32, total: f32) -> f32 {
    (pointer / total * 100.0).clamp(MIN_PANEL_PERCENT, MAX_PANEL_PERCENT)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/prefs.rs"]
mod tests;
