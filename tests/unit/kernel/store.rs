use super::*;
use crate::kernel::editor::Key;
use crate::kernel::language::Language;
use crate::kernel::services::ports::EditorConfig;
use std::time::{Duration, Instant};

fn new_store() -> Store {
    Store::new(AppState::new(EditorConfig::default()))
}

fn type_text(store: &mut Store, text: &str, now: Instant) -> DispatchResult {
    store.dispatch(Action::Editor(EditorAction::Input {
        text: text.to_string(),
        cursor: text.chars().count(),
        now,
    }))
}

#[test]
fn test_toggle_theme_persists_preference() {
    let mut store = new_store();
    let result = store.dispatch(Action::ToggleTheme);
    assert!(result.state_changed);
    assert_eq!(store.state().prefs.theme, Theme::Dark);
    assert_eq!(
        result.effects,
        vec![Effect::PersistPreference {
            key: THEME_KEY,
            value: "theme-dark",
        }]
    );

    let result = store.dispatch(Action::ToggleTheme);
    assert_eq!(store.state().prefs.theme, Theme::Light);
    assert_eq!(
        result.effects,
        vec![Effect::PersistPreference {
            key: THEME_KEY,
            value: "theme-light",
        }]
    );
}

#[test]
fn test_toggle_orientation_persists_preference() {
    let mut store = new_store();
    let result = store.dispatch(Action::ToggleOrientation);
    assert_eq!(store.state().prefs.orientation, Orientation::Vertical);
    assert_eq!(
        result.effects,
        vec![Effect::PersistPreference {
            key: ORIENTATION_KEY,
            value: "layout-vertical",
        }]
    );
}

#[test]
fn test_load_preferences() {
    let mut store = new_store();
    let result = store.dispatch(Action::LoadPreferences {
        theme: Some("theme-dark".to_string()),
        orientation: Some("bogus".to_string()),
    });
    assert!(result.state_changed);
    assert!(result.effects.is_empty());
    assert_eq!(store.state().prefs.theme, Theme::Dark);
    assert_eq!(store.state().prefs.orientation, Orientation::Horizontal);

    let result = store.dispatch(Action::LoadPreferences {
        theme: Some("theme-dark".to_string()),
        orientation: None,
    });
    assert!(!result.state_changed);
}

#[test]
fn test_divider_drag_lifecycle() {
    let mut store = new_store();
    assert!(!store
        .dispatch(Action::DividerDrag {
            pointer: 400.0,
            total: 1000.0
        })
        .state_changed);

    assert!(store.dispatch(Action::DividerPress).state_changed);
    assert!(store
        .dispatch(Action::DividerDrag {
            pointer: 950.0,
            total: 1000.0
        })
        .state_changed);
    assert_eq!(store.state().prefs.editor_percent, Some(80.0));

    assert!(store.dispatch(Action::DividerRelease).state_changed);
    assert!(!store.dispatch(Action::DividerRelease).state_changed);
    assert!(!store
        .dispatch(Action::DividerDrag {
            pointer: 100.0,
            total: 1000.0
        })
        .state_changed);
    assert_eq!(store.state().prefs.editor_percent, Some(80.0));
}

#[test]
fn test_key_down_reports_prevent_default() {
    let mut store = new_store();
    let now = Instant::now();
    type_text(&mut store, "h", now);

    let result = store.dispatch(Action::Editor(EditorAction::KeyDown {
        key: Key::ArrowDown,
        now,
    }));
    assert!(result.prevent_default);
    assert!(result.state_changed);

    let result = store.dispatch(Action::Editor(EditorAction::KeyDown {
        key: Key::Escape,
        now,
    }));
    assert!(!result.prevent_default);
    assert!(store.state().editor.completion().is_none());
}

#[test]
fn test_other_actions_never_prevent_default() {
    let mut store = new_store();
    let result = type_text(&mut store, "di", Instant::now());
    assert!(!result.prevent_default);
    assert_eq!(
        result.effects,
        vec![Effect::PersistBuffer {
            language: Language::Markup,
            text: "di".to_string(),
        }]
    );
}

#[test]
fn test_tick_fires_debounced_refresh() {
    let mut store = new_store();
    let t0 = Instant::now();
    type_text(&mut store, "x", t0);

    let result = store.dispatch(Action::Tick {
        now: t0 + Duration::from_millis(100),
    });
    assert!(result.effects.is_empty());

    let result = store.dispatch(Action::Tick {
        now: t0 + Duration::from_millis(400),
    });
    assert_eq!(result.effects, vec![Effect::RefreshPreview]);
}

#[test]
fn test_disable_autocomplete() {
    let mut store = new_store();
    let now = Instant::now();
    type_text(&mut store, "di", now);
    assert!(store.state().editor.completion().is_some());

    store.disable_autocomplete();
    assert!(store.state().editor.completion().is_none());
    type_text(&mut store, "div", now);
    assert!(store.state().editor.completion().is_none());
}
