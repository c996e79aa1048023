use super::*;
use crate::kernel::language::Language;
use tempfile::tempdir;

#[test]
fn test_get_settings_path() {
    let path = get_settings_path().unwrap();
    assert!(path.ends_with(Path::new(SETTINGS_DIR).join(SETTINGS_FILE)));
}

#[test]
fn test_load_partial_settings_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{ "preview_debounce_ms": 250, "features": { "line_numbers": false } }"#,
    )
    .unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.preview_debounce_ms, 250);
    assert_eq!(settings.copy_label_ms, 800);
    assert!(!settings.features.line_numbers);
    assert!(settings.features.active_line);
    assert!(settings.features.autocomplete);
    assert_eq!(settings.panel_offset.x, 10.0);
    assert!(settings.suggestions.is_empty());
}

#[test]
fn test_load_suggestion_overrides() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{ "suggestions": { "js": [ { "key": "clg", "snippet": "console.log(|);" } ] } }"#,
    )
    .unwrap();

    let settings = load_settings_from(&path).unwrap();
    let table = &settings.suggestions[&Language::Script];
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].template.as_str(), "console.log(|);");
}

#[test]
fn test_load_invalid_json_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        load_settings_from(&path),
        Err(SettingsError::Parse(_))
    ));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        load_settings_from(&dir.path().join("absent.json")),
        Err(SettingsError::Io(_))
    ));
}

#[test]
fn test_default_settings_round_trip() {
    let json = serde_json::to_string_pretty(&Settings::default()).unwrap();
    let parsed: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.preview_debounce_ms, 400);
    assert_eq!(parsed.features, Settings::default().features);
    assert!(!json.contains("suggestions"));
}

#[test]
fn test_ensure_settings_file_writes_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join(SETTINGS_FILE);

    assert!(ensure_settings_file_at(&path).unwrap());
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.preview_debounce_ms, 400);
    assert!(settings.features.line_numbers);

    std::fs::write(&path, r#"{ "preview_debounce_ms": 90 }"#).unwrap();
    assert!(!ensure_settings_file_at(&path).unwrap());
    assert_eq!(load_settings_from(&path).unwrap().preview_debounce_ms, 90);
}
