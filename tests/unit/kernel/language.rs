use super::*;

#[test]
fn test_from_key_accepts_aliases() {
    assert_eq!(Language::from_key("html"), Some(Language::Markup));
    assert_eq!(Language::from_key("CSS"), Some(Language::Stylesheet));
    assert_eq!(Language::from_key(" javascript "), Some(Language::Script));
    assert_eq!(Language::from_key("js"), Some(Language::Script));
    assert_eq!(Language::from_key("python"), None);
    assert_eq!(Language::from_key(""), None);
}

#[test]
fn test_key_round_trips_through_from_key() {
    for language in Language::ALL {
        assert_eq!(Language::from_key(language.key()), Some(language));
    }
}

#[test]
fn test_storage_keys_are_distinct() {
    assert_eq!(Language::Markup.storage_key(), "tryit-code-html");
    assert_eq!(Language::Stylesheet.storage_key(), "tryit-code-css");
    assert_eq!(Language::Script.storage_key(), "tryit-code-js");
}

#[test]
fn test_index_matches_all_order() {
    for (i, language) in Language::ALL.into_iter().enumerate() {
        assert_eq!(language.index(), i);
    }
}

#[test]
fn test_default_snippets_are_not_empty() {
    for language in Language::ALL {
        assert!(!language.default_snippet().is_empty());
    }
    assert!(Language::Markup.default_snippet().starts_with("<!DOCTYPE html>"));
}

#[test]
fn test_serde_uses_short_keys() {
    let json = serde_json::to_string(&Language::Stylesheet).unwrap();
    assert_eq!(json, "\"css\"");
    let parsed: Language = serde_json::from_str("\"js\"").unwrap();
    assert_eq!(parsed, Language::Script);
}

#[test]
fn test_display_is_key() {
    assert_eq!(Language::Markup.to_string(), "html");
    assert_eq!(Language::Script.display_name(), "JavaScript");
}
