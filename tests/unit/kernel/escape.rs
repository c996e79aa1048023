use super::*;

#[test]
fn test_escape_replaces_markup_characters() {
    assert_eq!(escape("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
}

#[test]
fn test_escape_borrows_when_nothing_to_do() {
    assert!(matches!(escape("plain text"), Cow::Borrowed("plain text")));
}

#[test]
fn test_escape_ampersand_first() {
    assert_eq!(escape("<"), "&lt;");
    assert_eq!(escape("&lt;"), "&amp;lt;");
}

#[test]
fn test_escape_leaves_quotes_and_newlines() {
    assert_eq!(escape("\"x\"\n'y'"), "\"x\"\n'y'");
}

#[test]
fn test_escape_into_appends() {
    let mut out = String::from("<b>");
    escape_into(&mut out, "1 < 2");
    assert_eq!(out, "<b>1 &lt; 2");
}
