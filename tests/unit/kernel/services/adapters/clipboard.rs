use super::*;

#[test]
fn test_write_text_stores_copy() {
    let mut clipboard = MemoryClipboard::default();
    clipboard.write_text("hello").unwrap();
    assert_eq!(clipboard.text(), Some("hello"));
}

#[test]
fn test_unavailable_clipboard_rejects_writes() {
    let mut clipboard = MemoryClipboard::unavailable();
    assert!(matches!(
        clipboard.write_text("x"),
        Err(ClipboardError::NotAvailable)
    ));
    assert_eq!(clipboard.text(), None);
}

#[test]
fn test_oversized_text_is_rejected() {
    let mut clipboard = MemoryClipboard::new();
    let text = "a".repeat(COPY_MAX_SIZE + 1);
    assert!(matches!(
        clipboard.write_text(&text),
        Err(ClipboardError::TooLarge(n)) if n == COPY_MAX_SIZE + 1
    ));
}
