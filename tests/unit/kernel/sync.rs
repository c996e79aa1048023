use super::*;

#[test]
fn test_active_line_index_on_second_line() {
    let rope = Rope::from_str("a\nb\nc");
    assert_eq!(active_line_index(&rope, 3), 1);
}

#[test]
fn test_active_line_index_at_line_boundaries() {
    let rope = Rope::from_str("a\nb\nc");
    assert_eq!(active_line_index(&rope, 0), 0);
    // Right after the newline is the start of the next line.
    assert_eq!(active_line_index(&rope, 2), 1);
    assert_eq!(active_line_index(&rope, 5), 2);
}

#[test]
fn test_active_line_index_clamps_cursor() {
    let rope = Rope::from_str("a\nb");
    assert_eq!(active_line_index(&rope, 100), 1);
    assert_eq!(active_line_index(&Rope::new(), 7), 0);
}

#[test]
fn test_active_line_index_ignores_carriage_return() {
    let rope = Rope::from_str("a\r\nb\rc");
    assert_eq!(rope.len_lines(), 2);
    assert_eq!(active_line_index(&rope, 6), 1);
}

#[test]
fn test_active_line_apply_replaces_marker() {
    let mut active = ActiveLine::default();
    assert!(active.apply(1, 3));
    assert_eq!(active.index(), Some(1));
    assert!(!active.apply(1, 3));
    assert!(active.apply(2, 3));
    assert_eq!(active.index(), Some(2));
}

#[test]
fn test_active_line_out_of_range_marks_nothing() {
    let mut active = ActiveLine::default();
    active.apply(0, 1);
    assert!(active.apply(4, 2));
    assert_eq!(active.index(), None);
}

#[test]
fn test_active_line_clear() {
    let mut active = ActiveLine::default();
    assert!(!active.clear());
    active.apply(0, 1);
    assert!(active.clear());
    assert_eq!(active.index(), None);
}

#[test]
fn test_scroll_input_mirrors_layers() {
    let mut scroll = LayerScroll::default();
    assert!(scroll.scroll_input(ScrollOffset::new(120.0, 15.0)));
    assert_eq!(scroll.overlay, ScrollOffset::new(120.0, 15.0));
    assert_eq!(scroll.gutter_top, 120.0);
    assert!(!scroll.scroll_input(ScrollOffset::new(120.0, 15.0)));
}

#[test]
fn test_sync_after_input_moved() {
    let mut scroll = LayerScroll::default();
    scroll.input = ScrollOffset::new(8.0, 2.0);
    scroll.sync();
    assert_eq!(scroll.overlay.top, 8.0);
    assert_eq!(scroll.overlay.left, 2.0);
    assert_eq!(scroll.gutter_top, 8.0);
}
