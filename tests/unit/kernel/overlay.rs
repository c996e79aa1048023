use super::*;

#[test]
fn test_from_markup_splits_on_newlines() {
    let overlay = Overlay::from_markup("a\n\nb");
    assert_eq!(overlay.line_count(), 3);
    assert_eq!(overlay.line(1), Some(""));
    assert_eq!(overlay.lines().collect::<Vec<_>>(), vec!["a", "", "b"]);
}

#[test]
fn test_empty_markup_is_one_line() {
    let overlay = Overlay::from_markup("");
    assert_eq!(overlay.line_count(), 1);
    assert_eq!(overlay.render(None), "<div class=\"hl-line\">&nbsp;</div>");
}

#[test]
fn test_render_marks_active_line() {
    let overlay = Overlay::from_markup("x\ny");
    assert_eq!(
        overlay.render(Some(1)),
        "<div class=\"hl-line\">x</div><div class=\"hl-line active-line\">y</div>"
    );
}

#[test]
fn test_trailing_newline_gets_blank_line() {
    let overlay = Overlay::from_markup("x\n");
    assert_eq!(overlay.line_count(), 2);
    assert!(overlay.render(None).ends_with("<div class=\"hl-line\">&nbsp;</div>"));
}

#[test]
fn test_gutter_labels_are_one_based() {
    let gutter = Gutter::for_line_count(3);
    assert_eq!(gutter.labels().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_gutter_render_marks_active_line() {
    let gutter = Gutter::for_line_count(2);
    assert_eq!(
        gutter.render(Some(0)),
        concat!(
            "<div class=\"line-number active-line-number\" data-line=\"1\">1</div>",
            "<div class=\"line-number\" data-line=\"2\">2</div>",
        )
    );
}

#[test]
fn test_gutter_without_active_line() {
    let gutter = Gutter::for_line_count(1);
    assert_eq!(
        gutter.render(None),
        "<div class=\"line-number\" data-line=\"1\">1</div>"
    );
}

#[test]
fn test_render_source_gutter_counts_source_lines() {
    let code = "p {\r\n  color: red;\r\n}\n\n";
    let (overlay, gutter) = render_source(Language::Stylesheet, code, true);
    let gutter = gutter.unwrap();
    assert_eq!(gutter.line_count(), 5);
    assert_eq!(overlay.line_count(), gutter.line_count());
    assert_eq!(gutter.labels().last(), Some(5));
}

#[test]
fn test_render_source_without_line_numbers() {
    let (overlay, gutter) = render_source(Language::Script, "let a = 1;", false);
    assert!(gutter.is_none());
    assert_eq!(overlay.line_count(), 1);
}
