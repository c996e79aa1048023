use super::*;

#[test]
fn test_format_markup_nests_children() {
    let out = format_markup("<div><p>hi</p><span>x</span></div>");
    assert_eq!(
        out,
        "<div>\n  <p>hi\n  </p>\n  <span>x\n  </span>\n</div>"
    );
}

#[test]
fn test_format_markup_void_and_self_closing_do_not_indent() {
    let out = format_markup("<div>\n   <br>\n<img src=\"a.png\"/>\n  <input type=\"text\">\n</div>");
    assert_eq!(
        out,
        "<div>\n  <br>\n  <img src=\"a.png\"/>\n  <input type=\"text\">\n</div>"
    );
}

#[test]
fn test_format_markup_unbalanced_close_does_not_underflow() {
    let out = format_markup("</div></div><p>a</p>");
    assert_eq!(out, "</div>\n</div>\n<p>a\n</p>");
}

#[test]
fn test_format_stylesheet_reindents() {
    let out = format_stylesheet("body {\ncolor: red;\n      margin: 0;\n}\n\n\nh1 {\n}");
    assert_eq!(out, "body {\n  color: red;\n  margin: 0;\n}\n\n\nh1 {\n}");
}

#[test]
fn test_format_script_breaks_statements() {
    let out = format_script("let a = 1; if (a) { a++; }");
    assert_eq!(out, "let a = 1;\nif (a) {\na++;\n}");
}

#[test]
fn test_format_script_collapses_blank_lines() {
    let out = format_script("a();\n\n\n\nb();");
    assert_eq!(out, "a();\nb();");
}

#[test]
fn test_format_dispatches_by_language() {
    assert_eq!(format(Language::Markup, "<p></p>"), "<p>\n</p>");
    assert_eq!(format(Language::Script, "x;y;"), "x;\ny;");
    assert_eq!(format(Language::Stylesheet, "  a {}  "), "a {}");
}

#[test]
fn test_formatted_output_keeps_highlight_line_invariant() {
    use crate::kernel::syntax::highlight;

    let samples = [
        (Language::Markup, "<ul><li>a</li><li>b</li></ul>"),
        (Language::Stylesheet, "a{\ncolor:red;}\nb {\n}"),
        (Language::Script, "function f(){return 1;}f();"),
    ];
    for (language, src) in samples {
        let formatted = format(language, src);
        let out = highlight(language, &formatted);
        assert_eq!(out.matches('\n').count(), formatted.matches('\n').count());
    }
}
