//! Naive per-language pretty-printers behind the "format" control.
//!
//! Line-oriented re-indentation only; nothing here parses the language.

use std::sync::OnceLock;

use regex::Regex;

use crate::kernel::language::Language;

const INDENT: &str = "  ";

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static pattern"))
}

pub fn format(language: Language, code: &str) -> String {
    match language {
        Language::Markup => format_markup(code),
        Language::Stylesheet => format_stylesheet(code),
        Language::Script => format_script(code),
    }
}

pub fn format_markup(code: &str) -> String {
    static BETWEEN_TAGS: OnceLock<Regex> = OnceLock::new();
    static OPEN_TAG: OnceLock<Regex> = OnceLock::new();
    let between_tags = regex(&BETWEEN_TAGS, r">\s+<");
    let open_tag = regex(&OPEN_TAG, r"^<([A-Za-z][A-Za-z0-9-]*)[^>]*>");

    let code = between_tags.replace_all(code, "><");
    let mut out = String::with_capacity(code.len() + code.len() / 4);
    let mut indent = 0usize;

    for piece in split_before_tags(&code) {
        let line = piece.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("</") {
            indent = indent.saturating_sub(1);
        }
        push_line(&mut out, indent, line);

        if let Some(caps) = open_tag.captures(line) {
            let tag = caps[1].to_ascii_lowercase();
            let self_closing = caps[0].ends_with("/>");
            if !self_closing && !VOID_ELEMENTS.contains(&tag.as_str()) {
                indent += 1;
            }
        }
    }

    out.trim().to_string()
}

fn split_before_tags(code: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for (idx, _) in code.match_indices('<') {
        if idx > start {
            pieces.push(&code[start..idx]);
        }
        start = idx;
    }
    pieces.push(&code[start..]);
    pieces
}

pub fn format_stylesheet(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    let mut indent = 0usize;

    for line in code.split('\n') {
        let line = line.trim();
        if line.ends_with('}') {
            indent = indent.saturating_sub(1);
        }
        push_line(&mut out, indent, line);
        if line.ends_with('{') {
            indent += 1;
        }
    }

    out.trim().to_string()
}

pub fn format_script(code: &str) -> String {
    static SEMI: OnceLock<Regex> = OnceLock::new();
    static OPEN: OnceLock<Regex> = OnceLock::new();
    static CLOSE: OnceLock<Regex> = OnceLock::new();
    static BLANKS: OnceLock<Regex> = OnceLock::new();

    let code = regex(&SEMI, r";\s*").replace_all(code, ";\n");
    let code = regex(&OPEN, r"\{\s*").replace_all(&code, "{\n");
    let code = regex(&CLOSE, r"\}\s*").replace_all(&code, "}\n");
    let code = regex(&BLANKS, r"\n{2,}").replace_all(&code, "\n");
    code.trim().to_string()
}

fn push_line(out: &mut String, indent: usize, line: &str) {
    if !line.is_empty() {
        for _ in 0..indent {
            out.push_str(INDENT);
        }
        out.push_str(line);
    }
    out.push('\n');
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/format.rs"]
mod tests;
