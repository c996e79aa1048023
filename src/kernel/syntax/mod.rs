//! Syntax coloring: one single-pass lexer per language, rendered to class-tagged markup.
//!
//! Lexers classify the raw buffer text into contiguous spans. Escaping happens afterwards,
//! once per span, so injected wrapper markup can never be re-matched by a later rule.

mod markup;
mod scanner;
mod script;
mod style;

use crate::kernel::escape::escape_into;
use crate::kernel::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    Comment = 0,
    /// Tag names, selectors.
    Tag = 1,
    Keyword = 2,
    /// Attribute and property names.
    AttrName = 3,
    AttrValue = 4,
    Operator = 5,
    Punctuation = 6,
    String = 7,
    Number = 8,
    Text = 9,
}

impl TokenKind {
    pub const COUNT: usize = 10;

    pub const fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Comment => Some("token-comment"),
            Self::Tag => Some("token-tag"),
            Self::Keyword => Some("token-keyword"),
            Self::AttrName => Some("token-attr-name"),
            Self::AttrValue => Some("token-attr-value"),
            Self::Operator => Some("token-operator"),
            Self::Punctuation => Some("token-punctuation"),
            Self::String => Some("token-string"),
            Self::Number => Some("token-number"),
            Self::Text => None,
        }
    }
}

const _: () = assert!(TokenKind::Text as usize == TokenKind::COUNT - 1);

/// Byte range of the source text with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
    pub kind: TokenKind,
}

impl TokenSpan {
    pub fn text<'a>(&self, src: &'a str) -> &'a str {
        &src[self.start..self.end]
    }
}

/// Classify `src`. Spans are ordered, non-overlapping and cover the whole input.
pub fn tokenize(language: Language, src: &str) -> Vec<TokenSpan> {
    if src.is_empty() {
        return Vec::new();
    }
    match language {
        Language::Markup => markup::tokenize(src),
        Language::Stylesheet => style::tokenize(src),
        Language::Script => script::tokenize(src),
    }
}

/// Like [`tokenize`], keyed by a host-supplied language name. Unknown names get a single
/// plain-text span.
pub fn tokenize_key(key: &str, src: &str) -> Vec<TokenSpan> {
    match Language::from_key(key) {
        Some(language) => tokenize(language, src),
        None if src.is_empty() => Vec::new(),
        None => vec![TokenSpan {
            start: 0,
            end: src.len(),
            kind: TokenKind::Text,
        }],
    }
}

pub fn highlight(language: Language, src: &str) -> String {
    let spans = tokenize(language, src);
    render_spans(src, &spans)
}

/// Highlight for a host-supplied language name; unknown names fall back to pure escaping.
pub fn highlight_key(key: &str, src: &str) -> String {
    let spans = tokenize_key(key, src);
    render_spans(src, &spans)
}

/// Escape and wrap each span. Wrappers are closed before and reopened after every `\n` so
/// the output has exactly as many line breaks as `src` and each line is self-contained.
pub fn render_spans(src: &str, spans: &[TokenSpan]) -> String {
    let mut out = String::with_capacity(src.len() + src.len() / 2);
    for span in spans {
        let text = span.text(src);
        let Some(class) = span.kind.css_class() else {
            escape_into(&mut out, text);
            continue;
        };
        for (i, piece) in text.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if piece.is_empty() {
                continue;
            }
            out.push_str("<span class=\"");
            out.push_str(class);
            out.push_str("\">");
            escape_into(&mut out, piece);
            out.push_str("</span>");
        }
    }
    out
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/syntax.rs"]
mod tests;
