//! Markup escaping applied to every text fragment before coloring wrappers are added.

use std::borrow::Cow;

/// Replace `&`, `<` and `>` with their entities.
///
/// `&` goes first so the entities introduced for `<`/`>` are not escaped again.
/// Already-escaped input is escaped a second time; callers apply this once.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.bytes().any(|b| matches!(b, b'&' | b'<' | b'>')) {
        return Cow::Borrowed(text);
    }
    let out = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    Cow::Owned(out)
}

pub fn escape_into(out: &mut String, text: &str) {
    out.push_str(&escape(text));
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/escape.rs"]
mod tests;
