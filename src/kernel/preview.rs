use crate::kernel::language::Language;

/// The three buffers a preview render is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewSources<'a> {
    pub markup: &'a str,
    pub stylesheet: &'a str,
    pub script: &'a str,
}

impl<'a> PreviewSources<'a> {
    pub fn from_fn(mut text: impl FnMut(Language) -> &'a str) -> Self {
        Self {
            markup: text(Language::Markup),
            stylesheet: text(Language::Stylesheet),
            script: text(Language::Script),
        }
    }
}

/// Standalone document: stylesheet in a style block, markup as the body, script last.
pub fn build_document(sources: &PreviewSources<'_>) -> String {
    let mut doc = String::with_capacity(
        128 + sources.markup.len() + sources.stylesheet.len() + sources.script.len(),
    );
    doc.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\">");
    doc.push_str("<style>");
    doc.push_str(sources.stylesheet);
    doc.push_str("</style>");
    doc.push_str("</head><body>");
    doc.push_str(sources.markup);
    doc.push_str("<script>");
    doc.push_str(sources.script);
    doc.push_str("</script>");
    doc.push_str("</body></html>");
    doc
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/preview.rs"]
mod tests;
