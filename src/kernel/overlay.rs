//! Overlay and gutter models: one entry per buffer line, rendered as markup blocks.

use std::fmt::Write as _;

use ropey::Rope;

use crate::kernel::language::Language;
use crate::kernel::syntax::highlight;

const BLANK_LINE: &str = "&nbsp;";

/// Colorized layer stacked over the input surface, split into lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    lines: Vec<String>,
}

impl Overlay {
    /// Split highlighted markup on `\n`. The markup must carry one line break per buffer line
    /// break; `syntax::render_spans` guarantees this.
    pub fn from_markup(markup: &str) -> Self {
        Self {
            lines: markup.split('\n').map(str::to_owned).collect(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn render(&self, active: Option<usize>) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 32).sum());
        for (i, line) in self.lines.iter().enumerate() {
            let class = if active == Some(i) {
                "hl-line active-line"
            } else {
                "hl-line"
            };
            let body = if line.is_empty() { BLANK_LINE } else { line };
            let _ = write!(out, "<div class=\"{class}\">{body}</div>");
        }
        out
    }
}

/// Line-number column. Built from the buffer's own line count, not from the overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gutter {
    line_count: usize,
}

impl Gutter {
    pub fn for_line_count(line_count: usize) -> Self {
        Self { line_count }
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// 1-based labels.
    pub fn labels(&self) -> impl Iterator<Item = usize> {
        1..=self.line_count
    }

    pub fn render(&self, active: Option<usize>) -> String {
        let mut out = String::with_capacity(self.line_count * 48);
        for label in self.labels() {
            let class = if active.map(|i| i + 1) == Some(label) {
                "line-number active-line-number"
            } else {
                "line-number"
            };
            let _ = write!(
                out,
                "<div class=\"{class}\" data-line=\"{label}\">{label}</div>"
            );
        }
        out
    }
}

/// Overlay and optional gutter for `code` outside an editor session. The gutter counts the
/// source's own lines.
pub fn render_source(
    language: Language,
    code: &str,
    line_numbers: bool,
) -> (Overlay, Option<Gutter>) {
    let overlay = Overlay::from_markup(&highlight(language, code));
    let gutter = line_numbers.then(|| Gutter::for_line_count(Rope::from_str(code).len_lines()));
    (overlay, gutter)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/overlay.rs"]
mod tests;
