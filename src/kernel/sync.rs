//! Keeps the overlay and gutter aligned with the input surface.

use ropey::Rope;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffset {
    pub top: f32,
    pub left: f32,
}

impl ScrollOffset {
    pub fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }
}

/// Scroll positions of the three stacked layers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayerScroll {
    pub input: ScrollOffset,
    pub overlay: ScrollOffset,
    /// The gutter only scrolls vertically.
    pub gutter_top: f32,
}

impl LayerScroll {
    /// Record a scroll of the input surface and mirror it. Returns whether anything moved.
    pub fn scroll_input(&mut self, offset: ScrollOffset) -> bool {
        let prev = *self;
        self.input = offset;
        self.sync();
        *self != prev
    }

    pub fn sync(&mut self) {
        self.overlay = self.input;
        self.gutter_top = self.input.top;
    }
}

/// Zero-based line holding `cursor` (a char offset, clamped to the buffer).
pub fn active_line_index(rope: &Rope, cursor: usize) -> usize {
    let cursor = cursor.min(rope.len_chars());
    // Ropey is built without CR/Unicode line breaks, so lines are `\n`-delimited only.
    rope.char_to_line(cursor)
}

/// Active-line marker shared by the overlay and the gutter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveLine {
    index: Option<usize>,
}

impl ActiveLine {
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Clear the previous marker and mark `index` when it exists among `line_count` rendered
    /// lines. An index past the rendered lines (text changed before the re-render landed)
    /// leaves nothing marked.
    pub fn apply(&mut self, index: usize, line_count: usize) -> bool {
        let prev = self.index;
        self.index = (index < line_count).then_some(index);
        prev != self.index
    }

    pub fn clear(&mut self) -> bool {
        self.index.take().is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/sync.rs"]
mod tests;
