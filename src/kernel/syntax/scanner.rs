use memchr::memmem;

use super::{TokenKind, TokenSpan};

/// Byte cursor shared by the per-language lexers.
///
/// Every delimiter the lexers look for is ASCII, so span boundaries always land on char
/// boundaries even though the cursor advances one byte at a time.
pub(super) struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    spans: Vec<TokenSpan>,
}

impl<'a> Scanner<'a> {
    pub(super) fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            spans: Vec::new(),
        }
    }

    pub(super) fn pos(&self) -> usize {
        self.pos
    }

    pub(super) fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.src.len());
    }

    pub(super) fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub(super) fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    pub(super) fn peek_at(&self, offset: usize) -> Option<u8> {
        self.src.as_bytes().get(self.pos + offset).copied()
    }

    pub(super) fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat.as_bytes())
    }

    /// Unconsumed input.
    pub(super) fn rest(&self) -> &'a [u8] {
        &self.src.as_bytes()[self.pos..]
    }

    pub(super) fn bump(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.src.len());
    }

    /// Advance while `pred` holds, returning how many bytes were consumed.
    pub(super) fn bump_while(&mut self, mut pred: impl FnMut(u8) -> bool) -> usize {
        let start = self.pos;
        let bytes = self.src.as_bytes();
        while self.pos < bytes.len() && pred(bytes[self.pos]) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Position just past the next occurrence of `pat` at or after `from`, or end of input.
    pub(super) fn end_after(&self, from: usize, pat: &str) -> usize {
        let from = from.min(self.src.len());
        match memmem::find(&self.src.as_bytes()[from..], pat.as_bytes()) {
            Some(idx) => from + idx + pat.len(),
            None => self.src.len(),
        }
    }

    /// Record a classified span; any uncovered gap before it becomes plain text.
    pub(super) fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        let covered = self.covered();
        if start > covered {
            self.push_raw(TokenKind::Text, covered, start);
        }
        let start = start.max(covered);
        if end > start {
            self.push_raw(kind, start, end);
        }
    }

    pub(super) fn finish(mut self) -> Vec<TokenSpan> {
        let covered = self.covered();
        let len = self.src.len();
        if covered < len {
            self.push_raw(TokenKind::Text, covered, len);
        }
        self.spans
    }

    fn covered(&self) -> usize {
        self.spans.last().map(|s| s.end).unwrap_or(0)
    }

    fn push_raw(&mut self, kind: TokenKind, start: usize, end: usize) {
        if let Some(last) = self.spans.last_mut() {
            if last.kind == kind && kind == TokenKind::Text && last.end == start {
                last.end = end;
                return;
            }
        }
        self.spans.push(TokenSpan { start, end, kind });
    }
}

pub(super) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

pub(super) fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

pub(super) fn is_inline_space(b: u8) -> bool {
    b == b' ' || b == b'\t'
}
