//! Byte cursor over rewritten source text.
//!
//! Every token the grammars care about is ASCII, so the cursor walks bytes
//! and only ever slices at ASCII positions, which keeps slices on UTF-8
//! character boundaries.

/// Returns true for bytes that may start a symbol: `[a-zA-Z@_]`.
pub fn is_symbol_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'@' || b == b'_'
}

/// Returns true for bytes that may continue a symbol: `[a-zA-Z0-9@_]`.
pub fn is_symbol_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'@' || b == b'_'
}

/// A position within a text buffer.
///
/// `Copy` so that grammar rules can save a position and restore it when an
/// optional piece does not match.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str, pos: usize) -> Self {
        Cursor { src, pos }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    pub fn bump(&mut self) {
        if self.pos < self.src.len() {
            self.pos += 1;
        }
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }

    /// Skip ASCII whitespace, newlines included. Returns true if anything was skipped.
    pub fn skip_ws(&mut self) -> bool {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
        self.pos > start
    }

    pub fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn eat_str(&mut self, s: &str) -> bool {
        if self.src.as_bytes()[self.pos.min(self.src.len())..].starts_with(s.as_bytes()) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    /// Consume `kw` only when it is a whole word.
    pub fn eat_keyword(&mut self, kw: &str) -> bool {
        let save = self.pos;
        if !self.eat_str(kw) {
            return false;
        }
        if matches!(self.peek(), Some(b) if is_symbol_char(b)) {
            self.pos = save;
            return false;
        }
        true
    }

    /// Consume one of `keywords` as a whole word and return it.
    pub fn eat_any_keyword(&mut self, keywords: &[&'static str]) -> Option<&'static str> {
        keywords.iter().copied().find(|kw| self.eat_keyword(kw))
    }

    /// Consume a symbol `[a-zA-Z@_][a-zA-Z0-9@_]*`.
    pub fn symbol(&mut self) -> Option<&'a str> {
        let start = self.pos;
        match self.peek() {
            Some(b) if is_symbol_start(b) => self.pos += 1,
            _ => return None,
        }
        while matches!(self.peek(), Some(b) if is_symbol_char(b)) {
            self.pos += 1;
        }
        Some(&self.src[start..self.pos])
    }
}
