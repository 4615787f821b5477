//! Source rewriting ahead of declaration scanning.
//!
//! A single pass over the original text:
//! - collapses backslash line continuations (backslash, trailing blanks,
//!   newline, next line's indentation) into one space
//! - removes `// ...` comments up to the newline
//! - replaces `/* ... */` comments with one space
//!
//! String and character literals are tracked so comment markers inside them
//! are left alone. Every splice is recorded in a [`LineMap`] so offsets in
//! the rewritten text still resolve to original line numbers.

use crate::lines::LineMap;

/// Rewritten source text plus the mapping back to original lines.
#[derive(Debug, Clone)]
pub struct Source {
    text: String,
    lines: LineMap,
}

impl Source {
    /// Rewrite `original`, stripping comments unless `keep_comments` is set.
    pub fn new(original: &str, keep_comments: bool) -> Self {
        rewrite(original, !keep_comments)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> &LineMap {
        &self.lines
    }

    /// 1-based original line of an offset into [`Source::text`].
    pub fn line_of(&self, offset: usize) -> usize {
        self.lines.line_of(offset)
    }
}

#[derive(Debug, Clone, Copy)]
enum State {
    Code,
    LineComment(usize),
    BlockComment(usize),
    Literal(u8),
}

struct Rewriter<'a> {
    original: &'a str,
    out: String,
    copied: usize,
    lines: LineMap,
}

impl<'a> Rewriter<'a> {
    fn new(original: &'a str) -> Self {
        Rewriter {
            original,
            out: String::with_capacity(original.len()),
            copied: 0,
            lines: LineMap::new(original),
        }
    }

    /// Replace `original[start..end]` with `replacement`.
    fn splice(&mut self, start: usize, end: usize, replacement: &str) {
        self.out.push_str(&self.original[self.copied..start]);
        self.lines.record(self.out.len(), start);
        self.out.push_str(replacement);
        self.lines.record(self.out.len(), end);
        self.copied = end;
    }

    fn finish(mut self) -> Source {
        self.out.push_str(&self.original[self.copied..]);
        Source {
            text: self.out,
            lines: self.lines,
        }
    }
}

/// End of the continuation starting at the backslash at `i`, if it is one.
fn continuation_end(bytes: &[u8], i: usize) -> Option<usize> {
    let mut j = i + 1;
    while j < bytes.len() && matches!(bytes[j], b' ' | b'\t' | b'\r') {
        j += 1;
    }
    if bytes.get(j) != Some(&b'\n') {
        return None;
    }
    j += 1;
    while j < bytes.len() && matches!(bytes[j], b' ' | b'\t') {
        j += 1;
    }
    Some(j)
}

fn rewrite(original: &str, strip_comments: bool) -> Source {
    let bytes = original.as_bytes();
    let mut rw = Rewriter::new(original);
    let mut state = State::Code;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if b == b'\\' {
            if let Some(end) = continuation_end(bytes, i) {
                // A continued comment swallows the next line along with it.
                if matches!(state, State::Code | State::Literal(_)) {
                    rw.splice(i, end, " ");
                }
                i = end;
                continue;
            }
        }

        if !strip_comments {
            i += 1;
            continue;
        }

        let next = bytes.get(i + 1).copied();
        match state {
            State::Code => match (b, next) {
                (b'/', Some(b'/')) => {
                    state = State::LineComment(i);
                    i += 2;
                }
                (b'/', Some(b'*')) => {
                    state = State::BlockComment(i);
                    i += 2;
                }
                (b'"' | b'\'', _) => {
                    state = State::Literal(b);
                    i += 1;
                }
                _ => i += 1,
            },
            State::LineComment(start) => {
                if b == b'\n' {
                    rw.splice(start, i, "");
                    state = State::Code;
                }
                i += 1;
            }
            State::BlockComment(start) => {
                if b == b'*' && next == Some(b'/') {
                    rw.splice(start, i + 2, " ");
                    state = State::Code;
                    i += 2;
                } else {
                    i += 1;
                }
            }
            State::Literal(quote) => {
                if b == b'\\' {
                    i += 2;
                } else {
                    if b == quote || b == b'\n' {
                        state = State::Code;
                    }
                    i += 1;
                }
            }
        }
    }

    match state {
        State::LineComment(start) => rw.splice(start, bytes.len(), ""),
        State::BlockComment(start) => rw.splice(start, bytes.len(), " "),
        State::Code | State::Literal(_) => {}
    }

    rw.finish()
}
