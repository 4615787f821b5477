//! Balanced delimiter matching.
//!
//! A balanced unit is a quoted string (backslash escapes honoured) or a
//! `(…)`, `[…]` or `{…}` group whose contents may nest further units.
//! Nesting is tracked with an explicit stack of expected closers, so there
//! is no depth limit and no recursion.

use super::cursor::{is_symbol_char, Cursor};
use regex::Regex;
use std::sync::LazyLock;

static RE_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-]?)(?:0[xX]([0-9a-fA-F]+)|([0-9]+))$").unwrap());

const OPERATOR_CHARS: &[u8] = b"+-*/%<>=!&|^~";

/// Skip a string or character literal starting at the opening quote.
///
/// Returns false when the literal is not closed before end of line.
pub fn skip_string(c: &mut Cursor<'_>, quote: u8) -> bool {
    c.bump();
    loop {
        match c.peek() {
            None | Some(b'\n') => return false,
            Some(b'\\') => {
                c.bump();
                c.bump();
            }
            Some(b) if b == quote => {
                c.bump();
                return true;
            }
            Some(_) => c.bump(),
        }
    }
}

/// Advance over a run of balanced units and plain characters.
///
/// Stops, without consuming, at any byte in `stops` found outside every
/// group, or at an unmatched closing delimiter. Returns false if a string
/// is unterminated, a closer does not match its opener, or the text ends
/// inside an open group.
pub fn scan_balanced(c: &mut Cursor<'_>, stops: &[u8]) -> bool {
    let mut stack: Vec<u8> = Vec::new();
    loop {
        let Some(b) = c.peek() else {
            return stack.is_empty();
        };
        if stack.is_empty() && stops.contains(&b) {
            return true;
        }
        match b {
            b'"' | b'\'' => {
                if !skip_string(c, b) {
                    return false;
                }
                continue;
            }
            b'(' => stack.push(b')'),
            b'[' => stack.push(b']'),
            b'{' => stack.push(b'}'),
            b')' | b']' | b'}' => match stack.last() {
                Some(&close) if close == b => {
                    stack.pop();
                }
                Some(_) => return false,
                None => return true,
            },
            _ => {}
        }
        c.bump();
    }
}

fn is_word_byte(b: u8) -> bool {
    is_symbol_char(b) || b >= 0x80
}

fn needs_space(prev: u8, next: u8) -> bool {
    (is_word_byte(prev) && is_word_byte(next))
        || (OPERATOR_CHARS.contains(&prev) && OPERATOR_CHARS.contains(&next))
}

/// Canonical form of an opaque expression.
///
/// Whitespace outside string literals is dropped, except that a single
/// space is kept where it separates two word characters or two operator
/// characters. Leading and trailing whitespace disappear.
pub fn normalize_expr(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_whitespace() {
            pending_space = true;
            i += 1;
            continue;
        }
        if pending_space {
            if let Some(&prev) = out.as_bytes().last() {
                if needs_space(prev, b) {
                    out.push(' ');
                }
            }
            pending_space = false;
        }
        if b == b'"' || b == b'\'' {
            let end = string_end(bytes, i);
            out.push_str(&text[i..end]);
            i = end;
            continue;
        }
        let Some(ch) = text[i..].chars().next() else {
            break;
        };
        out.push(ch);
        i += ch.len_utf8();
    }
    out
}

/// Index just past the literal opened at `start`, or the end of `bytes`.
fn string_end(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Parse a decimal or `0x` hexadecimal integer literal with optional sign.
pub fn parse_integer(text: &str) -> Option<i64> {
    let caps = RE_INTEGER.captures(text)?;
    let sign = &caps[1];
    match (caps.get(2), caps.get(3)) {
        (Some(hex), _) => i64::from_str_radix(&format!("{}{}", sign, hex.as_str()), 16).ok(),
        (_, Some(dec)) => format!("{}{}", sign, dec.as_str()).parse::<i64>().ok(),
        _ => None,
    }
}
