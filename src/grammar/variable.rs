//! Variable / argument declarations.
//!
//! ```text
//! [const] [&] [Tag: | {Tag1, Tag2}:] (name | .. | ...) [dim]{0,3} [= default]
//! ```
//!
//! Shared by function argument lists and enum bodies.

use super::balanced::{normalize_expr, parse_integer, scan_balanced};
use super::cursor::{is_symbol_start, Cursor};
use crate::model::{Argument, Dimension, Tag};

const MAX_DIMENSIONS: usize = 3;

/// Parse one variable declaration at the cursor.
///
/// The cursor must already sit on the first non-blank character. `line` is
/// left at zero for the caller to attribute.
pub fn parse_variable(c: &mut Cursor<'_>) -> Option<Argument> {
    let mut arg = Argument {
        is_const: parse_const(c),
        ..Default::default()
    };

    if c.eat(b'&') {
        arg.is_ref = true;
        c.skip_ws();
    }

    arg.tag = parse_tag(c);
    arg.name = parse_name(c)?;

    while arg.dim.len() < MAX_DIMENSIONS {
        match parse_dimension(c) {
            Some(dim) => arg.dim.push(dim),
            None => break,
        }
    }

    arg.default = parse_default(c);
    Some(arg)
}

/// `const` as a whole word, followed by something that can continue a
/// declaration.
fn parse_const(c: &mut Cursor<'_>) -> bool {
    let save = *c;
    if c.eat_keyword("const") {
        c.skip_ws();
        if let Some(b) = c.peek() {
            if b == b'&' || b == b'{' || b == b'.' || is_symbol_start(b) {
                return true;
            }
        }
    }
    *c = save;
    false
}

/// Optional tag, consuming the `:` and trailing whitespace.
fn parse_tag(c: &mut Cursor<'_>) -> Option<Tag> {
    let save = *c;
    let tag = if c.peek() == Some(b'{') {
        parse_tag_set(c).map(Tag::Union)
    } else {
        c.symbol().map(|s| Tag::Single(s.to_string()))
    };

    if tag.is_some() {
        c.skip_ws();
        if c.eat(b':') {
            c.skip_ws();
            return tag;
        }
    }
    *c = save;
    None
}

fn parse_tag_set(c: &mut Cursor<'_>) -> Option<Vec<String>> {
    c.eat(b'{');
    let mut tags = Vec::new();
    loop {
        c.skip_ws();
        tags.push(c.symbol()?.to_string());
        c.skip_ws();
        if c.eat(b'}') {
            return Some(tags);
        }
        if !c.eat(b',') {
            return None;
        }
    }
}

/// `Some(None)` for a variadic marker, `None` when nothing matches.
fn parse_name(c: &mut Cursor<'_>) -> Option<Option<String>> {
    if c.eat_str("...") || c.eat_str("..") {
        return Some(None);
    }
    c.symbol().map(|s| Some(s.to_string()))
}

fn parse_dimension(c: &mut Cursor<'_>) -> Option<Dimension> {
    let save = *c;
    c.skip_ws();
    if !c.eat(b'[') {
        *c = save;
        return None;
    }
    let start = c.pos();
    if !scan_balanced(c, b"]") || c.peek() != Some(b']') {
        *c = save;
        return None;
    }
    let text = normalize_expr(c.slice(start, c.pos()));
    c.bump();

    Some(if text.is_empty() {
        Dimension::Unsized
    } else if let Some(size) = parse_integer(&text) {
        Dimension::Size(size)
    } else {
        Dimension::Expr(text)
    })
}

/// `= expr`, running up to an unbalanced `,`, `;`, or closing delimiter.
fn parse_default(c: &mut Cursor<'_>) -> Option<String> {
    let save = *c;
    c.skip_ws();
    if c.eat(b'=') && c.peek() != Some(b'=') {
        c.skip_ws();
        let start = c.pos();
        if scan_balanced(c, b",;") {
            let text = normalize_expr(c.slice(start, c.pos()));
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    *c = save;
    None
}
