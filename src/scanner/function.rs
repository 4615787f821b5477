//! Function declarations.
//!
//! ```text
//! [forward] (native|public|stock|static|forward) [Tag:] Name ( args ) ( { | [= addr] ; )
//! ```
//!
//! Only the signature is consumed; a body is left to the other scanners.

use crate::grammar::balanced::{normalize_expr, parse_integer};
use crate::grammar::cursor::Cursor;
use crate::grammar::parse_variable;
use crate::model::{Address, Argument, FunctionInfo, FunctionKind};
use crate::source::Source;
use regex::Regex;
use std::sync::LazyLock;

static RE_QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:forward|native|public|stock|static)\b").unwrap());

const QUALIFIERS: &[&str] = &["forward", "native", "public", "stock", "static"];
const FORWARDED_QUALIFIERS: &[&str] = &["native", "public", "stock", "static"];

/// Find every function declaration in the rewritten source.
pub fn scan_functions(source: &Source) -> Vec<FunctionInfo> {
    let text = source.text();
    let mut functions = Vec::new();
    let mut pos = 0;

    while let Some(m) = RE_QUALIFIER.find_at(text, pos) {
        // `@stock` is a symbol, not a qualifier
        if m.start() > 0 && text.as_bytes()[m.start() - 1] == b'@' {
            pos = m.end();
            continue;
        }
        let mut c = Cursor::new(text, m.start());
        match parse_function(&mut c, source) {
            Some(func) => {
                functions.push(func);
                pos = c.pos();
            }
            None => pos = m.end(),
        }
    }

    functions
}

fn parse_function(c: &mut Cursor<'_>, source: &Source) -> Option<FunctionInfo> {
    let line = source.line_of(c.pos());
    let (forward, kind) = parse_qualifiers(c)?;
    let tag = parse_return_tag(c);
    let name = c.symbol()?.to_string();

    c.skip_ws();
    if !c.eat(b'(') {
        return None;
    }
    let args = parse_arguments(c, source)?;
    let addr = parse_terminator(c)?;

    Some(FunctionInfo {
        forward,
        kind,
        tag,
        name,
        args,
        addr,
        line,
    })
}

/// `forward`, a qualifier, or `forward` followed by a qualifier.
fn parse_qualifiers(c: &mut Cursor<'_>) -> Option<(bool, FunctionKind)> {
    let first = c.eat_any_keyword(QUALIFIERS)?;
    if !c.skip_ws() {
        return None;
    }
    if first != "forward" {
        return Some((false, FunctionKind::from_keyword(first)?));
    }

    let save = *c;
    if let Some(qualifier) = c.eat_any_keyword(FORWARDED_QUALIFIERS) {
        if c.skip_ws() {
            return Some((true, FunctionKind::from_keyword(qualifier)?));
        }
    }
    *c = save;
    Some((true, FunctionKind::Function))
}

fn parse_return_tag(c: &mut Cursor<'_>) -> Option<String> {
    let save = *c;
    if let Some(tag) = c.symbol() {
        c.skip_ws();
        if c.eat(b':') {
            c.skip_ws();
            return Some(tag.to_string());
        }
    }
    *c = save;
    None
}

/// Argument list after the opening parenthesis, through the closing one.
fn parse_arguments(c: &mut Cursor<'_>, source: &Source) -> Option<Vec<Argument>> {
    let mut args = Vec::new();
    loop {
        c.skip_ws();
        if c.eat(b')') {
            return Some(args);
        }
        let start = c.pos();
        let mut arg = parse_variable(c)?;
        arg.line = source.line_of(start);
        args.push(arg);
        c.skip_ws();
        c.eat(b',');
    }
}

/// `{`, `;`, or `= redirection;`. Returns the redirection, if any.
fn parse_terminator(c: &mut Cursor<'_>) -> Option<Option<Address>> {
    c.skip_ws();
    if c.eat(b'{') || c.eat(b';') {
        return Some(None);
    }
    if !c.eat(b'=') {
        return None;
    }

    let start = c.pos();
    while !matches!(c.peek(), Some(b';') | None) {
        c.bump();
    }
    let text = normalize_expr(c.slice(start, c.pos()));
    if !c.eat(b';') || text.is_empty() {
        return None;
    }

    Some(Some(match parse_integer(&text) {
        Some(n) => Address::Number(n),
        None => Address::Alias(text),
    }))
}
