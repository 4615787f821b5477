//! Enumerations.
//!
//! ```text
//! enum [Tag:] [Name] [( increment )] { entry, entry, ... }
//! ```
//!
//! Entries go through the same grammar as function arguments.

use crate::grammar::balanced::{normalize_expr, scan_balanced};
use crate::grammar::cursor::Cursor;
use crate::grammar::parse_variable;
use crate::model::EnumInfo;
use crate::source::Source;
use regex::Regex;
use std::sync::LazyLock;

static RE_ENUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\benum\b").unwrap());

pub fn scan_enums(source: &Source) -> Vec<EnumInfo> {
    let text = source.text();
    let mut enums = Vec::new();
    let mut pos = 0;

    while let Some(m) = RE_ENUM.find_at(text, pos) {
        let mut c = Cursor::new(text, m.start());
        match parse_enum(&mut c, source) {
            Some(info) => {
                enums.push(info);
                pos = c.pos();
            }
            None => pos = m.end(),
        }
    }

    enums
}

fn parse_enum(c: &mut Cursor<'_>, source: &Source) -> Option<EnumInfo> {
    let mut info = EnumInfo {
        line: source.line_of(c.pos()),
        ..Default::default()
    };
    if !c.eat_keyword("enum") {
        return None;
    }
    c.skip_ws();

    let save = *c;
    if let Some(tag) = c.symbol() {
        c.skip_ws();
        if c.eat(b':') {
            info.tag = Some(tag.to_string());
            c.skip_ws();
        } else {
            *c = save;
        }
    }

    if let Some(name) = c.symbol() {
        info.name = Some(name.to_string());
        c.skip_ws();
    }

    if c.eat(b'(') {
        let start = c.pos();
        if !scan_balanced(c, b"") || c.peek() != Some(b')') {
            return None;
        }
        let increment = normalize_expr(c.slice(start, c.pos()));
        c.bump();
        c.skip_ws();
        if !increment.is_empty() {
            info.increment = Some(increment);
        }
    }

    if !c.eat(b'{') {
        return None;
    }
    loop {
        c.skip_ws();
        if c.eat(b'}') {
            return Some(info);
        }
        let start = c.pos();
        let mut entry = parse_variable(c)?;
        entry.line = source.line_of(start);
        info.variables.push(entry);
        c.skip_ws();
        c.eat(b',');
    }
}
