//! `#define` directives.

use crate::model::MacroInfo;
use crate::source::Source;
use regex::Regex;
use std::sync::LazyLock;

// Name, then a pattern glued to it (no whitespace), then the rest of the line.
static RE_DEFINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*#[ \t]*define[ \t]+([a-zA-Z@_][a-zA-Z0-9@_]*)(\S*)(.*)$").unwrap()
});

pub fn scan_macros(source: &Source) -> Vec<MacroInfo> {
    RE_DEFINE
        .captures_iter(source.text())
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(MacroInfo {
                prefix: caps[1].to_string(),
                pattern: non_empty(&caps[2]),
                substitution: non_empty(caps[3].trim()),
                line: source.line_of(whole.start()),
            })
        })
        .collect()
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
