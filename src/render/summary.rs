//! Plain-text summary: one signature per line, grouped by kind.

use crate::model::Intel;
use crate::render::Renderer;
use anyhow::Result;
use std::fmt::Display;

pub struct SummaryRenderer;

impl Renderer for SummaryRenderer {
    fn render(&self, intel: &Intel) -> Result<String> {
        let mut out = String::new();
        render_group(&mut out, "Functions", intel.functions.iter().map(|f| (f.line, f)));
        render_group(&mut out, "Macros", intel.macros.iter().map(|m| (m.line, m)));
        render_group(&mut out, "Enums", intel.enums.iter().map(|e| (e.line, e)));
        Ok(out)
    }
}

fn render_group<T, I>(out: &mut String, title: &str, items: I)
where
    T: Display,
    I: Iterator<Item = (usize, T)>,
{
    let mut items = items.peekable();
    if items.peek().is_none() {
        return;
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&format!("## {}\n\n", title));
    for (line, item) in items {
        out.push_str(&format!("{}: {}\n", line, item));
    }
}
