//! JSON renderer for the intel structure as editor tooling consumes it.

use crate::model::Intel;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn render(&self, intel: &Intel) -> Result<String> {
        let mut out = if self.pretty {
            serde_json::to_string_pretty(intel)
        } else {
            serde_json::to_string(intel)
        }
        .context("failed to serialize intel")?;
        out.push('\n');
        Ok(out)
    }
}
