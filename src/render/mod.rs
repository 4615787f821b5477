//! Trait-based dispatch over output formats.

pub mod json;
pub mod summary;

use crate::model::Intel;
use anyhow::{anyhow, Result};

/// Trait for rendering scan results into a specific output format.
pub trait Renderer {
    fn render(&self, intel: &Intel) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, pretty: bool) -> Result<Box<dyn Renderer>> {
    match format {
        "json" => Ok(Box::new(json::JsonRenderer { pretty })),
        "summary" => Ok(Box::new(summary::SummaryRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use json or summary", format)),
    }
}
