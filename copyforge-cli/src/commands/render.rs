//! Render command implementation.

use anyhow::{Context, Result};
use copyforge_render::HtmlRenderer;
use std::fs;
use std::path::Path;

/// Render a markdown file to HTML (standalone page by default).
pub fn render_markdown(input: &Path, output: Option<&Path>, fragment: bool) -> Result<()> {
    let markdown =
        fs::read_to_string(input).with_context(|| format!("Failed to read {:?}", input))?;

    let renderer = HtmlRenderer::new();
    let html = if fragment {
        renderer.render(&markdown)
    } else {
        renderer.render_document(&markdown)
    };

    match output {
        Some(path) => {
            fs::write(path, &html).with_context(|| format!("Failed to write {:?}", path))?;
            eprintln!("Wrote {:?}", path);
        }
        None => print!("{}", html),
    }

    Ok(())
}
