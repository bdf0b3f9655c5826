//! Init command implementation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const DEFAULT_BRIEF: &str = include_str!("../../../brief.yml.example");

/// Write a starter brief.yml into the target directory.
pub fn init_brief(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    let brief_path = root.join("brief.yml");
    if brief_path.exists() {
        println!("brief.yml already exists at {:?}", brief_path);
        return Ok(());
    }

    fs::write(&brief_path, DEFAULT_BRIEF)
        .with_context(|| format!("Failed to write {:?}", brief_path))?;
    println!("Created {:?}", brief_path);
    println!("  - Edit the brief, then run: copyforge generate --brief brief.yml");
    Ok(())
}
