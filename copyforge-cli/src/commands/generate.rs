//! Generate command implementation.

use anyhow::{Context, Result};
use copyforge_core::{
    count_words, generate, parse_keyword_list, ArticleLength, Brief, Tone,
};
use copyforge_render::HtmlRenderer;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Brief file schema. Every field is optional here; required-field
/// enforcement happens in the engine so a missing topic is reported the
/// same way no matter how the brief was supplied.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BriefFile {
    #[serde(default)]
    topic: Option<String>,

    #[serde(default)]
    primary_keyword: Option<String>,

    /// Raw comma- or newline-separated list.
    #[serde(default)]
    secondary_keywords: Option<String>,

    #[serde(default)]
    target_audience: Option<String>,

    #[serde(default)]
    tone: Option<String>,

    #[serde(default)]
    length: Option<String>,

    #[serde(default)]
    call_to_action: Option<String>,
}

/// Inputs to the generate command; flags override brief-file fields.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    pub brief: Option<PathBuf>,
    pub topic: Option<String>,
    pub primary_keyword: Option<String>,
    pub secondary_keywords: Option<String>,
    pub audience: Option<String>,
    pub tone: Option<Tone>,
    pub length: Option<ArticleLength>,
    pub cta: Option<String>,
    pub output: Option<PathBuf>,
    pub html: Option<PathBuf>,
    pub json: bool,
}

/// Assemble the brief, run the engine, and write the results.
pub fn generate_article(opts: GenerateOptions) -> Result<()> {
    let brief = build_brief(&opts)?;
    tracing::debug!(topic = %brief.topic, "generating article");

    // The renderer is only ever invoked on a successful generation.
    let markdown = generate(&brief)?;

    let mut html = None;
    if let Some(path) = &opts.html {
        let page = HtmlRenderer::new().render_document(&markdown);
        fs::write(path, &page).with_context(|| format!("Failed to write {:?}", path))?;
        eprintln!("Wrote {:?}", path);
        html = Some(page);
    }

    if opts.json {
        let value = serde_json::json!({
            "markdown": markdown,
            "html": html,
            "words": count_words(&markdown),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match &opts.output {
        Some(path) => {
            fs::write(path, &markdown).with_context(|| format!("Failed to write {:?}", path))?;
            eprintln!("Wrote {:?}", path);
        }
        None => print!("{}", markdown),
    }

    Ok(())
}

fn build_brief(opts: &GenerateOptions) -> Result<Brief> {
    let file = match &opts.brief {
        Some(path) => load_brief_file(path)?,
        None => BriefFile::default(),
    };

    let tone = match (opts.tone, file.tone.as_deref()) {
        (Some(tone), _) => tone,
        (None, Some(raw)) => Tone::parse(raw)?,
        (None, None) => Tone::default(),
    };

    let length = match (opts.length, file.length.as_deref()) {
        (Some(length), _) => length,
        (None, Some(raw)) => ArticleLength::parse(raw)?,
        (None, None) => ArticleLength::default(),
    };

    let raw_keywords = opts
        .secondary_keywords
        .clone()
        .or(file.secondary_keywords)
        .unwrap_or_default();

    Ok(Brief {
        topic: opts.topic.clone().or(file.topic).unwrap_or_default(),
        primary_keyword: opts
            .primary_keyword
            .clone()
            .or(file.primary_keyword)
            .unwrap_or_default(),
        secondary_keywords: parse_keyword_list(&raw_keywords),
        target_audience: opts
            .audience
            .clone()
            .or(file.target_audience)
            .unwrap_or_default(),
        tone,
        length,
        call_to_action: opts.cta.clone().or(file.call_to_action).unwrap_or_default(),
    })
}

fn load_brief_file(path: &Path) -> Result<BriefFile> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read brief {:?}", path))?;
    serde_yaml::from_str(&contents).with_context(|| format!("Failed to parse brief {:?}", path))
}
