//! # copyforge-render
//!
//! Markdown rendering for copyforge.
//!
//! Converts the markdown produced by the assembly engine into HTML for
//! preview and `.html` export. Total on well-formed markdown; the engine
//! only emits headings, paragraphs, lists, and emphasis, all of which
//! pulldown-cmark accepts.

use pulldown_cmark::{html, Options, Parser};

/// Markdown to HTML renderer.
pub struct HtmlRenderer {
    options: Options,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        Self { options }
    }

    /// Render markdown to an HTML fragment.
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }

    /// Render markdown to a standalone HTML page, suitable for saving as a
    /// downloadable `.html` file. The page title comes from the first H1.
    pub fn render_document(&self, markdown: &str) -> String {
        let title = first_heading(markdown).unwrap_or_else(|| "Article".to_string());
        let body = self.render(markdown);
        format!(
            "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<article>\n{}</article>\n</body>\n</html>\n",
            escape_text(&title),
            body
        )
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Text of the first ATX heading, any level.
fn first_heading(markdown: &str) -> Option<String> {
    markdown.lines().find_map(|line| {
        let trimmed = line.trim_start_matches('#');
        if trimmed.len() < line.len() && trimmed.starts_with(' ') {
            Some(trimmed.trim().to_string())
        } else {
            None
        }
    })
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use copyforge_core::{generate, ArticleLength, Brief, Tone};

    fn brief() -> Brief {
        Brief {
            topic: "AI content marketing strategies".into(),
            primary_keyword: "AI content marketing".into(),
            secondary_keywords: vec!["content automation".into()],
            target_audience: "B2B marketers".into(),
            tone: Tone::Professional,
            length: ArticleLength::Short,
            call_to_action: String::new(),
        }
    }

    #[test]
    fn test_render_basic_markdown() {
        let r = HtmlRenderer::new();
        let html = r.render("# Title\n\nSome **bold** text.\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_engine_output_renders_cleanly() {
        let r = HtmlRenderer::new();
        let markdown = generate(&brief()).unwrap();
        let html = r.render(&markdown);

        assert!(!html.is_empty());
        assert!(html.contains("<h1>"));
        assert!(html.contains("AI content marketing"));
        assert!(html.contains("<h2>"));
        assert!(html.contains("<ul>"));
        assert!(html.contains("<strong>Subscribe for more insights</strong>"));
    }

    #[test]
    fn test_render_document_wraps_page() {
        let r = HtmlRenderer::new();
        let page = r.render_document("# My Article\n\nBody.\n");
        assert!(page.starts_with("<!doctype html>"));
        assert!(page.contains("<title>My Article</title>"));
        assert!(page.contains("<h1>My Article</h1>"));
    }

    #[test]
    fn test_first_heading_fallback() {
        let r = HtmlRenderer::new();
        let page = r.render_document("no headings here\n");
        assert!(page.contains("<title>Article</title>"));
    }
}
