//! Markdown rendering with the configured plugins

use pulldown_cmark::{html, Options, Parser};

use crate::config::{MarkdownConfig, MarkdownPlugin};

/// Markdown renderer
///
/// Plugins are global: once registered they apply to every document.
pub struct MarkdownRenderer {
    options: Options,
    excerpt_separator: String,
}

impl MarkdownRenderer {
    /// Create a renderer with the plugins of `config` enabled
    pub fn new(config: &MarkdownConfig) -> Self {
        // Front-matter is stripped before rendering, so YAML metadata
        // blocks stay off
        let mut options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES;

        for plugin in &config.plugins {
            options |= match plugin {
                MarkdownPlugin::Footnote => Options::ENABLE_FOOTNOTES,
                MarkdownPlugin::Math => Options::ENABLE_MATH,
            };
        }

        tracing::debug!("Markdown plugins: {:?}", config.plugins);

        Self {
            options,
            excerpt_separator: config.excerpt_separator.clone(),
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }

    /// Text before the excerpt separator, if the document has one
    pub fn split_excerpt<'a>(&self, content: &'a str) -> Option<&'a str> {
        content
            .find(&self.excerpt_separator)
            .map(|pos| content[..pos].trim())
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(&MarkdownConfig::default())
    }
}
