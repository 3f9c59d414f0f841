//! Site configuration (press.yml / press.toml)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SiteError};
use crate::sidebar::SidebarItem;

/// Config file names probed in a site directory, in priority order
pub const CONFIG_FILES: [&str; 3] = ["press.yml", "press.yaml", "press.toml"];

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub lang: String,

    // URL
    pub base: String,
    pub clean_urls: bool,

    // Directory
    pub docs_dir: String,
    pub out_dir: String,
    pub posts_pattern: String,

    // Theme
    pub nav: Vec<NavItem>,
    pub sidebar: IndexMap<String, SidebarSection>,
    pub social_links: Vec<SocialLink>,
    pub stylesheets: Vec<String>,

    // Writing
    pub markdown: MarkdownConfig,
    pub posts: PostsConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "docpress".to_string(),
            description: String::new(),
            lang: "en-US".to_string(),

            base: "/".to_string(),
            clean_urls: false,

            docs_dir: "docs".to_string(),
            out_dir: "dist".to_string(),
            posts_pattern: "posts/*/*.md".to_string(),

            nav: vec![
                NavItem::new("Home", "/"),
                NavItem::new("Posts", "/posts/"),
            ],
            sidebar: IndexMap::new(),
            social_links: Vec::new(),
            stylesheets: Vec::new(),

            markdown: MarkdownConfig::default(),
            posts: PostsConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a YAML or TOML file, picked by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;

        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => serde_yaml::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => return Err(SiteError::UnsupportedConfig(path.to_path_buf())),
        };

        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Find the first config file present in a site directory
    pub fn find<P: AsRef<Path>>(base_dir: P) -> Option<PathBuf> {
        CONFIG_FILES
            .iter()
            .map(|name| base_dir.as_ref().join(name))
            .find(|path| path.exists())
    }

    /// The site-wide base path
    pub fn base(&self) -> &str {
        &self.base
    }
}

/// A top navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

impl NavItem {
    pub fn new(text: &str, link: &str) -> Self {
        Self {
            text: text.to_string(),
            link: link.to_string(),
        }
    }
}

/// A social icon link shown in the navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    pub link: String,
}

/// One sidebar section keyed by URL prefix
///
/// Either written out by hand, or generated from documentation
/// directories:
///
/// ```yaml
/// sidebar:
///   /guide/:
///     - text: Guide
///       items:
///         - { text: Intro, link: /guide/intro }
///   /notes/:
///     generate:
///       - { text: Rust, dir: notes/rust }
///       - { dir: notes/go, collapsed: true }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarSection {
    Generated { generate: Vec<GeneratedGroup> },
    Items(Vec<SidebarItem>),
}

/// A sidebar group filled from the Markdown files of one directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedGroup {
    /// Group title; defaults to the directory name
    #[serde(default)]
    pub text: Option<String>,
    /// Directory, relative to the docs root
    pub dir: String,
    #[serde(default)]
    pub collapsed: Option<bool>,
}

/// Markdown rendering extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownPlugin {
    #[serde(alias = "footnotes")]
    Footnote,
    #[serde(alias = "katex", alias = "mathjax")]
    Math,
}

/// Markdown configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub plugins: Vec<MarkdownPlugin>,
    pub excerpt_separator: String,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            plugins: Vec::new(),
            excerpt_separator: "<!-- more -->".to_string(),
        }
    }
}

impl MarkdownConfig {
    pub fn has_plugin(&self, plugin: MarkdownPlugin) -> bool {
        self.plugins.contains(&plugin)
    }
}

/// What the post listing carries besides url and frontmatter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostsConfig {
    /// Keep the raw Markdown body
    pub include_src: bool,
    /// Render the body to HTML
    pub render: bool,
    /// Render the text before the excerpt separator
    pub excerpt: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.base(), "/");
        assert_eq!(config.docs_dir, "docs");
        assert_eq!(config.posts_pattern, "posts/*/*.md");
        assert_eq!(config.nav.len(), 2);
        assert_eq!(config.nav[1], NavItem::new("Posts", "/posts/"));
        assert!(config.markdown.plugins.is_empty());
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
title: My Notes
base: /notes/
nav:
  - { text: Home, link: / }
sidebar:
  /guide/:
    - text: Guide
      items:
        - { text: Intro, link: /guide/intro }
  /topics/:
    generate:
      - { text: Rust, dir: topics/rust }
      - { dir: topics/go, collapsed: true }
markdown:
  plugins: [footnote, katex]
social_links:
  - { icon: github, link: "https://github.com/example" }
analytics: abc
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Notes");
        assert_eq!(config.base(), "/notes/");
        assert_eq!(config.nav, vec![NavItem::new("Home", "/")]);
        assert!(config.markdown.has_plugin(MarkdownPlugin::Footnote));
        assert!(config.markdown.has_plugin(MarkdownPlugin::Math));
        assert_eq!(config.social_links[0].icon, "github");
        assert!(config.extra.contains_key("analytics"));

        let keys: Vec<_> = config.sidebar.keys().cloned().collect();
        assert_eq!(keys, vec!["/guide/", "/topics/"]);

        match &config.sidebar["/guide/"] {
            SidebarSection::Items(items) => {
                assert_eq!(items[0].text, "Guide");
                assert_eq!(items[0].items[0].link.as_deref(), Some("/guide/intro"));
            }
            other => panic!("expected items, got {:?}", other),
        }

        match &config.sidebar["/topics/"] {
            SidebarSection::Generated { generate } => {
                assert_eq!(generate.len(), 2);
                assert_eq!(generate[0].text.as_deref(), Some("Rust"));
                assert_eq!(generate[1].dir, "topics/go");
                assert_eq!(generate[1].collapsed, Some(true));
            }
            other => panic!("expected generated, got {:?}", other),
        }
    }

    #[test]
    fn test_load_toml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("press.toml");
        fs::write(
            &path,
            r#"
title = "Toml Site"
base = "/blog/"
stylesheets = ["https://cdn.example.com/katex.min.css"]

[markdown]
plugins = ["math"]

[[sidebar."/notes/".generate]]
dir = "notes"
"#,
        )
        .unwrap();

        assert_eq!(SiteConfig::find(dir.path()), Some(path.clone()));

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, "Toml Site");
        assert_eq!(config.base(), "/blog/");
        assert_eq!(config.stylesheets.len(), 1);
        assert!(config.markdown.has_plugin(MarkdownPlugin::Math));
        assert!(matches!(
            config.sidebar["/notes/"],
            SidebarSection::Generated { .. }
        ));
    }

    #[test]
    fn test_unsupported_config_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("press.ini");
        fs::write(&path, "title=x").unwrap();
        assert!(matches!(
            SiteConfig::load(&path),
            Err(SiteError::UnsupportedConfig(_))
        ));
    }
}
