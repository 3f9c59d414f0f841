//! Site manifest - the resolved configuration handed to the site build

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{MarkdownPlugin, NavItem, SiteConfig, SocialLink};
use crate::sidebar::Sidebar;

/// A `<head>` tag: name and attributes, serialized as `["link", {...}]`
pub type HeadTag = (String, IndexMap<String, String>);

/// The produced site configuration object
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteManifest {
    pub title: String,
    pub description: String,
    pub lang: String,
    pub base: String,
    pub clean_urls: bool,
    pub head: Vec<HeadTag>,
    pub markdown: MarkdownManifest,
    pub theme_config: ThemeManifest,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkdownManifest {
    pub plugins: Vec<MarkdownPlugin>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeManifest {
    pub nav: Vec<NavItem>,
    pub sidebar: Sidebar,
    pub social_links: Vec<SocialLink>,
}

impl SiteManifest {
    /// Assemble the manifest from config and an already resolved sidebar
    pub fn build(config: &SiteConfig, sidebar: Sidebar) -> Self {
        let head = config
            .stylesheets
            .iter()
            .map(|href| {
                let mut attrs = IndexMap::new();
                attrs.insert("rel".to_string(), "stylesheet".to_string());
                attrs.insert("href".to_string(), href.clone());
                ("link".to_string(), attrs)
            })
            .collect();

        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            lang: config.lang.clone(),
            base: config.base().to_string(),
            clean_urls: config.clean_urls,
            head,
            markdown: MarkdownManifest {
                plugins: config.markdown.plugins.clone(),
            },
            theme_config: ThemeManifest {
                nav: config.nav.clone(),
                sidebar,
                social_links: config.social_links.clone(),
            },
        }
    }
}
