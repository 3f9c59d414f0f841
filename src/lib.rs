//! docpress: sidebar, navigation and post listing generator for static
//! documentation sites
//!
//! Reads a `press.yml` (or `press.toml`) and a directory of Markdown
//! documents, and produces the resolved site manifest (navigation,
//! sidebars, Markdown plugins, base path) plus a date-sorted post listing.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod manifest;
pub mod sidebar;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::SiteError;

/// The main application
#[derive(Clone)]
pub struct Press {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Config file the configuration came from, if any
    pub config_path: Option<PathBuf>,
    /// Base directory
    pub base_dir: PathBuf,
    /// Documentation root
    pub docs_dir: PathBuf,
    /// Output directory
    pub out_dir: PathBuf,
}

impl Press {
    /// Create a new instance from a site directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = config::SiteConfig::find(&base_dir);

        let config = match &config_path {
            Some(path) => config::SiteConfig::load(path)?,
            None => {
                tracing::debug!("No config file in {:?}, using defaults", base_dir);
                config::SiteConfig::default()
            }
        };

        let docs_dir = base_dir.join(&config.docs_dir);
        let out_dir = base_dir.join(&config.out_dir);

        Ok(Self {
            config,
            config_path,
            base_dir,
            docs_dir,
            out_dir,
        })
    }

    /// Resolve the configured sidebar mapping
    pub fn sidebar(&self) -> Result<sidebar::Sidebar> {
        Ok(sidebar::resolve_sidebar(
            &self.config.sidebar,
            &self.docs_dir,
        )?)
    }

    /// Build the site manifest
    pub fn manifest(&self) -> Result<manifest::SiteManifest> {
        Ok(manifest::SiteManifest::build(&self.config, self.sidebar()?))
    }

    /// Load the post listing
    pub fn posts(&self) -> Result<Vec<content::PostRecord>> {
        let loader =
            content::ContentLoader::new(&self.docs_dir, self.config.base(), &self.config);
        Ok(loader.load_posts()?)
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// Write the manifest and post listing
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str, category: Option<&str>) -> Result<PathBuf> {
        commands::new::run(self, title, category)
    }
}
