//! Content loader - loads the post listing from the docs directory

use std::fs;
use std::path::{Path, PathBuf};

use super::{FrontMatter, MarkdownRenderer, PostRecord};
use crate::config::{PostsConfig, SiteConfig};
use crate::error::{Result, SiteError};
use crate::helpers::{join_base, page_url};

/// Loads posts matching the configured pattern under the docs root
pub struct ContentLoader<'a> {
    docs_dir: &'a Path,
    base: &'a str,
    pattern: &'a str,
    clean_urls: bool,
    options: &'a PostsConfig,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a loader; `base` is prefixed to every post URL
    pub fn new(docs_dir: &'a Path, base: &'a str, config: &'a SiteConfig) -> Self {
        Self {
            docs_dir,
            base,
            pattern: &config.posts_pattern,
            clean_urls: config.clean_urls,
            options: &config.posts,
            renderer: MarkdownRenderer::new(&config.markdown),
        }
    }

    /// Load every post, newest first, with base-prefixed URLs
    pub fn load_posts(&self) -> Result<Vec<PostRecord>> {
        let mut posts = self
            .discover()?
            .iter()
            .map(|path| self.load_post(path))
            .collect::<Result<Vec<_>>>()?;

        // Stable, so posts with equal dates keep path order
        posts.sort_by(PostRecord::cmp_newest_first);

        for post in &mut posts {
            post.url = join_base(self.base, &post.url);
        }

        tracing::info!("Loaded {} posts from {:?}", posts.len(), self.docs_dir);

        Ok(posts)
    }

    /// Markdown files matching the pattern, in path order
    fn discover(&self) -> Result<Vec<PathBuf>> {
        // The docs path is literal; only the configured pattern may match
        let root = glob::Pattern::escape(&self.docs_dir.to_string_lossy());
        let pattern = Path::new(&root).join(self.pattern);
        let mut paths = Vec::new();

        for entry in glob::glob(&pattern.to_string_lossy())? {
            let path = entry?;
            if path.is_file() && is_markdown_file(&path) {
                paths.push(path);
            }
        }

        Ok(paths)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<PostRecord> {
        let content = fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
        let (fm, body) = FrontMatter::parse(&content);

        let source = path
            .strip_prefix(self.docs_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        if fm.parse_date().is_none() {
            tracing::debug!("Post {} has no usable date, listing it last", source);
        }

        let url = page_url(&source, self.clean_urls);
        let mut post = PostRecord::new(url, fm, source);

        if self.options.include_src {
            post.src = Some(body.to_string());
        }
        if self.options.render {
            post.html = Some(self.renderer.render(body));
        }
        if self.options.excerpt {
            post.excerpt = self
                .renderer
                .split_excerpt(body)
                .map(|excerpt| self.renderer.render(excerpt));
        }

        Ok(post)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md")
        .unwrap_or(false)
}
