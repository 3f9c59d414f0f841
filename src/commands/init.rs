//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Press;

const CONFIG_TEMPLATE: &str = r#"# docpress configuration

# Site
title: My Docs
description: ''
lang: en-US

# URL
base: /
clean_urls: false

# Directory
docs_dir: docs
out_dir: dist
posts_pattern: posts/*/*.md

# Navigation
nav:
  - { text: Home, link: / }
  - { text: Posts, link: /posts/ }

sidebar:
  /guide/:
    generate:
      - { text: Guide, dir: guide }

social_links: []

# Extra stylesheets linked from <head>
stylesheets: []

# Writing
markdown:
  plugins: [footnote]
  excerpt_separator: '<!-- more -->'

posts:
  include_src: false
  render: false
  excerpt: true
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("press.yml");
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    let docs = target_dir.join("docs");
    fs::create_dir_all(docs.join("posts/notes"))?;
    fs::create_dir_all(docs.join("guide"))?;

    fs::write(&config_path, CONFIG_TEMPLATE)?;

    fs::write(
        docs.join("index.md"),
        "---\ntitle: Home\n---\n\n# Welcome\n\nStart with the [guide](/guide/getting-started).\n",
    )?;

    fs::write(
        docs.join("guide/getting-started.md"),
        r#"# Getting Started

Every Markdown file in `docs/guide` shows up in the guide sidebar.

```bash
$ docpress generate
```
"#,
    )?;

    let now = chrono::Local::now();
    fs::write(
        docs.join("posts/notes/hello-world.md"),
        format!(
            "---\ntitle: Hello World\ndate: {}\n---\n\nYour first post.\n\n<!-- more -->\n\nPosts live two levels under `docs/posts`.\n",
            now.format("%Y-%m-%d %H:%M:%S")
        ),
    )?;

    Ok(())
}

/// Run the init command with an existing instance
pub fn run(press: &Press) -> Result<()> {
    init_site(&press.base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_buildable_site() {
        let site = tempfile::tempdir().unwrap();
        init_site(site.path()).unwrap();

        let press = Press::new(site.path()).unwrap();
        assert_eq!(press.config.title, "My Docs");

        let sidebar = press.sidebar().unwrap();
        assert_eq!(
            sidebar["/guide/"][0].items[0].link.as_deref(),
            Some("/guide/getting-started")
        );

        let posts = press.posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title(), "Hello World");
        assert!(posts[0].excerpt.is_some());
    }

    #[test]
    fn test_init_new_folder_through_press() {
        let parent = tempfile::tempdir().unwrap();
        let target = parent.path().join("my-site");

        Press::new(&target).unwrap().init().unwrap();

        assert!(target.join("press.yml").exists());
        assert!(target.join("docs/guide/getting-started.md").exists());
        let press = Press::new(&target).unwrap();
        assert_eq!(press.config_path, Some(target.join("press.yml")));
    }

    #[test]
    fn test_init_refuses_existing_site() {
        let site = tempfile::tempdir().unwrap();
        init_site(site.path()).unwrap();
        assert!(init_site(site.path()).is_err());
    }
}
