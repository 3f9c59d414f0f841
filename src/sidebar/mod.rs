//! Sidebar generation
//!
//! Turns the Markdown files of a documentation directory into sidebar
//! entries, and resolves the configured sidebar mapping (URL prefix to
//! groups of entries) into plain data.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::{GeneratedGroup, SidebarSection};
use crate::error::{Result, SiteError};
use crate::helpers::page_link;

/// Resolved sidebar: URL prefix to its entries, in declaration order
pub type Sidebar = IndexMap<String, Vec<SidebarItem>>;

/// A sidebar entry or group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SidebarItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

impl SidebarItem {
    /// A leaf entry pointing at a page
    pub fn page(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            items: Vec::new(),
            collapsed: None,
        }
    }

    /// A group of entries without a link of its own
    pub fn group(text: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            text: text.into(),
            link: None,
            items,
            collapsed: None,
        }
    }
}

/// Build sidebar entries from the Markdown files directly inside `dir`
///
/// A relative `dir` is taken relative to `docs_root`. Subdirectories are
/// not descended into and `index.md` is skipped. Entries come back sorted
/// by file name, each linking to the file's docs-relative path without
/// its extension.
pub fn generate_sidebar(docs_root: &Path, dir: &Path) -> Result<Vec<SidebarItem>> {
    let dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        docs_root.join(dir)
    };

    let metadata = fs::metadata(&dir).map_err(|e| SiteError::io(&dir, e))?;
    if !metadata.is_dir() {
        return Err(SiteError::io(
            &dir,
            std::io::Error::new(std::io::ErrorKind::Other, "not a directory"),
        ));
    }

    // Compare resolved paths so `..` and symlinks cannot leave the root
    let docs_root = docs_root
        .canonicalize()
        .map_err(|e| SiteError::io(docs_root, e))?;
    let dir = dir.canonicalize().map_err(|e| SiteError::io(&dir, e))?;

    if dir.strip_prefix(&docs_root).is_err() {
        return Err(SiteError::OutsideDocsRoot {
            dir,
            root: docs_root,
        });
    }

    let mut sidebar = Vec::new();

    for entry in WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.clone());
            SiteError::io(path, e.into())
        })?;

        let path = entry.path();
        if !entry.file_type().is_file() || !is_sidebar_page(path) {
            continue;
        }

        let text = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };

        let relative = path.strip_prefix(&docs_root).unwrap_or(path);
        sidebar.push(SidebarItem::page(
            text,
            page_link(&relative.to_string_lossy()),
        ));
    }

    tracing::debug!("Generated sidebar for {:?}: {:?}", dir, sidebar);

    Ok(sidebar)
}

/// Resolve the configured sidebar mapping
///
/// Hand-written sections are copied as they are. Generated sections get
/// one group per listed directory, in the order listed. Links are left
/// without the base path.
pub fn resolve_sidebar(
    sections: &IndexMap<String, SidebarSection>,
    docs_root: &Path,
) -> Result<Sidebar> {
    let mut sidebar = Sidebar::new();

    for (prefix, section) in sections {
        let items = match section {
            SidebarSection::Items(items) => items.clone(),
            SidebarSection::Generated { generate } => generate
                .iter()
                .map(|group| generate_group(docs_root, group))
                .collect::<Result<Vec<_>>>()?,
        };
        sidebar.insert(prefix.clone(), items);
    }

    Ok(sidebar)
}

fn generate_group(docs_root: &Path, group: &GeneratedGroup) -> Result<SidebarItem> {
    let dir = PathBuf::from(&group.dir);
    let items = generate_sidebar(docs_root, &dir)?;

    let text = group.text.clone().unwrap_or_else(|| {
        dir.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(&group.dir)
            .to_string()
    });

    let mut item = SidebarItem::group(text, items);
    item.collapsed = group.collapsed;
    Ok(item)
}

/// Markdown files other than `index.md`
fn is_sidebar_page(path: &Path) -> bool {
    let is_markdown = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md")
        .unwrap_or(false);
    let is_index = path.file_name().and_then(|n| n.to_str()) == Some("index.md");

    is_markdown && !is_index
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn docs_with(files: &[&str]) -> TempDir {
        let docs = tempfile::tempdir().unwrap();
        for file in files {
            let path = docs.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "# page\n").unwrap();
        }
        docs
    }

    #[test]
    fn test_generate_skips_index_and_non_markdown() {
        let docs = docs_with(&["notes/b.md", "notes/a.md", "notes/index.md", "notes/c.txt"]);

        let sidebar = generate_sidebar(docs.path(), Path::new("notes")).unwrap();

        assert_eq!(
            sidebar,
            vec![
                SidebarItem::page("a", "/notes/a"),
                SidebarItem::page("b", "/notes/b"),
            ]
        );
    }

    #[test]
    fn test_generate_does_not_recurse() {
        let docs = docs_with(&["notes/top.md", "notes/deep/nested.md"]);

        let sidebar = generate_sidebar(docs.path(), Path::new("notes")).unwrap();

        assert_eq!(sidebar, vec![SidebarItem::page("top", "/notes/top")]);
    }

    #[test]
    fn test_generate_empty_directory() {
        let docs = tempfile::tempdir().unwrap();
        fs::create_dir(docs.path().join("empty")).unwrap();

        let sidebar = generate_sidebar(docs.path(), Path::new("empty")).unwrap();

        assert!(sidebar.is_empty());
    }

    #[test]
    fn test_generate_missing_directory_fails() {
        let docs = tempfile::tempdir().unwrap();

        let result = generate_sidebar(docs.path(), Path::new("missing"));

        assert!(matches!(result, Err(SiteError::Io { .. })));
    }

    #[test]
    fn test_generate_outside_docs_root_fails() {
        let docs = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();

        let result = generate_sidebar(docs.path(), other.path());

        assert!(matches!(result, Err(SiteError::OutsideDocsRoot { .. })));
    }

    #[test]
    fn test_generate_parent_dir_outside_root_fails() {
        let site = tempfile::tempdir().unwrap();
        let docs = site.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::create_dir_all(site.path().join("secret")).unwrap();
        fs::write(site.path().join("secret/x.md"), "# x\n").unwrap();

        let result = generate_sidebar(&docs, Path::new("../secret"));

        assert!(matches!(result, Err(SiteError::OutsideDocsRoot { .. })));
    }

    #[test]
    fn test_generate_parent_dir_back_inside_root() {
        let docs = docs_with(&["notes/a.md"]);

        let sidebar = generate_sidebar(docs.path(), Path::new("notes/../notes")).unwrap();

        assert_eq!(sidebar, vec![SidebarItem::page("a", "/notes/a")]);
    }

    #[test]
    fn test_generate_is_stable() {
        let docs = docs_with(&["notes/zeta.md", "notes/alpha.md", "notes/mid.md"]);

        let first = generate_sidebar(docs.path(), Path::new("notes")).unwrap();
        let second = generate_sidebar(docs.path(), Path::new("notes")).unwrap();

        assert_eq!(first, second);
        let texts: Vec<_> = first.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_generate_accepts_absolute_dir_under_root() {
        let docs = docs_with(&["guide/setup.md"]);
        let dir = docs.path().join("guide");

        let sidebar = generate_sidebar(docs.path(), &dir).unwrap();

        assert_eq!(sidebar, vec![SidebarItem::page("setup", "/guide/setup")]);
    }

    #[test]
    fn test_resolve_mixed_sections() {
        let docs = docs_with(&["topics/rust/ownership.md", "topics/go/channels.md"]);

        let yaml = r#"
/guide/:
  - text: Guide
    items:
      - { text: Intro, link: /guide/intro }
/topics/:
  generate:
    - { text: Rust, dir: topics/rust }
    - { dir: topics/go, collapsed: true }
"#;
        let sections: IndexMap<String, SidebarSection> = serde_yaml::from_str(yaml).unwrap();

        let sidebar = resolve_sidebar(&sections, docs.path()).unwrap();

        let keys: Vec<_> = sidebar.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["/guide/", "/topics/"]);
        assert_eq!(
            sidebar["/guide/"],
            vec![SidebarItem::group(
                "Guide",
                vec![SidebarItem::page("Intro", "/guide/intro")]
            )]
        );

        let topics = &sidebar["/topics/"];
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].text, "Rust");
        assert_eq!(
            topics[0].items,
            vec![SidebarItem::page("ownership", "/topics/rust/ownership")]
        );
        assert_eq!(topics[1].text, "go");
        assert_eq!(topics[1].collapsed, Some(true));
        assert_eq!(topics[1].items[0].link.as_deref(), Some("/topics/go/channels"));
    }

    #[test]
    fn test_resolve_propagates_missing_directory() {
        let docs = tempfile::tempdir().unwrap();
        let mut sections = IndexMap::new();
        sections.insert(
            "/x/".to_string(),
            SidebarSection::Generated {
                generate: vec![GeneratedGroup {
                    text: None,
                    dir: "nope".to_string(),
                    collapsed: None,
                }],
            },
        );

        assert!(resolve_sidebar(&sections, docs.path()).is_err());
    }
}
