//! URL helper functions

/// Prefix a site path with the base path, collapsing the slash between them
///
/// # Examples
/// ```ignore
/// join_base("/blog/", "/posts/foo") // -> "/blog/posts/foo"
/// ```
pub fn join_base(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if base.is_empty() {
        format!("/{}", path)
    } else if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Turn a docs-relative Markdown path into a site link
///
/// Backslashes become forward slashes, a leading `./` is dropped and the
/// `.md` extension is removed.
///
/// # Examples
/// ```ignore
/// page_link("./guide\\intro.md") // -> "/guide/intro"
/// ```
pub fn page_link(relative: &str) -> String {
    let path = relative.replace('\\', "/");
    let path = path.strip_prefix("./").unwrap_or(&path);
    let path = path.strip_suffix(".md").unwrap_or(path);
    format!("/{}", path.trim_start_matches('/'))
}

/// URL a page is served at
///
/// `index.md` maps to its directory. Other pages end in `.html` unless
/// clean URLs are on.
///
/// # Examples
/// ```ignore
/// page_url("posts/rust/hello.md", false) // -> "/posts/rust/hello.html"
/// page_url("posts/index.md", true)       // -> "/posts/"
/// ```
pub fn page_url(relative: &str, clean_urls: bool) -> String {
    let link = page_link(relative);

    if link == "/index" {
        "/".to_string()
    } else if let Some(dir) = link.strip_suffix("/index") {
        format!("{}/", dir)
    } else if clean_urls {
        link
    } else {
        format!("{}.html", link)
    }
}
