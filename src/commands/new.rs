//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Press;

/// Category used when none is given
pub const DEFAULT_CATEGORY: &str = "notes";

/// Create `posts/<category>/<slug>.md` with title and date front-matter
pub fn create_post(press: &Press, title: &str, category: Option<&str>) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let category = slug::slugify(category.unwrap_or(DEFAULT_CATEGORY));
    let mut file_name = slug::slugify(title);
    if file_name.is_empty() {
        file_name = now.format("%Y%m%d%H%M%S").to_string();
    }

    let target_dir = press.docs_dir.join("posts").join(&category);
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(format!("{}.md", file_name));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        "---\ntitle: {}\ndate: {}\n---\n\n",
        serde_yaml::to_string(title)?.trim_end(),
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Run the new command
pub fn run(press: &Press, title: &str, category: Option<&str>) -> Result<PathBuf> {
    create_post(press, title, category)
}
