//! Library error type

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration, scanning docs or loading posts
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Glob error: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Directory {dir:?} is outside the docs root {root:?}")]
    OutsideDocsRoot { dir: PathBuf, root: PathBuf },

    #[error("Unsupported config format: {0:?}")]
    UnsupportedConfig(PathBuf),
}

impl SiteError {
    /// Wrap an IO error with the path that caused it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
