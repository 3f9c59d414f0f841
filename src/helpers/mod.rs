//! Path and URL helpers shared by the sidebar and content loaders

mod url;

pub use url::*;
