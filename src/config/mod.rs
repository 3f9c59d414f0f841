//! Configuration module

mod site;

pub use site::GeneratedGroup;
pub use site::MarkdownConfig;
pub use site::MarkdownPlugin;
pub use site::NavItem;
pub use site::PostsConfig;
pub use site::SidebarSection;
pub use site::SiteConfig;
pub use site::SocialLink;
pub use site::CONFIG_FILES;
