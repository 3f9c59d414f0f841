//! List site content

use anyhow::Result;

use crate::sidebar::SidebarItem;
use crate::Press;

/// List site content by type
pub fn run(press: &Press, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = press.posts()?;
            println!("Posts ({}):", posts.len());
            for post in posts {
                let date = post
                    .date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "----------".to_string());
                println!("  {} - {} [{}]", date, post.title(), post.url);
            }
        }
        "sidebar" | "sidebars" => {
            let sidebar = press.sidebar()?;
            println!("Sidebar ({}):", sidebar.len());
            for (prefix, items) in &sidebar {
                println!("  {}", prefix);
                print_items(items, 2);
            }
        }
        "nav" => {
            println!("Nav ({}):", press.config.nav.len());
            for item in &press.config.nav {
                println!("  {} -> {}", item.text, item.link);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, sidebar, nav",
                content_type
            );
        }
    }

    Ok(())
}

fn print_items(items: &[SidebarItem], depth: usize) {
    let indent = "  ".repeat(depth);
    for item in items {
        match &item.link {
            Some(link) => println!("{}{} -> {}", indent, item.text, link),
            None => println!("{}{}", indent, item.text),
        }
        print_items(&item.items, depth + 1);
    }
}
