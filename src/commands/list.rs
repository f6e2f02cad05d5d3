//! List site content

use anyhow::Result;

use crate::Site;

/// List posts or modules
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = site.posts()?;
            println!("Posts ({}):", posts.len());
            for post in posts {
                if post.tags.is_empty() {
                    println!("  {} - {}", post.published.format("%Y-%m-%d"), post.title);
                } else {
                    println!(
                        "  {} - {} [{}]",
                        post.published.format("%Y-%m-%d"),
                        post.title,
                        post.tags.join(", ")
                    );
                }
            }
        }
        "module" | "modules" => {
            println!("Modules ({}):", site.config.modules.len());
            for module in &site.config.modules {
                println!(
                    "  {} -> {}",
                    site.config.import_path(module),
                    site.config.repo_url(module)
                );
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, module", content_type);
        }
    }

    Ok(())
}
