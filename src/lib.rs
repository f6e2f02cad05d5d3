//! chrisrx-dev: personal website and blog
//!
//! Renders the home, blog and packages pages plus Go vanity import
//! redirects, either from an HTTP server or as static files.

pub mod commands;
pub mod components;
pub mod config;
pub mod content;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The site application
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Directory holding markdown posts
    pub posts_dir: PathBuf,
    /// Root whose `assets/` subdirectory is served under /assets/
    pub assets_dir: PathBuf,
    /// Output directory for generated files
    pub output_dir: PathBuf,
}

impl Site {
    /// Create a site rooted at `base_dir` with an explicit configuration
    pub fn new<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);
        let assets_dir = base_dir.join(&config.assets_dir);
        let output_dir = base_dir.join(&config.output_dir);

        Self {
            config,
            posts_dir,
            assets_dir,
            output_dir,
        }
    }

    /// Load all posts, newest first
    pub fn posts(&self) -> Result<Vec<content::Post>> {
        let posts = content::read_posts(&self.posts_dir)?;
        tracing::info!("Loaded {} posts from {:?}", posts.len(), self.posts_dir);
        Ok(posts)
    }

    /// Write the static site to the output directory
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Remove generated files from the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
