//! Content module - handles posts and markdown processing

pub mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use loader::{read_posts, LoadError};
pub use markdown::MarkdownRenderer;
pub use post::Post;
