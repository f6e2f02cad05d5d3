//! Post loader - reads markdown posts from a directory tree

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::frontmatter;
use super::Post;

/// Errors that abort a post scan
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to walk posts directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path:?} is not valid UTF-8")]
    Encoding { path: PathBuf },

    #[error("missing header in {path:?}")]
    MissingHeader { path: PathBuf },

    #[error("invalid front matter in {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Load every `.md` file under `root`, newest first.
///
/// The first malformed post fails the whole scan. Posts with equal dates
/// keep the order in which they were found (file name order).
pub fn read_posts<P: AsRef<Path>>(root: P) -> Result<Vec<Post>, LoadError> {
    let mut posts = Vec::new();

    for entry in WalkDir::new(root.as_ref()).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_markdown_file(path) {
            continue;
        }
        tracing::debug!("Loading post {:?}", path);
        posts.push(load_post(path)?);
    }

    // Stable, so equal dates keep discovery order
    posts.sort_by(|a, b| b.published.cmp(&a.published));

    Ok(posts)
}

/// Load a single post from a file
pub fn load_post(path: &Path) -> Result<Post, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data = String::from_utf8(bytes).map_err(|_| LoadError::Encoding {
        path: path.to_path_buf(),
    })?;
    parse_post(&data).map_err(|e| match e {
        ParseError::MissingHeader => LoadError::MissingHeader {
            path: path.to_path_buf(),
        },
        ParseError::Yaml(source) => LoadError::Yaml {
            path: path.to_path_buf(),
            source,
        },
    })
}

enum ParseError {
    MissingHeader,
    Yaml(serde_yaml::Error),
}

fn parse_post(data: &str) -> Result<Post, ParseError> {
    let (header, body) = frontmatter::split(data).ok_or(ParseError::MissingHeader)?;
    let mut post: Post = serde_yaml::from_str(header).map_err(ParseError::Yaml)?;
    post.content = body.to_string();
    Ok(post)
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().map(|e| e == "md").unwrap_or(false)
}
