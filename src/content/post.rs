//! Post model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::frontmatter::deserialize_date;

/// A blog post parsed from one markdown file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication date
    #[serde(alias = "date", deserialize_with = "deserialize_date")]
    pub published: DateTime<Utc>,

    /// Short summary shown under the title
    #[serde(default)]
    pub description: Option<String>,

    /// Post tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Raw markdown following the front matter
    #[serde(skip_deserializing)]
    pub content: String,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Post {
    /// URL-friendly name, used as the post's anchor on the blog page
    pub fn slug(&self) -> String {
        slug::slugify(&self.title)
    }
}
