use std::fmt;

use crate::{Time, UserId};

#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct PostId(pub String);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> PostId {
        PostId(s.to_string())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,

    /// Markdown source
    pub content: String,

    #[serde(default)]
    pub tags: Vec<String>,
    pub published_at: Time,
    pub status: String,
    pub author_id: Option<UserId>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == "published"
    }
}
