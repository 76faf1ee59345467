use std::{collections::HashSet, fmt};

use crate::{Error, PostId, Time, UserId};

/// Longest comment body accepted on submission, in characters
pub const MAX_COMMENT_LEN: usize = 1000;

#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub String);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for CommentId {
    fn from(s: &str) -> CommentId {
        CommentId(s.to_string())
    }
}

/// A comment as stored by the backend, one flat record per comment
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub text: String,

    #[serde(alias = "userId")]
    pub author_id: UserId,
    #[serde(alias = "userName")]
    pub author_display_name: String,
    #[serde(default, alias = "userAvatar")]
    pub author_avatar_url: Option<String>,

    pub created_at: Time,

    /// None for top-level comments
    #[serde(default, alias = "parentCommentId")]
    pub parent_id: Option<CommentId>,

    #[serde(default, alias = "likes")]
    pub liked_by: HashSet<UserId>,
}

impl Comment {
    pub fn has_liked(&self, user: &UserId) -> bool {
        self.liked_by.contains(user)
    }

    pub fn like_count(&self) -> usize {
        self.liked_by.len()
    }

    /// Returns whether `user` likes the comment after the toggle
    pub fn toggle_like(&mut self, user: UserId) -> bool {
        if self.liked_by.remove(&user) {
            false
        } else {
            self.liked_by.insert(user);
            true
        }
    }
}

/// A comment as submitted by a user, before the backend assigned it an id
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    pub post_id: PostId,
    pub parent_id: Option<CommentId>,
    pub text: String,
}

impl NewComment {
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.text)?;
        if self.text.trim().is_empty() {
            return Err(Error::EmptyComment);
        }
        let len = self.text.chars().count();
        if len > MAX_COMMENT_LEN {
            return Err(Error::CommentTooLong {
                len,
                max: MAX_COMMENT_LEN,
            });
        }
        Ok(())
    }
}
