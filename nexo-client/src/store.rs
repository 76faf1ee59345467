use std::{collections::HashMap, sync::Arc};

use crate::{
    api::{Comment, CommentId, Error, PostId, UserId},
    build_comment_tree, CommentNode,
};

/// Latest known comments of each post, as received from the backend
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommentStore {
    posts: Arc<HashMap<PostId, Vec<Comment>>>,
}

impl CommentStore {
    pub fn new() -> CommentStore {
        CommentStore::default()
    }

    /// Replaces everything known about `post` with a fresh backend snapshot
    pub fn replace_snapshot(&mut self, post: PostId, comments: Vec<Comment>) {
        tracing::debug!(%post, num_comments = comments.len(), "received comment snapshot");
        Arc::make_mut(&mut self.posts).insert(post, comments);
    }

    /// Adds `comment` to `post`, replacing any comment with the same id
    pub fn add_comment(&mut self, post: PostId, comment: Comment) {
        let comments = Arc::make_mut(&mut self.posts).entry(post).or_default();
        match comments.iter_mut().find(|c| c.id == comment.id) {
            Some(c) => *c = comment,
            None => comments.push(comment),
        }
    }

    pub fn comments(&self, post: &PostId) -> &[Comment] {
        self.posts.get(post).map(|c| c as &[Comment]).unwrap_or(&[])
    }

    pub fn comment_count(&self, post: &PostId) -> usize {
        self.comments(post).len()
    }

    pub fn thread(&self, post: &PostId) -> Vec<CommentNode> {
        build_comment_tree(self.comments(post))
    }

    /// Returns whether `user` likes the comment after the toggle
    pub fn toggle_like(
        &mut self,
        post: &PostId,
        comment: &CommentId,
        user: UserId,
    ) -> Result<bool, Error> {
        let not_found = || Error::UnknownComment(comment.clone());
        let comments = Arc::make_mut(&mut self.posts)
            .get_mut(post)
            .ok_or_else(not_found)?;
        let c = comments
            .iter_mut()
            .find(|c| c.id == *comment)
            .ok_or_else(not_found)?;
        Ok(c.toggle_like(user))
    }
}
