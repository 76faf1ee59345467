use crate::{api::Post, excerpt, EXCERPT_LEN};

pub trait PostExt {
    fn excerpt(&self) -> String;
}

impl PostExt for Post {
    /// Plain-text preview for the blog list
    fn excerpt(&self) -> String {
        excerpt(&self.content as &str, EXCERPT_LEN)
    }
}
