mod comment;
pub use comment::{CommentNode, DepthFirst};

mod markdown;
pub use markdown::{excerpt, strip_markdown, EXCERPT_LEN};

mod post;
pub use post::PostExt;

mod store;
pub use store::CommentStore;

mod tree;
pub use tree::build_comment_tree;

#[cfg(test)]
mod fuzz;

pub mod api {
    pub use nexo_api::*;
}

pub mod prelude {
    pub use crate::PostExt;
}
