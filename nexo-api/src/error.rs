use crate::CommentId;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Comment cannot be empty")]
    EmptyComment,

    #[error("Comment is {len} characters long, maximum is {max}")]
    CommentTooLong { len: usize, max: usize },

    #[error("Null byte in string is not allowed {0:?}")]
    NullByteInString(String),

    #[error("Unknown comment {0}")]
    UnknownComment(CommentId),
}
