use chrono::Utc;

mod comment;
pub use comment::{Comment, CommentId, NewComment, MAX_COMMENT_LEN};

mod error;
pub use error::Error;

mod post;
pub use post::{Post, PostId};

mod user;
pub use user::{Profile, UserId};

pub type Time = chrono::DateTime<Utc>;

pub fn validate_string(s: &str) -> Result<(), Error> {
    if s.contains('\0') {
        return Err(Error::NullByteInString(s.to_string()));
    }
    Ok(())
}
