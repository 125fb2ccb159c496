//! Error taxonomy shared by the whole workspace.

use thiserror::Error;

use crate::post::PostId;

/// Every way an operation on the network or on a post can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlogError {
    /// A user name, post text, or search word was empty or whitespace-only.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Post text exceeded the 140-character ceiling.
    #[error("post text is {len} characters, limit is {limit}")]
    LimitExceeded { len: usize, limit: usize },

    /// The referenced post id is not in the network.
    #[error("no post with id {0}")]
    PostNotFound(PostId),

    /// The operation is not allowed in the current state
    /// (self-like, self-report, duplicate report).
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Result alias used by all fallible operations in the workspace.
pub type Result<T> = std::result::Result<T, BlogError>;
