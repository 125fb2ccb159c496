//! The post entity - the single unit of content in the network.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BlogError, Result};

/// Maximum length of a post's text, in characters.
pub const MAX_TEXT_LEN: usize = 140;

/// Unique identifier for posts. Allocated sequentially by the network,
/// never by the post itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct PostId(pub u64);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check that a user name is usable as a network identifier.
///
/// User names are opaque strings; the only requirement is that they are
/// non-empty and not whitespace-only.
pub fn validate_username(user: &str) -> Result<()> {
    if user.trim().is_empty() {
        return Err(BlogError::InvalidArgument(
            "user name must not be blank".into(),
        ));
    }
    Ok(())
}

/// Check that post text is non-blank and within the length ceiling.
pub fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(BlogError::InvalidArgument(
            "post text must not be blank".into(),
        ));
    }
    let len = text.chars().count();
    if len > MAX_TEXT_LEN {
        return Err(BlogError::LimitExceeded {
            len,
            limit: MAX_TEXT_LEN,
        });
    }
    Ok(())
}

/// A single post.
///
/// Identity (`id`) and `author` are immutable; only the text can be replaced
/// after creation (edits and moderation redaction). The like list preserves
/// insertion order, holds no duplicates, and never contains the author.
///
/// Equality and ordering are by id alone: the network guarantees ids are
/// unique, so two distinct posts never share one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    id: PostId,
    author: String,
    text: String,
    created_at: DateTime<Utc>,
    liked_by: Vec<String>,
}

impl Post {
    /// Create a new post with a fresh timestamp and an empty like list.
    ///
    /// The id is assigned by the caller (the network), which is responsible
    /// for its uniqueness.
    pub fn new(id: PostId, author: impl Into<String>, text: impl Into<String>) -> Result<Self> {
        let author = author.into();
        let text = text.into();
        validate_username(&author)?;
        validate_text(&text)?;

        Ok(Self {
            id,
            author,
            text,
            created_at: Utc::now(),
            liked_by: Vec::new(),
        })
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Users who liked this post, in the order the likes arrived.
    pub fn likes(&self) -> &[String] {
        &self.liked_by
    }

    pub fn has_like(&self, user: &str) -> bool {
        self.liked_by.iter().any(|u| u == user)
    }

    /// Replace the text in place. Same validation as creation.
    pub fn edit_text(&mut self, new_text: impl Into<String>) -> Result<()> {
        let new_text = new_text.into();
        validate_text(&new_text)?;
        self.text = new_text;
        Ok(())
    }

    /// Record a like by `user`.
    ///
    /// Liking a post twice is not an error: the second call is a no-op and
    /// returns `false`. Authors cannot like their own posts.
    pub fn add_like(&mut self, user: &str) -> Result<bool> {
        validate_username(user)?;
        if user == self.author {
            return Err(BlogError::InvalidState(format!(
                "author {user} cannot like their own post"
            )));
        }

        if self.has_like(user) {
            return Ok(false);
        }
        self.liked_by.push(user.to_string());
        Ok(true)
    }

    /// Remove a like by `user`. Removing an absent like is a no-op that
    /// returns `false`.
    pub fn remove_like(&mut self, user: &str) -> Result<bool> {
        validate_username(user)?;

        match self.liked_by.iter().position(|u| u == user) {
            Some(index) => {
                self.liked_by.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Post {}

impl PartialOrd for Post {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Post {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::fmt::Display for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" - {}, {}", self.text, self.author, self.created_at)
    }
}
