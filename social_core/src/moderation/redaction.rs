//! Threshold-based auto-redaction from accumulated reports.

use post_model::{Post, Result};

use super::ModerationHook;

/// Fixed text a redacted post is left with.
pub const REDACTED_PLACEHOLDER: &str = "content removed";

/// Replaces a post's text with [`REDACTED_PLACEHOLDER`] once the number of
/// distinct reporters reaches the threshold.
///
/// Redaction is one-way: there is no un-redaction path, and reports past
/// the threshold leave the placeholder in place.
#[derive(Debug, Clone, Copy)]
pub struct RedactionPolicy {
    threshold: usize,
}

impl RedactionPolicy {
    pub const DEFAULT_THRESHOLD: usize = 5;

    /// Create a policy that redacts at `threshold` distinct reports.
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl Default for RedactionPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl ModerationHook for RedactionPolicy {
    fn on_post_reported(&self, post: &mut Post, distinct_reports: usize) -> Result<()> {
        if distinct_reports >= self.threshold && post.text() != REDACTED_PLACEHOLDER {
            post.edit_text(REDACTED_PLACEHOLDER)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use post_model::PostId;

    #[test]
    fn test_redacts_at_threshold() {
        let policy = RedactionPolicy::new(2);
        let mut post = Post::new(PostId(0), "alice", "rude things").unwrap();

        policy.on_post_reported(&mut post, 1).unwrap();
        assert_eq!(post.text(), "rude things");

        policy.on_post_reported(&mut post, 2).unwrap();
        assert_eq!(post.text(), REDACTED_PLACEHOLDER);
    }

    #[test]
    fn test_redaction_is_terminal() {
        let policy = RedactionPolicy::new(2);
        let mut post = Post::new(PostId(0), "alice", "rude things").unwrap();

        policy.on_post_reported(&mut post, 2).unwrap();
        policy.on_post_reported(&mut post, 3).unwrap();
        assert_eq!(post.text(), REDACTED_PLACEHOLDER);
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(RedactionPolicy::default().threshold(), 5);
    }
}
