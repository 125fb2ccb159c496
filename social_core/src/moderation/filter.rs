//! Banned-phrase filtering on post creation.

use post_model::{Post, Result};

use super::ModerationHook;

/// Marker substituted for every banned phrase occurrence.
pub const REDACTION_MARKER: &str = "***";

/// Replaces every occurrence of a banned phrase in new posts with
/// [`REDACTION_MARKER`].
///
/// Matching is literal and substring-based, not word-bounded: "badword"
/// is filtered out of "verybadwordindeed" too. The phrase set is fixed at
/// construction.
#[derive(Debug, Clone)]
pub struct ContentFilter {
    banned: Vec<String>,
}

impl ContentFilter {
    /// Create a filter over the given phrases. Any blank phrase is
    /// rejected.
    pub fn new(banned: impl IntoIterator<Item = impl Into<String>>) -> Result<Self> {
        let banned: Vec<String> = banned.into_iter().map(Into::into).collect();
        for phrase in &banned {
            if phrase.trim().is_empty() {
                return Err(post_model::BlogError::InvalidArgument(
                    "banned phrase must not be blank".into(),
                ));
            }
        }
        Ok(Self { banned })
    }

    /// The configured phrases, in application order.
    pub fn banned_phrases(&self) -> &[String] {
        &self.banned
    }
}

impl ModerationHook for ContentFilter {
    fn on_post_created(&self, post: &mut Post) -> Result<()> {
        let mut filtered = post.text().to_string();
        for phrase in &self.banned {
            filtered = filtered.replace(phrase.as_str(), REDACTION_MARKER);
        }

        // edit_text re-validates, so a replacement that blows the length
        // ceiling fails the whole creation instead of storing bad state.
        if filtered != post.text() {
            post.edit_text(filtered)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use post_model::{BlogError, PostId};

    #[test]
    fn test_replaces_every_occurrence() {
        let filter = ContentFilter::new(["darn"]).unwrap();
        let mut post = Post::new(PostId(0), "alice", "darn it, darn it all").unwrap();

        filter.on_post_created(&mut post).unwrap();
        assert_eq!(post.text(), "*** it, *** it all");
    }

    #[test]
    fn test_substring_matching() {
        let filter = ContentFilter::new(["darn"]).unwrap();
        let mut post = Post::new(PostId(0), "alice", "that is darnright rude").unwrap();

        filter.on_post_created(&mut post).unwrap();
        assert_eq!(post.text(), "that is ***right rude");
    }

    #[test]
    fn test_clean_text_untouched() {
        let filter = ContentFilter::new(["darn"]).unwrap();
        let mut post = Post::new(PostId(0), "alice", "perfectly polite").unwrap();

        filter.on_post_created(&mut post).unwrap();
        assert_eq!(post.text(), "perfectly polite");
    }

    #[test]
    fn test_multiple_phrases_apply_in_order() {
        let filter = ContentFilter::new(["foo", "bar"]).unwrap();
        let mut post = Post::new(PostId(0), "alice", "foo and bar walk in").unwrap();

        filter.on_post_created(&mut post).unwrap();
        assert_eq!(post.text(), "*** and *** walk in");
    }

    #[test]
    fn test_blank_phrase_rejected() {
        assert!(matches!(
            ContentFilter::new(["ok", "  "]),
            Err(BlogError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_filter_result_over_ceiling_fails() {
        // A short phrase expanded to the marker can push the text over the
        // 140-character limit; that must surface as LimitExceeded.
        let filter = ContentFilter::new(["x"]).unwrap();
        let text = "x ".repeat(70); // 140 chars, becomes 210 after filtering
        let mut post = Post::new(PostId(0), "alice", text.trim_end()).unwrap();

        assert!(matches!(
            filter.on_post_created(&mut post),
            Err(BlogError::LimitExceeded { .. })
        ));
    }
}
