//! The moderation extension point.

use post_model::{Post, Result};

/// A moderation behavior invoked by the network around its own mutations.
///
/// Both methods default to no-ops so a hook only implements the phase it
/// cares about. Hooks run before a created post is inserted, so an error
/// from [`on_post_created`](Self::on_post_created) fails the whole creation
/// and leaves the network untouched.
pub trait ModerationHook: std::fmt::Debug + Send + Sync {
    /// Inspect or rewrite a freshly validated post before it is stored.
    fn on_post_created(&self, post: &mut Post) -> Result<()> {
        let _ = post;
        Ok(())
    }

    /// React to a successful report. `distinct_reports` is the number of
    /// distinct users that have reported this post so far, including the
    /// current one.
    fn on_post_reported(&self, post: &mut Post, distinct_reports: usize) -> Result<()> {
        let _ = (post, distinct_reports);
        Ok(())
    }
}
