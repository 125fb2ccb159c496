//! Moderation extensions - composable hooks around post creation and
//! reporting.
//!
//! Instead of layering behaviors through subtyping, the network carries a
//! list of [`ModerationHook`]s and invokes them inside its own mutation
//! surface. Hooks compose in registration order:
//! - [`ContentFilter`] rewrites banned phrases out of newly created posts
//! - [`RedactionPolicy`] blanks a post once enough distinct users report it

mod config;
mod filter;
mod hook;
mod redaction;

pub use config::*;
pub use filter::*;
pub use hook::*;
pub use redaction::*;
