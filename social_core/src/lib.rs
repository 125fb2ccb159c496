//! # Social Core
//!
//! The in-memory micro-blog network. This crate owns all posts and the
//! derived follow graph, and layers the read-only query engine and the
//! moderation extensions on top of the store.
//!
//! ## Core Components
//!
//! - **network**: the [`MicroBlog`] store - post creation, liking/unliking,
//!   reporting, and incremental maintenance of the follow graph
//! - **query**: pure, read-only views - authorship and keyword filters,
//!   relevance ranking, influencer detection, follow-graph inference
//! - **moderation**: composable hooks around creation and reporting -
//!   banned-phrase filtering and report-threshold redaction
//!
//! ## Design Philosophy
//!
//! - **Derived, never edited**: the follow graph is a materialized view over
//!   "has liked at least one post by"; only the like/unlike paths touch it
//! - **All-or-nothing mutations**: every operation validates eagerly and
//!   leaves the network untouched on failure
//! - **Encapsulated state**: callers only ever receive copies; no returned
//!   value aliases the store's internals
//!
//! ## Concurrency
//!
//! [`MicroBlog`] has no internal locking: every operation is a synchronous
//! read-modify-write against the shared maps. Concurrent callers must
//! serialize access per instance (e.g. `Mutex<MicroBlog>`); the type is
//! `Send + Sync` so that works out of the box. Interleaving a query with an
//! in-flight mutation could otherwise observe a post that is indexed but
//! not yet reflected in the follow graph.

pub mod moderation;
pub mod network;
pub mod query;

pub use moderation::*;
pub use network::*;
pub use query::*;
