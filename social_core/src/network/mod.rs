//! Network store - owns every post and the derived follow graph.
//!
//! The follow graph is a materialized view over "has liked at least one post
//! by", maintained incrementally by [`MicroBlog::like_post`] and
//! [`MicroBlog::unlike_post`]. No other code path writes to it.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use post_model::{validate_username, BlogError, Post, PostId, Result};

use crate::moderation::{ModerationConfig, ModerationHook};

/// The in-memory micro-blog network.
///
/// Invariants, maintained by every public operation:
/// 1. A post is indexed by its own id and appears in exactly one author's set.
/// 2. Every author who has ever posted has a (possibly empty) follow entry.
/// 3. `author ∈ followed_by[user]` iff `user` has liked at least one of
///    `author`'s posts (for users that are members themselves).
/// 4. Ids are allocated by a per-instance counter and never reused.
#[derive(Debug, Default)]
pub struct MicroBlog {
    /// Primary lookup. Ids are monotonic, so iteration order is creation
    /// order - the stable order every "all posts" view is documented to use.
    post_index: BTreeMap<PostId, Post>,

    /// Author -> ids of the posts they wrote.
    posts_by_author: HashMap<String, BTreeSet<PostId>>,

    /// User -> users they follow. Derived, never edited directly.
    followed_by: HashMap<String, HashSet<String>>,

    /// Post id -> distinct users who reported it.
    reports: HashMap<PostId, HashSet<String>>,

    /// Next fresh post id.
    next_id: u64,

    /// Moderation extensions, run in registration order around creation
    /// and reporting.
    hooks: Vec<Box<dyn ModerationHook>>,
}

impl MicroBlog {
    /// Create a new empty network with no moderation hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a moderation hook.
    pub fn with_hook(mut self, hook: Box<dyn ModerationHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Create a network with the content filter and redaction policy
    /// described by `config`.
    pub fn with_moderation(config: &ModerationConfig) -> Result<Self> {
        let mut network = Self::new();
        for hook in config.hooks()? {
            network.hooks.push(hook);
        }
        Ok(network)
    }

    /// Rebuild a network from a historical list of posts.
    ///
    /// Creations are replayed first so that every author is a member before
    /// any like is replayed; replaying likes ahead of that would silently
    /// miss follow edges for authors who had not posted yet. Any post over
    /// the length ceiling aborts the whole construction.
    pub fn from_posts(posts: &[Post]) -> Result<Self> {
        let mut network = Self::new();

        // Pass 1: replay every creation, keeping the freshly assigned ids.
        let mut references = Vec::with_capacity(posts.len());
        for post in posts {
            references.push(network.create_post(post.author(), post.text())?);
        }

        // Pass 2: replay every like; follow edges materialize as a side
        // effect of like_post.
        for (reference, post) in references.iter().zip(posts) {
            for user in post.likes() {
                network.like_post(*reference, user)?;
            }
        }

        Ok(network)
    }

    /// Publish a new post and return its fresh id.
    ///
    /// Moderation hooks run against the post *before* it is inserted, so a
    /// failing hook leaves the network untouched. A first-time author also
    /// gets an empty follow entry.
    pub fn create_post(&mut self, author: &str, text: &str) -> Result<PostId> {
        let id = PostId(self.next_id);
        let mut post = Post::new(id, author, text)?;

        for hook in &self.hooks {
            hook.on_post_created(&mut post)?;
        }

        self.next_id += 1;
        self.post_index.insert(id, post);
        self.posts_by_author
            .entry(author.to_string())
            .or_default()
            .insert(id);
        self.followed_by.entry(author.to_string()).or_default();

        Ok(id)
    }

    /// Replace the text of an existing post. Same validation as creation.
    pub fn edit_post(&mut self, id: PostId, new_text: &str) -> Result<()> {
        let post = self
            .post_index
            .get_mut(&id)
            .ok_or(BlogError::PostNotFound(id))?;
        post.edit_text(new_text)
    }

    /// Record a like by `user` on the given post.
    ///
    /// Returns `true` iff this created a new follow edge `user -> author`,
    /// i.e. this is the first post by that author which `user` likes.
    /// Follow edges only exist for users who are members (have posted);
    /// a like from an outside user is recorded on the post alone.
    pub fn like_post(&mut self, id: PostId, user: &str) -> Result<bool> {
        validate_username(user)?;

        let post = self
            .post_index
            .get_mut(&id)
            .ok_or(BlogError::PostNotFound(id))?;
        let author = post.author().to_string();
        post.add_like(user)?;

        match self.followed_by.get_mut(user) {
            Some(followed) => Ok(followed.insert(author)),
            None => Ok(false),
        }
    }

    /// Remove a like by `user` from the given post.
    ///
    /// Returns `true` iff this removed the follow edge `user -> author`,
    /// i.e. the removed like was the last one `user` had on any of that
    /// author's posts. Unliking a post that was never liked is a no-op.
    pub fn unlike_post(&mut self, id: PostId, user: &str) -> Result<bool> {
        validate_username(user)?;

        let post = self
            .post_index
            .get_mut(&id)
            .ok_or(BlogError::PostNotFound(id))?;
        let author = post.author().to_string();
        post.remove_like(user)?;

        if self.liked_post_count(user, &author) == 0 {
            if let Some(followed) = self.followed_by.get_mut(user) {
                return Ok(followed.remove(&author));
            }
        }
        Ok(false)
    }

    /// Report a post for objectionable content.
    ///
    /// Authors cannot report their own posts, and each user can report a
    /// given post at most once. Returns the distinct-reporter count after
    /// this report; registered hooks (e.g. the redaction policy) observe
    /// the same count.
    pub fn report_post(&mut self, user: &str, id: PostId) -> Result<usize> {
        validate_username(user)?;

        let post = self
            .post_index
            .get_mut(&id)
            .ok_or(BlogError::PostNotFound(id))?;
        if post.author() == user {
            return Err(BlogError::InvalidState(format!(
                "author {user} cannot report their own post"
            )));
        }

        let reporters = self.reports.entry(id).or_default();
        if !reporters.insert(user.to_string()) {
            return Err(BlogError::InvalidState(format!(
                "{user} already reported post {id}"
            )));
        }
        let count = reporters.len();

        for hook in &self.hooks {
            hook.on_post_reported(post, count)?;
        }

        Ok(count)
    }

    /// A deep copy of the follow map: user -> users they follow.
    pub fn follow_relations(&self) -> HashMap<String, HashSet<String>> {
        self.followed_by
            .iter()
            .map(|(user, followed)| (user.clone(), followed.clone()))
            .collect()
    }

    /// Copies of every stored post, in creation order.
    pub fn all_posts(&self) -> Vec<Post> {
        self.post_index.values().cloned().collect()
    }

    /// Number of distinct users who reported the given post.
    pub fn report_count(&self, id: PostId) -> usize {
        self.reports.get(&id).map_or(0, HashSet::len)
    }

    /// Whether `user` has ever published a post.
    pub fn is_member(&self, user: &str) -> bool {
        self.posts_by_author.contains_key(user)
    }

    pub fn post_count(&self) -> usize {
        self.post_index.len()
    }

    pub fn member_count(&self) -> usize {
        self.posts_by_author.len()
    }

    /// Live lookup for internal use. Callers outside the crate only ever
    /// see copies.
    pub(crate) fn post(&self, id: PostId) -> Option<&Post> {
        self.post_index.get(&id)
    }

    /// Number of posts by `author` that `liker` currently likes.
    fn liked_post_count(&self, liker: &str, author: &str) -> usize {
        let Some(ids) = self.posts_by_author.get(author) else {
            return 0;
        };
        ids.iter()
            .filter_map(|id| self.post(*id))
            .filter(|post| post.has_like(liker))
            .count()
    }
}
