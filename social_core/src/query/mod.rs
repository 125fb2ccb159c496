//! Query & ranking engine - pure, read-only views over a network snapshot.
//!
//! Every function here works on plain post lists and follow maps, so the
//! same views can be computed from a live [`MicroBlog`](crate::MicroBlog)
//! or from raw historical data. The network exposes thin convenience
//! methods that delegate to these functions.

mod matcher;

pub use matcher::*;

use std::collections::{BTreeSet, HashMap, HashSet};

use post_model::{validate_username, Post, Result};

use crate::network::MicroBlog;

/// All posts written by `username`, in the order they appear in `posts`.
pub fn written_by(posts: &[Post], username: &str) -> Result<Vec<Post>> {
    validate_username(username)?;

    Ok(posts
        .iter()
        .filter(|post| post.author() == username)
        .cloned()
        .collect())
}

/// All posts whose text contains *every* word in `words` as a whole word,
/// case-insensitively. An empty word list matches every post.
pub fn containing(posts: &[Post], words: &[&str]) -> Result<Vec<Post>> {
    let matchers = word_matchers(words)?;

    Ok(posts
        .iter()
        .filter(|post| matchers.iter().all(|m| m.is_match(post.text())))
        .cloned()
        .collect())
}

/// All posts ordered by descending count of `words` entries matched in
/// their text (repeated words count repeatedly). The sort is stable, so
/// ties keep their relative order from `posts`.
pub fn sort_by_relevance(posts: &[Post], words: &[&str]) -> Result<Vec<Post>> {
    let matchers = word_matchers(words)?;

    let mut scored: Vec<(Post, usize)> = posts
        .iter()
        .map(|post| {
            let score = matchers.iter().filter(|m| m.is_match(post.text())).count();
            (post.clone(), score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(scored.into_iter().map(|(post, _)| post).collect())
}

/// Users followed by more users than they follow themselves, sorted by name.
///
/// Only members of the follow map are candidates; the follower count of a
/// user is the number of map values containing them.
pub fn influencers(follow_relations: &HashMap<String, HashSet<String>>) -> Vec<String> {
    let mut result: Vec<String> = follow_relations
        .iter()
        .filter(|(user, followed)| followed.len() < follower_count(user, follow_relations))
        .map(|(user, _)| user.clone())
        .collect();
    result.sort();
    result
}

/// The distinct authors across `posts`, sorted by name.
pub fn mentioned_users(posts: &[Post]) -> BTreeSet<String> {
    posts.iter().map(|post| post.author().to_string()).collect()
}

/// Infer the follow map from a raw post list, without a live network.
///
/// Builds a throwaway network through the two-pass bulk constructor and
/// returns its derived follow relations.
pub fn guess_followers(posts: &[Post]) -> Result<HashMap<String, HashSet<String>>> {
    Ok(MicroBlog::from_posts(posts)?.follow_relations())
}

/// Number of users whose follow set contains `user`.
fn follower_count(user: &str, follow_relations: &HashMap<String, HashSet<String>>) -> usize {
    follow_relations
        .values()
        .filter(|followed| followed.contains(user))
        .count()
}

impl MicroBlog {
    /// All posts written by `username`, in creation order.
    pub fn written_by(&self, username: &str) -> Result<Vec<Post>> {
        written_by(&self.all_posts(), username)
    }

    /// All posts containing every word in `words`, in creation order.
    pub fn containing(&self, words: &[&str]) -> Result<Vec<Post>> {
        containing(&self.all_posts(), words)
    }

    /// All posts ranked by relevance to `words`; ties in creation order.
    pub fn sort_by_relevance(&self, words: &[&str]) -> Result<Vec<Post>> {
        sort_by_relevance(&self.all_posts(), words)
    }

    /// The network's influencers, sorted by name.
    pub fn influencers(&self) -> Vec<String> {
        influencers(&self.follow_relations())
    }

    /// Every user who authored a post in the network, sorted by name.
    pub fn mentioned_users(&self) -> BTreeSet<String> {
        mentioned_users(&self.all_posts())
    }
}
