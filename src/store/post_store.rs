//! Ordered post log keyed by timestamp.
//!
//! Append-mostly: new posts only ever land after the largest timestamp ever
//! accepted, removals happen anywhere. Removing posts never lowers that
//! high-water mark. Backed by a `BTreeMap` so range scans touch
//! only the entries inside the range.

use std::collections::BTreeMap;

use crate::error::{Result, YodelrError};
use super::{Post, Timestamp};

/// Authoritative owner of every post.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: BTreeMap<Timestamp, Post>,
    /// Largest timestamp ever accepted, including since-removed posts.
    max_seen: Option<Timestamp>,
}

impl PostStore {
    // -- Constructors ---------------------------------------------------------

    pub fn new() -> Self {
        Self {
            posts: BTreeMap::new(),
            max_seen: None,
        }
    }

    // -- Write Operations -----------------------------------------------------

    /// Append a post under `timestamp`.
    ///
    /// Fails with `OutOfOrder` unless `timestamp` is strictly greater than
    /// every timestamp accepted so far, removed posts included. The first
    /// post into a fresh store always succeeds. Nothing is inserted on failure.
    pub fn append(
        &mut self,
        timestamp: Timestamp,
        text: impl Into<String>,
        topics: Vec<String>,
    ) -> Result<Timestamp> {
        if let Some(latest) = self.latest() {
            if timestamp <= latest {
                return Err(YodelrError::OutOfOrder { timestamp, latest });
            }
        }
        self.posts.insert(timestamp, Post::new(text, topics));
        self.max_seen = Some(timestamp);
        Ok(timestamp)
    }

    /// Remove a post. Returns `None` if the key is absent (including on a
    /// repeated call for the same key). The high-water mark is kept.
    pub fn remove(&mut self, key: Timestamp) -> Option<Post> {
        self.posts.remove(&key)
    }

    // -- Read Operations ------------------------------------------------------

    /// Point lookup. O(log n).
    pub fn get(&self, key: Timestamp) -> Option<&Post> {
        self.posts.get(&key)
    }

    /// Posts with `from <= key <= to`, ascending. Empty when `from > to`.
    pub fn range(&self, from: Timestamp, to: Timestamp) -> impl Iterator<Item = (Timestamp, &Post)> {
        // BTreeMap::range panics on an inverted range
        let bounds = if from <= to { Some(from..=to) } else { None };
        bounds
            .into_iter()
            .flat_map(move |bounds| self.posts.range(bounds))
            .map(|(key, post)| (*key, post))
    }

    /// All posts, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (Timestamp, &Post)> {
        self.posts.iter().map(|(key, post)| (*key, post))
    }

    /// Largest timestamp ever accepted, even if that post has been removed.
    pub fn latest(&self) -> Option<Timestamp> {
        self.max_seen
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
