//! Indexing engine: post log + user index + topic index behind one API.
//!
//! Every mutating operation validates first and only then touches the three
//! structures, so a failed call leaves the engine exactly as it was.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{Result, YodelrError};
use crate::index::{TopicIndex, UserIndex};
use crate::store::{PostStore, Timestamp};
use crate::topic::topics_of;

/// Maximum post length, in characters, unless configured otherwise.
pub const MAX_POST_LENGTH: usize = 140;

/// The post store API consumed by the command interpreter.
pub trait Yodelr {
    // === USERS ===

    /// Register a new user. `DuplicateUser` if the name is taken.
    fn add_user(&mut self, name: &str) -> Result<()>;

    /// Remove a user together with every post they authored.
    fn delete_user(&mut self, name: &str) -> Result<()>;

    // === POSTS ===

    /// Publish a post under `timestamp`, which must be later than every
    /// timestamp accepted so far. Returns the post key.
    fn add_post(&mut self, user: &str, text: &str, timestamp: Timestamp) -> Result<Timestamp>;

    /// Texts of the user's posts, oldest first.
    fn get_posts_for_user(&self, name: &str) -> Result<Vec<String>>;

    /// Texts of posts mentioning `topic`, oldest first. Unknown topics yield
    /// an empty list.
    fn get_posts_for_topic(&self, topic: &str) -> Vec<String>;

    // === TRENDING ===

    /// Normalized topics of posts in `from..=to`, most mentioned first.
    fn get_trending_topics(&self, from: Timestamp, to: Timestamp) -> Vec<String>;

    // === STATS ===

    fn stats(&self) -> EngineStats;
}

/// Engine tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Longest accepted post, counted in characters before normalization.
    pub max_post_length: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_post_length: MAX_POST_LENGTH,
        }
    }
}

/// A topic and the number of distinct posts mentioning it in a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCount {
    pub topic: String,
    pub posts: usize,
}

/// Sizes of the engine's structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    pub users: usize,
    pub posts: usize,
    pub topics: usize,
    pub latest_timestamp: Option<Timestamp>,
}

// ── YodelrEngine ───────────────────────────────────────────────────

/// In-memory implementation of [`Yodelr`].
#[derive(Debug, Default)]
pub struct YodelrEngine {
    config: EngineConfig,
    posts: PostStore,
    users: UserIndex,
    topics: TopicIndex,
}

impl YodelrEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            posts: PostStore::new(),
            users: UserIndex::new(),
            topics: TopicIndex::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn posts(&self) -> &PostStore {
        &self.posts
    }

    pub fn users(&self) -> &UserIndex {
        &self.users
    }

    pub fn topics(&self) -> &TopicIndex {
        &self.topics
    }

    /// Trending ranking with the distinct-post count of each topic.
    ///
    /// Topics are ordered by count, descending. Equal counts are ordered by
    /// the point at which each topic reached its final count while scanning
    /// the range oldest post first (topics within one post in text order).
    pub fn trending_topic_counts(&self, from: Timestamp, to: Timestamp) -> Vec<TopicCount> {
        // topic -> (count, scan position of its last mention)
        let mut tally: HashMap<&str, (usize, usize)> = HashMap::new();
        let mut position = 0usize;

        for (_, post) in self.posts.range(from, to) {
            for topic in &post.topics {
                let entry = tally.entry(topic.as_str()).or_insert((0, 0));
                entry.0 += 1;
                entry.1 = position;
                position += 1;
            }
        }

        let mut ranked: Vec<(&str, usize, usize)> = tally
            .into_iter()
            .map(|(topic, (count, last))| (topic, count, last))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        ranked
            .into_iter()
            .map(|(topic, posts, _)| TopicCount {
                topic: topic.to_string(),
                posts,
            })
            .collect()
    }

    /// Resolve keys to post texts, skipping keys with no post behind them.
    fn texts_of(&self, keys: impl Iterator<Item = Timestamp>) -> Vec<String> {
        keys.filter_map(|key| self.posts.get(key))
            .map(|post| post.text.clone())
            .collect()
    }
}

impl Yodelr for YodelrEngine {
    fn add_user(&mut self, name: &str) -> Result<()> {
        self.users.add_user(name)?;
        tracing::debug!(user = name, "user added");
        Ok(())
    }

    fn delete_user(&mut self, name: &str) -> Result<()> {
        let owned = self.users.delete_user(name)?;

        let mut removed: BTreeMap<Timestamp, Vec<String>> = BTreeMap::new();
        for key in owned {
            match self.posts.remove(key) {
                Some(post) => {
                    removed.insert(key, post.topics);
                }
                None => tracing::warn!(user = name, key, "skipping orphaned post key"),
            }
        }
        self.topics.remove_references(&removed);

        tracing::debug!(user = name, posts = removed.len(), "user deleted");
        Ok(())
    }

    fn add_post(&mut self, user: &str, text: &str, timestamp: Timestamp) -> Result<Timestamp> {
        let length = text.chars().count();
        if length > self.config.max_post_length {
            return Err(YodelrError::PostTooLong {
                length,
                max: self.config.max_post_length,
            });
        }
        if !self.users.contains(user) {
            return Err(YodelrError::UnknownUser(user.to_string()));
        }

        let topics = topics_of(text);
        let key = self.posts.append(timestamp, text, topics.clone())?;
        self.users.record_post(user, key)?;
        self.topics.add_references(&topics, key);

        tracing::debug!(user, key, topics = topics.len(), "post added");
        Ok(key)
    }

    fn get_posts_for_user(&self, name: &str) -> Result<Vec<String>> {
        let keys = self.users.posts_of(name)?;
        Ok(self.texts_of(keys.iter().copied()))
    }

    fn get_posts_for_topic(&self, topic: &str) -> Vec<String> {
        self.texts_of(self.topics.posts_of(topic))
    }

    fn get_trending_topics(&self, from: Timestamp, to: Timestamp) -> Vec<String> {
        self.trending_topic_counts(from, to)
            .into_iter()
            .map(|count| count.topic)
            .collect()
    }

    fn stats(&self) -> EngineStats {
        EngineStats {
            users: self.users.len(),
            posts: self.posts.len(),
            topics: self.topics.len(),
            latest_timestamp: self.posts.latest(),
        }
    }
}
