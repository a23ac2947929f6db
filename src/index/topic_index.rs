//! Normalized topic → keys of the posts mentioning it.
//!
//! Entries are created lazily on first mention and pruned as soon as their
//! key set becomes empty, so an unknown topic and a topic without posts are
//! the same thing: no entry.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::store::Timestamp;
use crate::topic::normalize_topic;

#[derive(Debug, Default)]
pub struct TopicIndex {
    topics: HashMap<String, BTreeSet<Timestamp>>,
}

impl TopicIndex {
    pub fn new() -> Self {
        Self {
            topics: HashMap::new(),
        }
    }

    /// Reference `key` from every topic in `topics`.
    ///
    /// Topics are expected in normalized form (as stored on a `Post`).
    pub fn add_references<S: AsRef<str>>(&mut self, topics: &[S], key: Timestamp) {
        for topic in topics {
            self.topics
                .entry(topic.as_ref().to_string())
                .or_default()
                .insert(key);
        }
    }

    /// Drop the references held by removed posts.
    ///
    /// `removed` maps each removed key to the normalized topics it mentioned.
    /// Topics left without keys are deleted.
    pub fn remove_references(&mut self, removed: &BTreeMap<Timestamp, Vec<String>>) {
        for (key, topics) in removed {
            for topic in topics {
                let emptied = match self.topics.get_mut(topic) {
                    Some(keys) => {
                        keys.remove(key);
                        keys.is_empty()
                    }
                    None => false,
                };
                if emptied {
                    self.topics.remove(topic);
                }
            }
        }
    }

    /// Keys of posts mentioning `topic`, ascending. The input is normalized
    /// first; an unknown topic yields nothing.
    pub fn posts_of(&self, topic: &str) -> impl Iterator<Item = Timestamp> + '_ {
        self.topics
            .get(&normalize_topic(topic))
            .into_iter()
            .flat_map(|keys| keys.iter().copied())
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.topics.contains_key(&normalize_topic(topic))
    }

    /// Iterate `(topic, keys)` in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<Timestamp>)> {
        self.topics.iter().map(|(topic, keys)| (topic.as_str(), keys))
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
