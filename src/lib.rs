//! Yodelr: in-memory social post store
//!
//! Users publish short posts; hashtags in a post become topics. Three
//! structures are kept consistent under every operation:
//! - `PostStore`: posts keyed by a strictly increasing timestamp
//! - `UserIndex`: user name → keys of their posts
//! - `TopicIndex`: normalized topic → keys of posts mentioning it
//!
//! `YodelrEngine` is the only writer of all three.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod store;
pub mod topic;

pub use engine::{EngineConfig, EngineStats, TopicCount, Yodelr, YodelrEngine, MAX_POST_LENGTH};
pub use error::{Result, YodelrError};
pub use index::{TopicIndex, UserIndex};
pub use store::{Post, PostStore, Timestamp};
pub use topic::{extract_topics, normalize_topic, topics_of};
