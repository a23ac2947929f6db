//! In-memory secondary indexes over the post store.
//!
//! Both indexes hold post keys only, never post values. The engine keeps
//! them consistent with `PostStore`.

pub mod topic_index;
pub mod user_index;

pub use topic_index::TopicIndex;
pub use user_index::UserIndex;
