//! Chronological post log

pub mod post_store;

pub use post_store::PostStore;

/// Post key. Strictly increasing across the store, so it doubles as the
/// post's creation time and its sort order.
pub type Timestamp = u64;

/// Immutable post record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Text exactly as submitted
    pub text: String,

    /// Normalized topics mentioned by the text, deduplicated, in order of
    /// first appearance
    pub topics: Vec<String>,
}

impl Post {
    pub fn new(text: impl Into<String>, topics: Vec<String>) -> Self {
        Self {
            text: text.into(),
            topics,
        }
    }
}
