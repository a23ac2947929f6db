//! Error types for the post store

use thiserror::Error;

use crate::store::Timestamp;

pub type Result<T> = std::result::Result<T, YodelrError>;

/// Validation failures reported by the engine.
///
/// Every variant is a caller-correctable input error. The engine checks
/// before it mutates, so a returned error always means state is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum YodelrError {
    #[error("User '{0}' already exists")]
    DuplicateUser(String),

    #[error("User '{0}' does not exist")]
    UnknownUser(String),

    #[error("Post text too long: {length} characters (max {max})")]
    PostTooLong { length: usize, max: usize },

    #[error("Post is late: timestamp {timestamp} is not after {latest}")]
    OutOfOrder { timestamp: Timestamp, latest: Timestamp },
}

impl YodelrError {
    /// Stable error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            YodelrError::DuplicateUser(_) => "DUPLICATE_USER",
            YodelrError::UnknownUser(_) => "UNKNOWN_USER",
            YodelrError::PostTooLong { .. } => "POST_TOO_LONG",
            YodelrError::OutOfOrder { .. } => "OUT_OF_ORDER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            YodelrError::DuplicateUser("a".into()),
            YodelrError::UnknownUser("a".into()),
            YodelrError::PostTooLong { length: 141, max: 140 },
            YodelrError::OutOfOrder { timestamp: 1, latest: 2 },
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_messages_name_the_input() {
        assert_eq!(
            YodelrError::UnknownUser("bob".into()).to_string(),
            "User 'bob' does not exist"
        );
        assert_eq!(
            YodelrError::OutOfOrder { timestamp: 4, latest: 5 }.to_string(),
            "Post is late: timestamp 4 is not after 5"
        );
    }
}
