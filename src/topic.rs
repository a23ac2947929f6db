//! Hashtag extraction and topic normalization.
//!
//! A hashtag is `#` followed by a word character and at least one more
//! word or hyphen character, so `#a` is not a tag but `#ab` and `#a-` are.
//! Word characters are ASCII (`[0-9A-Za-z_]`).

use std::collections::HashSet;
use std::sync::OnceLock;

use regex_lite::Regex;

const HASHTAG_PATTERN: &str = r"#(\w[\w-]+)";

fn hashtag_regex() -> &'static Regex {
    static HASHTAG: OnceLock<Regex> = OnceLock::new();
    HASHTAG.get_or_init(|| Regex::new(HASHTAG_PATTERN).expect("hashtag pattern compiles"))
}

/// Raw hashtags in `text`, deduplicated, in order of first appearance.
pub fn extract_topics(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    hashtag_regex()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|tag| seen.insert(*tag))
        .map(str::to_string)
        .collect()
}

/// Canonical form of a topic: lowercased, `_` and `-` removed.
///
/// Idempotent: `normalize_topic(&normalize_topic(x)) == normalize_topic(x)`.
pub fn normalize_topic(topic: &str) -> String {
    topic
        .to_lowercase()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .collect()
}

/// Normalized topics mentioned by `text`, deduplicated on the normalized
/// form, in order of first appearance. This is what a post indexes under.
pub fn topics_of(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    extract_topics(text)
        .iter()
        .map(|tag| normalize_topic(tag))
        .filter(|topic| seen.insert(topic.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_topics() {
        let post = "#First place, other #hash-tags should be parsed #without_problem!";
        let mut tags = extract_topics(post);
        tags.sort();
        assert_eq!(tags, vec!["First", "hash-tags", "without_problem"]);
    }

    #[test]
    fn test_extract_keeps_first_appearance_order() {
        assert_eq!(
            extract_topics("#zeta then #alpha then #zeta again"),
            vec!["zeta", "alpha"]
        );
    }

    #[test]
    fn test_single_character_tag_is_ignored() {
        assert!(extract_topics("#a b c").is_empty());
        assert_eq!(extract_topics("#a- #ab"), vec!["a-", "ab"]);
    }

    #[test]
    fn test_no_tags() {
        assert!(extract_topics("").is_empty());
        assert!(extract_topics("no tags # here").is_empty());
    }

    #[test]
    fn test_normalize_topic() {
        assert_eq!(normalize_topic("First"), "first");
        assert_eq!(normalize_topic("hash-tags"), "hashtags");
        assert_eq!(normalize_topic("without_problem"), "withoutproblem");
        assert_eq!(normalize_topic("HASH_TAGS"), normalize_topic("hash-tags"));
    }

    #[test]
    fn test_topics_of_dedups_after_normalization() {
        assert_eq!(
            topics_of("#Oslo and #oslo and #OS_LO, also #Vespa"),
            vec!["oslo", "vespa"]
        );
    }
}
