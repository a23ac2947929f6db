//! Command line grammar.
//!
//! One command per line. User names and topics are a word character
//! followed by one or more word or hyphen characters; post text is
//! everything between the angle brackets.

use std::sync::OnceLock;

use regex_lite::{Captures, Regex};
use thiserror::Error;

use crate::store::Timestamp;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Stats,
    AddUser { user: String },
    DeleteUser { user: String },
    Post { user: String, text: String },
    UserPosts { user: String },
    TopicPosts { topic: String },
    Trending { from: Timestamp, to: Timestamp },
}

struct Grammar {
    add_user: Regex,
    delete_user: Regex,
    post: Regex,
    user_posts: Regex,
    topic_posts: Regex,
    trending: Regex,
}

fn grammar() -> &'static Grammar {
    static GRAMMAR: OnceLock<Grammar> = OnceLock::new();
    GRAMMAR.get_or_init(|| {
        let compile = |pattern: &str| Regex::new(pattern).expect("command pattern compiles");
        Grammar {
            add_user: compile(r"^adduser (?P<user>\w+[\w-]+)$"),
            delete_user: compile(r"^deleteuser (?P<user>\w+[\w-]+)$"),
            post: compile(r"^post (?P<user>\w+[\w-]+) <(?P<text>.+)>$"),
            user_posts: compile(r"^userposts (?P<user>\w+[\w-]+)$"),
            topic_posts: compile(r"^topicposts (?P<topic>\w+[\w-]+)$"),
            trending: compile(r"^trending (?P<from>\d+) to (?P<to>\d+)$"),
        }
    })
}

fn group(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name).map(|m| m.as_str().to_string()).unwrap_or_default()
}

fn timestamp(caps: &Captures<'_>, name: &str) -> Result<Timestamp, CommandError> {
    let raw = group(caps, name);
    raw.parse().map_err(|_| CommandError::InvalidTimestamp(raw))
}

impl Command {
    /// Parse one line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim();
        let g = grammar();

        match line {
            "help" => return Ok(Command::Help),
            "quit" => return Ok(Command::Quit),
            "stats" => return Ok(Command::Stats),
            _ => {}
        }

        if let Some(caps) = g.add_user.captures(line) {
            Ok(Command::AddUser { user: group(&caps, "user") })
        } else if let Some(caps) = g.delete_user.captures(line) {
            Ok(Command::DeleteUser { user: group(&caps, "user") })
        } else if let Some(caps) = g.post.captures(line) {
            Ok(Command::Post {
                user: group(&caps, "user"),
                text: group(&caps, "text"),
            })
        } else if let Some(caps) = g.user_posts.captures(line) {
            Ok(Command::UserPosts { user: group(&caps, "user") })
        } else if let Some(caps) = g.topic_posts.captures(line) {
            Ok(Command::TopicPosts { topic: group(&caps, "topic") })
        } else if let Some(caps) = g.trending.captures(line) {
            Ok(Command::Trending {
                from: timestamp(&caps, "from")?,
                to: timestamp(&caps, "to")?,
            })
        } else {
            Err(CommandError::Unknown(line.to_string()))
        }
    }
}
