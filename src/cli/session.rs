//! Interactive session: parses lines, calls the engine, renders replies.
//!
//! Errors from either the parser or the engine become output lines; nothing
//! a user types can end the session except `quit` or end of input.

use std::io::{self, BufRead, Write};

use crate::engine::Yodelr;
use crate::error::Result;
use super::clock::Clock;
use super::command::Command;
use super::help::help_text;

/// Prompt printed before each line is read.
pub const PROMPT: &str = "_> ";

/// What the caller should do with a handled line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print (blank line).
    Silent,
    /// Print this text followed by a newline.
    Output(String),
    /// Stop reading input.
    Quit,
}

/// Engine plus the clock used to stamp new posts.
pub struct Session {
    engine: Box<dyn Yodelr>,
    clock: Box<dyn Clock>,
}

impl Session {
    pub fn new(engine: Box<dyn Yodelr>, clock: Box<dyn Clock>) -> Self {
        Self { engine, clock }
    }

    pub fn engine(&self) -> &dyn Yodelr {
        self.engine.as_ref()
    }

    /// Handle one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        if line.trim().is_empty() {
            return Reply::Silent;
        }

        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => return Reply::Output(e.to_string()),
        };

        match self.execute(command) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::debug!(code = e.code(), "command failed: {}", e);
                Reply::Output(format!("Something went wrong while handling command: {}", e))
            }
        }
    }

    /// Run a parsed command against the engine.
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        let reply = match command {
            Command::Help => Reply::Output(help_text().trim_end().to_string()),
            Command::Quit => Reply::Quit,
            Command::Stats => {
                let stats = self.engine.stats();
                let rendered = serde_json::to_string(&stats)
                    .unwrap_or_else(|e| format!("Could not render stats: {}", e));
                Reply::Output(rendered)
            }
            Command::AddUser { user } => {
                self.engine.add_user(&user)?;
                Reply::Output(format!("Added user: {}", user))
            }
            Command::DeleteUser { user } => {
                self.engine.delete_user(&user)?;
                Reply::Output(format!("Removed user: {}", user))
            }
            Command::Post { user, text } => {
                let timestamp = self.clock.now();
                self.engine.add_post(&user, &text, timestamp)?;
                Reply::Output(format!(
                    "Added post for user {}: \"{}\" at timestamp {}",
                    user, text, timestamp
                ))
            }
            Command::UserPosts { user } => {
                Reply::Output(render_list(&self.engine.get_posts_for_user(&user)?))
            }
            Command::TopicPosts { topic } => {
                Reply::Output(render_list(&self.engine.get_posts_for_topic(&topic)))
            }
            Command::Trending { from, to } => {
                Reply::Output(render_list(&self.engine.get_trending_topics(from, to)))
            }
        };
        Ok(reply)
    }
}

/// `[a, b, c]`
fn render_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

/// Read lines from `input` until end of input or `quit`, writing replies
/// to `output`.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    output: &mut W,
    prompt: bool,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        if prompt {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match session.handle_line(&line) {
            Reply::Silent => {}
            Reply::Output(text) => writeln!(output, "{}", text)?,
            Reply::Quit => break,
        }
    }
    output.flush()
}
