//! Command-line configuration for the `yodelr` binary

use clap::{Parser, ValueEnum};

use crate::cli::{Clock, ElapsedClock, SequenceClock};
use crate::engine::{EngineConfig, MAX_POST_LENGTH};

/// How `post` commands are timestamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClockMode {
    /// Whole seconds since start-up
    Elapsed,
    /// 1, 2, 3, ... per post (useful for scripted input)
    Sequence,
}

impl ClockMode {
    pub fn build(self) -> Box<dyn Clock> {
        match self {
            ClockMode::Elapsed => Box::new(ElapsedClock::new()),
            ClockMode::Sequence => Box::new(SequenceClock::new()),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "yodelr", version, about = "Interactive in-memory post store")]
pub struct Config {
    /// Longest accepted post, in characters
    #[arg(long, default_value_t = MAX_POST_LENGTH)]
    pub max_post_length: usize,

    /// Timestamp source for new posts
    #[arg(long, value_enum, default_value_t = ClockMode::Elapsed)]
    pub clock: ClockMode,

    /// Do not print the help banner or the prompt
    #[arg(long, short)]
    pub quiet: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "YODELR_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Config {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            max_post_length: self.max_post_length,
        }
    }
}
