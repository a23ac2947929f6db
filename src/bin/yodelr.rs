//! Yodelr - interactive post store
//!
//! Reads one command per line from stdin and prints replies to stdout.
//! Logs go to stderr.
//!
//! Usage:
//!   yodelr [--clock elapsed|sequence] [--max-post-length N] [--quiet]

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use yodelr::cli::{help_text, run, Session};
use yodelr::config::Config;
use yodelr::YodelrEngine;

fn init_logging(config: &Config) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("invalid log level '{}'", config.log_level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    let engine = YodelrEngine::with_config(config.engine_config());
    let mut session = Session::new(Box::new(engine), config.clock.build());

    tracing::info!(
        max_post_length = config.max_post_length,
        clock = ?config.clock,
        "starting yodelr v{}",
        env!("CARGO_PKG_VERSION")
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !config.quiet {
        writeln!(out, "{}", help_text()).context("failed to write help")?;
    }

    run(&mut session, stdin.lock(), &mut out, !config.quiet).context("failed to run session")?;

    let stats = session.engine().stats();
    tracing::info!(users = stats.users, posts = stats.posts, "session ended");
    Ok(())
}
