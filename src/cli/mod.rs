//! Line-oriented command interpreter over the engine

pub mod clock;
pub mod command;
pub mod help;
pub mod session;

pub use clock::{Clock, ElapsedClock, SequenceClock};
pub use command::{Command, CommandError};
pub use help::help_text;
pub use session::{run, Reply, Session, PROMPT};
