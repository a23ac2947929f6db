//! Timestamp sources for `post` commands.
//!
//! The engine only checks that timestamps increase; choosing them is up to
//! the caller.

use std::time::Instant;

use crate::store::Timestamp;

pub trait Clock {
    /// Timestamp for the next post.
    fn now(&mut self) -> Timestamp;
}

/// Whole seconds since the clock was created. Two posts within the same
/// second get the same timestamp, so the second one is rejected as late.
#[derive(Debug, Clone)]
pub struct ElapsedClock {
    started: Instant,
}

impl ElapsedClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for ElapsedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ElapsedClock {
    fn now(&mut self) -> Timestamp {
        self.started.elapsed().as_secs()
    }
}

/// 1, 2, 3, ... one tick per call.
#[derive(Debug, Clone)]
pub struct SequenceClock {
    next: Timestamp,
}

impl SequenceClock {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: Timestamp) -> Self {
        Self { next: first }
    }
}

impl Default for SequenceClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SequenceClock {
    fn now(&mut self) -> Timestamp {
        let current = self.next;
        self.next = self.next.saturating_add(1);
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_clock_ticks() {
        let mut clock = SequenceClock::new();
        assert_eq!(clock.now(), 1);
        assert_eq!(clock.now(), 2);
        assert_eq!(clock.now(), 3);
    }

    #[test]
    fn test_elapsed_clock_starts_at_zero() {
        let mut clock = ElapsedClock::new();
        assert_eq!(clock.now(), 0);
    }
}
