//! Second-granularity countdown with a running flag.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use crate::consts::COUNTDOWN_SECS;

/// What a one-second tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not running; nothing changed.
    Idle,
    /// One second elapsed; this many remain.
    Remaining(u32),
    /// Reached zero. The countdown has stopped and reset.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    initial: u32,
    remaining: u32,
    running: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(COUNTDOWN_SECS)
    }
}

impl Countdown {
    #[must_use]
    pub fn new(initial: u32) -> Self {
        Self { initial, remaining: initial, running: false }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start or stop. Stopping resets to the initial value.
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
        if !running {
            self.remaining = self.initial;
        }
    }

    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.set_running(false);
            Tick::Finished
        } else {
            Tick::Remaining(self.remaining)
        }
    }
}
