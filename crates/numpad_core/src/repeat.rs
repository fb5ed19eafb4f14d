//! Repeat-delete timer.
//!
//! Deadline-driven rather than callback-driven: the host calls
//! [`RepeatDelete::poll`] from its frame loop (or a wake-up scheduled at
//! [`RepeatDelete::next_deadline`]). Stopping clears the deadline, so a
//! cancelled repeat can never fire afterwards.

use std::time::{Duration, Instant};

/// Delay between two repeat-delete steps unless configured otherwise.
pub const DEFAULT_REPEAT_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepeatState {
    #[default]
    Idle,
    Repeating {
        next_at: Instant,
    },
}

#[derive(Clone, Debug)]
pub struct RepeatDelete {
    state: RepeatState,
    interval: Duration,
}

impl Default for RepeatDelete {
    fn default() -> Self {
        Self::new(DEFAULT_REPEAT_INTERVAL)
    }
}

impl RepeatDelete {
    pub fn new(interval: Duration) -> Self {
        Self {
            state: RepeatState::Idle,
            interval,
        }
    }

    #[inline]
    pub fn state(&self) -> RepeatState {
        self.state
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn is_repeating(&self) -> bool {
        matches!(self.state, RepeatState::Repeating { .. })
    }

    /// Time the next step is due, if repeating.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            RepeatState::Idle => None,
            RepeatState::Repeating { next_at } => Some(next_at),
        }
    }

    /// `Idle -> Repeating`.
    ///
    /// Returns `true` if the timer was idle; the caller performs the
    /// immediate first step. Starting while already repeating does nothing.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_repeating() {
            return false;
        }
        self.state = RepeatState::Repeating {
            next_at: now + self.interval,
        };
        log::debug!(target: "numpad.repeat", "start, interval {:?}", self.interval);
        true
    }

    /// Returns `true` if a step is due at `now`, re-arming the deadline
    /// relative to `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let RepeatState::Repeating { next_at } = self.state else {
            return false;
        };
        if now < next_at {
            return false;
        }
        self.state = RepeatState::Repeating {
            next_at: now + self.interval,
        };
        true
    }

    /// `Repeating -> Idle`. Returns `true` if the timer was running.
    pub fn stop(&mut self) -> bool {
        let was_repeating = self.is_repeating();
        self.state = RepeatState::Idle;
        if was_repeating {
            log::debug!(target: "numpad.repeat", "stop");
        }
        was_repeating
    }
}
