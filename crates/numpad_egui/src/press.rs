//! Long-press detection for a single button.
//!
//! egui reports whether the pointer is held on a widget each frame but has
//! no long-press event for mouse input, so the grid tracks press duration
//! itself.

use std::time::{Duration, Instant};

/// Hold time after which a press counts as a long press.
pub const LONG_PRESS_TIMEOUT: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressEvent {
    LongPress,
    Release { long_press: bool },
}

#[derive(Clone, Debug)]
pub struct PressTracker {
    pressed_at: Option<Instant>,
    long_fired: bool,
    timeout: Duration,
}

impl Default for PressTracker {
    fn default() -> Self {
        Self::new(LONG_PRESS_TIMEOUT)
    }
}

impl PressTracker {
    pub fn new(timeout: Duration) -> Self {
        Self {
            pressed_at: None,
            long_fired: false,
            timeout,
        }
    }

    /// Feed the current held state; returns the transition it caused, if any.
    pub fn update(&mut self, down: bool, now: Instant) -> Option<PressEvent> {
        match (self.pressed_at, down) {
            (None, true) => {
                self.pressed_at = Some(now);
                self.long_fired = false;
                None
            }
            (Some(start), true) => {
                if !self.long_fired && now.saturating_duration_since(start) >= self.timeout {
                    self.long_fired = true;
                    Some(PressEvent::LongPress)
                } else {
                    None
                }
            }
            (Some(_), false) => {
                self.pressed_at = None;
                Some(PressEvent::Release {
                    long_press: self.long_fired,
                })
            }
            (None, false) => None,
        }
    }

    /// `true` if the current or most recent press turned into a long press.
    /// A click ending such a press must not count as a tap.
    #[inline]
    pub fn last_press_was_long(&self) -> bool {
        self.long_fired
    }

    /// When a held press will turn into a long press.
    pub fn long_press_deadline(&self) -> Option<Instant> {
        match self.pressed_at {
            Some(start) if !self.long_fired => Some(start + self.timeout),
            _ => None,
        }
    }
}
