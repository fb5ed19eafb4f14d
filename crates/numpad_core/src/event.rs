//! Host UI events forwarded into the keyboard.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// A touch or pointer event in the field's own coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub x: f32,
    pub y: f32,
}

impl TouchEvent {
    #[inline]
    pub fn new(action: TouchAction, x: f32, y: f32) -> Self {
        Self { action, x, y }
    }

    #[inline]
    pub fn up(x: f32, y: f32) -> Self {
        Self::new(TouchAction::Up, x, y)
    }

    /// `true` for the actions that end a gesture.
    #[inline]
    pub fn is_release(&self) -> bool {
        matches!(self.action, TouchAction::Up | TouchAction::Cancel)
    }
}
