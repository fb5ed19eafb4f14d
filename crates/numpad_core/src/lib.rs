//! # numpad_core
//!
//! UI-agnostic numeric keypad that binds to host text fields.
//!
//! - [`NumKeyboard`]: attaches to fields, tracks the active one, routes
//!   focus/touch/key events, drives repeat-delete
//! - [`edit`]: pure caret-aware insert/delete with per-field [`MaxLength`]
//! - [`FieldRef`]: the capability a host field must provide
//! - [`MemoryField`]: in-memory field for headless hosts and tests
//!
//! ## Design Principles
//!
//! This crate does not depend on any graphics framework or event loop. Hosts
//! forward their UI events into [`NumKeyboard`] and call
//! [`NumKeyboard::tick`] from their frame loop while repeat-delete runs.
//! Everything executes on the host's UI thread.
//!
//! Carets are character offsets and are clamped to `[0, len]` before they
//! reach a field. Boundary conditions (empty text, caret at start, full
//! field, unknown field) are silent no-ops.
//!
//! ## Logging
//!
//! Uses the `log` facade with targets `numpad.binding`, `numpad.edit` and
//! `numpad.repeat`. No logger is installed by this crate.

mod config;
pub mod edit;
mod event;
mod field;
mod id;
mod key;
mod keyboard;
mod memory;
mod repeat;
mod text;

pub use config::{ConfigError, KeyboardConfig, KeyboardSettings};
pub use edit::{
    Edit, EditKind, EditOperation, MaxLength, delete_before_caret, delete_last_char, insert_char,
};
pub use event::{TouchAction, TouchEvent};
pub use field::{FieldRef, HapticFeedback, HapticKind, NoHaptics};
pub use id::FieldId;
pub use key::{DECIMAL_LABEL, DEFAULT_BACKSPACE_LABEL, KEY_LAYOUT, Key};
pub use keyboard::{BoundField, NumKeyboard};
pub use memory::{DEFAULT_CHAR_ADVANCE, MemoryField};
pub use repeat::{DEFAULT_REPEAT_INTERVAL, RepeatDelete, RepeatState};

// Re-export text utilities for hosts that hit-test with their own font metrics.
pub use text::{
    byte_index, caret_from_x, caret_from_x_with_boundaries, char_len, clamp_caret,
    rebuild_cursor_boundaries,
};
