//! Host capability traits.
//!
//! The keyboard never owns a text widget. Hosts implement [`FieldRef`] on a
//! cheap handle (typically wrapping `Rc<RefCell<..>>` or a toolkit id) and
//! hand clones of it to [`NumKeyboard::attach`](crate::NumKeyboard::attach).
//!
//! # Integration Pattern
//!
//! ```ignore
//! #[derive(Clone)]
//! struct MyField(Rc<RefCell<MyWidget>>);
//!
//! impl FieldRef for MyField {
//!     fn id(&self) -> FieldId {
//!         FieldId::from_raw(self.0.borrow().widget_id)
//!     }
//!     // ...
//! }
//! ```

use crate::id::FieldId;

/// Capabilities the keyboard needs from a bound text field.
///
/// Carets are character offsets. The keyboard clamps every caret it passes
/// to [`set_caret`](FieldRef::set_caret), so implementors may assume
/// `caret <= text().chars().count()`.
pub trait FieldRef {
    /// Stable identity of the underlying field. Two handles to the same field
    /// must report the same id.
    fn id(&self) -> FieldId;

    fn text(&self) -> String;

    fn set_text(&mut self, text: &str);

    /// Current caret (selection end) as a character offset.
    fn caret(&self) -> usize;

    fn set_caret(&mut self, caret: usize);

    /// Enable or disable the platform's own input method (soft keyboard, IME,
    /// hardware text entry) for this field.
    fn set_native_input_enabled(&mut self, enabled: bool);

    /// Start routing focus and touch notifications for this field to the
    /// keyboard.
    fn register_observers(&mut self);

    fn unregister_observers(&mut self);

    fn request_focus(&mut self);

    fn set_caret_visible(&mut self, visible: bool);

    /// Hit-test a point in field coordinates to the nearest caret offset.
    fn offset_for_position(&self, x: f32, y: f32) -> usize;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HapticKind {
    /// A key of the grid was pressed.
    KeyTap,
    /// One repeat-delete step removed a character.
    RepeatDelete,
}

/// Sink for haptic feedback requests.
pub trait HapticFeedback {
    fn perform(&mut self, kind: HapticKind);
}

/// Haptic sink that ignores every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn perform(&mut self, _kind: HapticKind) {}
}
