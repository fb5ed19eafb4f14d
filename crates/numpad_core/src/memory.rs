//! In-memory [`FieldRef`] implementation.
//!
//! Useful for headless hosts and tests: it records every capability call the
//! keyboard makes so the effects can be inspected afterwards.

use crate::field::FieldRef;
use crate::id::FieldId;
use crate::text::{caret_from_x, clamp_caret};
use std::cell::RefCell;
use std::rc::Rc;

/// Horizontal advance used for hit-testing unless overridden.
pub const DEFAULT_CHAR_ADVANCE: f32 = 10.0;

#[derive(Clone, Debug)]
struct FieldState {
    text: String,
    /// Monotonic revision counter, incremented on any text change.
    text_rev: u64,
    /// Character offset, always `<= text.chars().count()`.
    caret: usize,
    native_input_enabled: bool,
    observed: bool,
    focused: bool,
    caret_visible: bool,
    /// Fixed per-character width in px used by `offset_for_position`.
    char_advance: f32,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            text: String::new(),
            text_rev: 0,
            caret: 0,
            native_input_enabled: true,
            observed: false,
            focused: false,
            caret_visible: false,
            char_advance: DEFAULT_CHAR_ADVANCE,
        }
    }
}

/// Shared handle to an in-memory text field.
///
/// Clones share state, so a host keeps one handle and gives another to the
/// keyboard.
///
/// # Example
///
/// ```
/// use numpad_core::{FieldId, MaxLength, MemoryField, NumKeyboard};
///
/// let field = MemoryField::new(FieldId::from_raw(1));
/// let mut keyboard = NumKeyboard::new();
/// keyboard.attach([field.clone()], MaxLength::Bounded(4));
///
/// keyboard.on_focus_changed(field.field_id(), true);
/// keyboard.on_key("4");
/// keyboard.on_key("2");
///
/// assert_eq!(field.value(), "42");
/// assert!(!field.is_native_input_enabled());
/// ```
#[derive(Clone, Debug)]
pub struct MemoryField {
    id: FieldId,
    state: Rc<RefCell<FieldState>>,
}

impl MemoryField {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            state: Rc::new(RefCell::new(FieldState::default())),
        }
    }

    /// Create a field holding `text` with the caret at its end.
    pub fn with_text(id: FieldId, text: &str) -> Self {
        let field = Self::new(id);
        {
            let mut st = field.state.borrow_mut();
            st.text = text.to_owned();
            st.caret = clamp_caret(text, usize::MAX);
        }
        field
    }

    #[inline]
    pub fn field_id(&self) -> FieldId {
        self.id
    }

    pub fn value(&self) -> String {
        self.state.borrow().text.clone()
    }

    pub fn caret_offset(&self) -> usize {
        self.state.borrow().caret
    }

    pub fn text_revision(&self) -> u64 {
        self.state.borrow().text_rev
    }

    pub fn is_native_input_enabled(&self) -> bool {
        self.state.borrow().native_input_enabled
    }

    pub fn is_observed(&self) -> bool {
        self.state.borrow().observed
    }

    pub fn has_focus(&self) -> bool {
        self.state.borrow().focused
    }

    pub fn is_caret_visible(&self) -> bool {
        self.state.borrow().caret_visible
    }

    /// Host-side focus change. Does not notify any keyboard.
    pub fn set_focused(&self, focused: bool) {
        self.state.borrow_mut().focused = focused;
    }

    pub fn set_char_advance(&self, px: f32) {
        self.state.borrow_mut().char_advance = px.max(0.0);
    }

    /// Convert a caret offset into the x coordinate the hit test maps back to it.
    pub fn x_for_offset(&self, offset: usize) -> f32 {
        let st = self.state.borrow();
        clamp_caret(&st.text, offset) as f32 * st.char_advance
    }
}

impl FieldRef for MemoryField {
    fn id(&self) -> FieldId {
        self.id
    }

    fn text(&self) -> String {
        self.value()
    }

    fn set_text(&mut self, text: &str) {
        let mut st = self.state.borrow_mut();
        if st.text != text {
            st.text = text.to_owned();
            st.text_rev = st.text_rev.wrapping_add(1);
        }
        st.caret = clamp_caret(&st.text, st.caret);
    }

    fn caret(&self) -> usize {
        self.caret_offset()
    }

    fn set_caret(&mut self, caret: usize) {
        let mut st = self.state.borrow_mut();
        st.caret = clamp_caret(&st.text, caret);
    }

    fn set_native_input_enabled(&mut self, enabled: bool) {
        self.state.borrow_mut().native_input_enabled = enabled;
    }

    fn register_observers(&mut self) {
        self.state.borrow_mut().observed = true;
    }

    fn unregister_observers(&mut self) {
        self.state.borrow_mut().observed = false;
    }

    fn request_focus(&mut self) {
        self.state.borrow_mut().focused = true;
    }

    fn set_caret_visible(&mut self, visible: bool) {
        self.state.borrow_mut().caret_visible = visible;
    }

    fn offset_for_position(&self, x: f32, _y: f32) -> usize {
        let st = self.state.borrow();
        let advance = st.char_advance;
        caret_from_x(&st.text, x, |prefix| prefix.chars().count() as f32 * advance)
    }
}
