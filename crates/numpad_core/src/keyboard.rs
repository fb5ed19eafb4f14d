//! Binding manager: attached fields, the active field, and event routing.
//!
//! All methods run on the host's UI thread and take `&mut self`; there is no
//! interior locking. The active field is stored as a [`FieldId`] and looked up
//! in the attached set on every event, so detaching a field can never leave a
//! dangling reference behind.

use crate::config::KeyboardConfig;
use crate::edit::{EditKind, EditOperation, MaxLength};
use crate::event::{TouchAction, TouchEvent};
use crate::field::{FieldRef, HapticFeedback, HapticKind, NoHaptics};
use crate::id::FieldId;
use crate::key::{DEFAULT_BACKSPACE_LABEL, Key};
use crate::repeat::{DEFAULT_REPEAT_INTERVAL, RepeatDelete};
use crate::text::clamp_caret;
use std::time::{Duration, Instant};

/// One attached field and its length constraint.
#[derive(Clone, Debug)]
pub struct BoundField<F> {
    handle: F,
    max_length: MaxLength,
}

impl<F> BoundField<F> {
    #[inline]
    pub fn handle(&self) -> &F {
        &self.handle
    }

    #[inline]
    pub fn max_length(&self) -> MaxLength {
        self.max_length
    }
}

/// On-screen numeric keyboard state.
///
/// # Example
///
/// ```
/// use numpad_core::{FieldId, MaxLength, MemoryField, NumKeyboard, TouchEvent};
///
/// let pin = MemoryField::new(FieldId::from_raw(1));
/// let mut keyboard = NumKeyboard::new();
/// keyboard.attach([pin.clone()], MaxLength::Bounded(4));
///
/// // Tapping the field makes it the key target.
/// keyboard.on_touch(pin.field_id(), TouchEvent::up(0.0, 0.0));
/// for label in ["1", "2", "3", "4", "5"] {
///     keyboard.on_key(label);
/// }
/// assert_eq!(pin.value(), "1234");
///
/// keyboard.on_key("⌫");
/// assert_eq!(pin.value(), "123");
/// ```
pub struct NumKeyboard<F: FieldRef> {
    fields: Vec<BoundField<F>>,
    active: Option<FieldId>,
    repeat: RepeatDelete,
    haptic_feedback_enabled: bool,
    haptics: Box<dyn HapticFeedback>,
    backspace_label: String,
}

impl<F: FieldRef> Default for NumKeyboard<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FieldRef> std::fmt::Debug for NumKeyboard<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumKeyboard")
            .field("fields", &self.attached_ids().collect::<Vec<_>>())
            .field("active", &self.active)
            .field("repeat", &self.repeat.state())
            .field("haptic_feedback_enabled", &self.haptic_feedback_enabled)
            .field("backspace_label", &self.backspace_label)
            .finish()
    }
}

impl<F: FieldRef> NumKeyboard<F> {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            active: None,
            repeat: RepeatDelete::new(DEFAULT_REPEAT_INTERVAL),
            haptic_feedback_enabled: true,
            haptics: Box::new(NoHaptics),
            backspace_label: DEFAULT_BACKSPACE_LABEL.to_owned(),
        }
    }

    /// Build a keyboard and attach every field in `config.fields`.
    pub fn from_config(config: KeyboardConfig<F>) -> Self {
        let KeyboardConfig {
            fields,
            max_length,
            haptic_feedback,
            repeat_interval,
            backspace_label,
        } = config;

        let mut keyboard = Self {
            repeat: RepeatDelete::new(repeat_interval),
            haptic_feedback_enabled: haptic_feedback,
            backspace_label,
            ..Self::new()
        };
        if !fields.is_empty() {
            keyboard.attach(fields, max_length);
        }
        keyboard
    }

    /// Route haptic requests to `sink`.
    pub fn with_haptics(mut self, sink: impl HapticFeedback + 'static) -> Self {
        self.set_haptics(sink);
        self
    }

    pub fn set_haptics(&mut self, sink: impl HapticFeedback + 'static) {
        self.haptics = Box::new(sink);
    }

    // =========================================================================
    // Attach / detach
    // =========================================================================

    /// Bind `fields` to this keyboard.
    ///
    /// Each new field gets its native input surface disabled, observers
    /// registered and `max_length` recorded. Fields that are already attached
    /// are left untouched, including their recorded `max_length`.
    pub fn attach(&mut self, fields: impl IntoIterator<Item = F>, max_length: MaxLength) {
        for mut handle in fields {
            let id = handle.id();
            if self.is_attached(id) {
                log::trace!(target: "numpad.binding", "{id} already attached");
                continue;
            }

            handle.set_native_input_enabled(false);
            handle.register_observers();
            self.fields.push(BoundField { handle, max_length });
            log::debug!(target: "numpad.binding", "attach {id} ({max_length:?})");
        }
    }

    /// [`attach`](Self::attach) without a length limit.
    pub fn attach_unbounded(&mut self, fields: impl IntoIterator<Item = F>) {
        self.attach(fields, MaxLength::Unbounded);
    }

    /// Unbind one field and hand its handle back.
    ///
    /// Restores the native input surface and unregisters observers. Clears
    /// the active field if it was this one. Unknown ids are ignored.
    pub fn detach(&mut self, id: FieldId) -> Option<F> {
        let Some(idx) = self.position(id) else {
            log::trace!(target: "numpad.binding", "detach {id}: not attached");
            return None;
        };

        let BoundField { mut handle, .. } = self.fields.remove(idx);
        release(&mut handle);
        if self.active == Some(id) {
            self.active = None;
        }
        log::debug!(target: "numpad.binding", "detach {id}");
        Some(handle)
    }

    /// Unbind every field and return to the freshly constructed binding state.
    ///
    /// Configuration (haptics, backspace label, repeat interval) is kept.
    pub fn detach_all(&mut self) {
        let count = self.fields.len();
        for mut bound in self.fields.drain(..) {
            release(&mut bound.handle);
        }
        self.active = None;
        self.repeat.stop();
        if count > 0 {
            log::debug!(target: "numpad.binding", "detach_all ({count} fields)");
        }
    }

    // =========================================================================
    // Configuration & read access
    // =========================================================================

    pub fn set_haptic_feedback_enabled(&mut self, enabled: bool) {
        self.haptic_feedback_enabled = enabled;
    }

    #[inline]
    pub fn is_haptic_feedback_enabled(&self) -> bool {
        self.haptic_feedback_enabled
    }

    #[inline]
    pub fn backspace_label(&self) -> &str {
        &self.backspace_label
    }

    #[inline]
    pub fn repeat_interval(&self) -> Duration {
        self.repeat.interval()
    }

    #[inline]
    pub fn active_field(&self) -> Option<FieldId> {
        self.active
    }

    pub fn is_attached(&self, id: FieldId) -> bool {
        self.position(id).is_some()
    }

    pub fn max_length(&self, id: FieldId) -> Option<MaxLength> {
        self.bound(id).map(BoundField::max_length)
    }

    pub fn field(&self, id: FieldId) -> Option<&F> {
        self.bound(id).map(BoundField::handle)
    }

    /// Attached field ids in attach order.
    pub fn attached_ids(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.fields.iter().map(|b| b.handle.id())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Field observers
    // =========================================================================

    /// Focus-change observer. Gaining focus selects the field; losing focus
    /// keeps it as the key target.
    pub fn on_focus_changed(&mut self, id: FieldId, has_focus: bool) {
        if has_focus && self.is_attached(id) {
            log::trace!(target: "numpad.binding", "focus {id}");
            self.active = Some(id);
        }
    }

    /// Touch observer. A release over an attached field selects it and moves
    /// its caret to the touched offset.
    ///
    /// Always returns `false`: the host's own touch handling (selection
    /// gestures and the like) still runs.
    pub fn on_touch(&mut self, id: FieldId, event: TouchEvent) -> bool {
        if event.action != TouchAction::Up {
            return false;
        }
        let Some(idx) = self.position(id) else {
            return false;
        };

        self.active = Some(id);
        let handle = &mut self.fields[idx].handle;
        let text = handle.text();
        let offset = clamp_caret(&text, handle.offset_for_position(event.x, event.y));
        handle.set_caret(offset);
        log::trace!(target: "numpad.binding", "touch {id} -> caret {offset}");
        false
    }

    // =========================================================================
    // Key grid
    // =========================================================================

    /// Dispatch a key of the grid by its label.
    pub fn on_key(&mut self, label: &str) {
        let Some(key) = Key::from_label(label, &self.backspace_label) else {
            return;
        };
        let Some(bound) = self.active_mut() else {
            log::trace!(target: "numpad.binding", "key {label:?} without active field");
            return;
        };

        bound.handle.request_focus();
        bound.handle.set_caret_visible(true);
        if self.haptic_feedback_enabled {
            self.haptics.perform(HapticKind::KeyTap);
        }

        let kind = match key.as_char() {
            Some(ch) => EditKind::Insert(ch),
            None => EditKind::DeleteBeforeCaret,
        };
        self.apply_to_active(kind);
    }

    /// Long-press observer of the delete control.
    ///
    /// Starts repeat-delete with one immediate step. Always returns `true`
    /// (the long press is consumed).
    pub fn on_delete_long_press(&mut self, now: Instant) -> bool {
        if self.repeat.start(now) {
            self.repeat_step();
        }
        true
    }

    /// Touch observer of the delete control. Release or cancel stops
    /// repeat-delete before this call returns.
    ///
    /// Always returns `false`, independent of the long-press observer.
    pub fn on_delete_touch(&mut self, event: TouchEvent) -> bool {
        if event.is_release() {
            self.repeat.stop();
        }
        false
    }

    /// Advance repeat-delete. Returns `true` if a character was removed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.repeat.poll(now) {
            return false;
        }
        self.repeat_step()
    }

    #[inline]
    pub fn is_repeating_delete(&self) -> bool {
        self.repeat.is_repeating()
    }

    /// When the host should call [`tick`](Self::tick) next, if repeating.
    #[inline]
    pub fn next_repeat_deadline(&self) -> Option<Instant> {
        self.repeat.next_deadline()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn position(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|b| b.handle.id() == id)
    }

    fn bound(&self, id: FieldId) -> Option<&BoundField<F>> {
        self.fields.iter().find(|b| b.handle.id() == id)
    }

    fn active_mut(&mut self) -> Option<&mut BoundField<F>> {
        let id = self.active?;
        self.fields.iter_mut().find(|b| b.handle.id() == id)
    }

    fn repeat_step(&mut self) -> bool {
        let changed = self.apply_to_active(EditKind::DeleteLast);
        if changed && self.haptic_feedback_enabled {
            self.haptics.perform(HapticKind::RepeatDelete);
        }
        changed
    }

    /// Run `kind` against the active field and write the result back.
    fn apply_to_active(&mut self, kind: EditKind) -> bool {
        let Some(bound) = self.active_mut() else {
            return false;
        };

        let text = bound.handle.text();
        let op = EditOperation {
            kind,
            field: bound.handle.id(),
            caret: clamp_caret(&text, bound.handle.caret()),
            text: &text,
        };
        let Some(edit) = op.apply(bound.max_length) else {
            return false;
        };

        bound.handle.set_text(&edit.text);
        bound.handle.set_caret(clamp_caret(&edit.text, edit.caret));
        true
    }
}

fn release<F: FieldRef>(handle: &mut F) {
    handle.unregister_observers();
    handle.set_native_input_enabled(true);
}
