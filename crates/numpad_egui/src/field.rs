//! `egui`-backed bindable text field.
//!
//! The field's text lives in a shared buffer so the host and the keyboard can
//! both hold a handle. Each frame [`EguiField::show`] renders a single-line
//! `TextEdit` over that buffer, pushes keyboard-made caret changes into
//! egui's `TextEditState`, and forwards focus and pointer-release
//! notifications to the keyboard while observers are registered.

use egui::text::{CCursor, CCursorRange};
use egui::{Color32, Context, Event, FontId, Key, Pos2, Response, Ui};
use numpad_core::{FieldId, FieldRef, NumKeyboard, TouchEvent, caret_from_x, clamp_caret};
use std::cell::RefCell;
use std::rc::Rc;

struct FieldState {
    text: String,
    /// Character offset into `text`.
    caret: usize,
    /// Set when the keyboard moved the caret; applied on the next `show`.
    caret_dirty: bool,
    native_input_enabled: bool,
    observed: bool,
    focus_requested: bool,
    caret_visible: bool,
    font_id: FontId,
    ctx: Option<Context>,
}

/// Shared handle to a text field rendered with `egui::TextEdit`.
#[derive(Clone)]
pub struct EguiField {
    id: egui::Id,
    state: Rc<RefCell<FieldState>>,
}

impl std::fmt::Debug for EguiField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let st = self.state.borrow();
        f.debug_struct("EguiField")
            .field("id", &self.id)
            .field("text", &st.text)
            .field("caret", &st.caret)
            .field("native_input_enabled", &st.native_input_enabled)
            .field("observed", &st.observed)
            .field("caret_visible", &st.caret_visible)
            .finish_non_exhaustive()
    }
}

impl EguiField {
    pub fn new(id_salt: impl std::hash::Hash, text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = clamp_caret(&text, usize::MAX);
        Self {
            id: egui::Id::new(id_salt),
            state: Rc::new(RefCell::new(FieldState {
                text,
                caret,
                caret_dirty: false,
                native_input_enabled: true,
                observed: false,
                focus_requested: false,
                caret_visible: true,
                font_id: FontId::proportional(18.0),
                ctx: None,
            })),
        }
    }

    pub fn with_font(self, font_id: FontId) -> Self {
        self.state.borrow_mut().font_id = font_id;
        self
    }

    #[inline]
    pub fn egui_id(&self) -> egui::Id {
        self.id
    }

    pub fn value(&self) -> String {
        self.state.borrow().text.clone()
    }

    pub fn is_native_input_enabled(&self) -> bool {
        self.state.borrow().native_input_enabled
    }

    /// Render the field and forward its events to `keyboard`.
    pub fn show_bound(&self, ui: &mut Ui, keyboard: &mut NumKeyboard<EguiField>) -> Response {
        let output = self.show(ui);
        let id = FieldId::from(self);

        if output.gained_focus {
            keyboard.on_focus_changed(id, true);
        }
        if output.lost_focus {
            keyboard.on_focus_changed(id, false);
        }
        if let Some(pos) = output.released_at {
            keyboard.on_touch(id, TouchEvent::up(pos.x, pos.y));
        }
        output.response
    }

    /// Render the field without a keyboard.
    ///
    /// Focus and release notifications are only reported while observers are
    /// registered; positions are relative to the text origin.
    pub fn show(&self, ui: &mut Ui) -> FieldOutput {
        let mut guard = self.state.borrow_mut();
        let st = &mut *guard;
        if st.ctx.is_none() {
            st.ctx = Some(ui.ctx().clone());
        }

        if !st.native_input_enabled && ui.memory(|m| m.has_focus(self.id)) {
            ui.input_mut(|i| i.events.retain(|e| !is_native_text_event(e)));
        }

        let output = egui::TextEdit::singleline(&mut st.text)
            .id(self.id)
            .font(st.font_id.clone())
            .cursor_at_end(false)
            .show(ui);

        let response = output.response;
        let galley_pos = output.galley_pos;
        let mut edit_state = output.state;

        if st.focus_requested {
            response.request_focus();
            st.focus_requested = false;
        }

        // TextEdit asks the platform for IME (and the soft keyboard) while
        // focused; an attached field takes its input from the key grid only.
        if !st.native_input_enabled && response.has_focus() {
            ui.ctx().output_mut(|o| o.ime = None);
        }

        if st.caret_dirty {
            st.caret = clamp_caret(&st.text, st.caret);
            edit_state
                .cursor
                .set_char_range(Some(CCursorRange::one(CCursor::new(st.caret))));
            edit_state.store(ui.ctx(), response.id);
            st.caret_dirty = false;
            ui.ctx().request_repaint();
        } else if let Some(range) = edit_state.cursor.char_range() {
            st.caret = clamp_caret(&st.text, range.primary.index);
        }

        let released = response.clicked() || response.drag_stopped();
        let released_at = released
            .then(|| response.interact_pointer_pos())
            .flatten()
            .map(|pos| (pos - galley_pos).to_pos2());

        FieldOutput {
            gained_focus: st.observed && response.gained_focus(),
            lost_focus: st.observed && response.lost_focus(),
            released_at: released_at.filter(|_| st.observed),
            response,
        }
    }
}

/// What happened to an [`EguiField`] during one frame.
#[derive(Debug)]
pub struct FieldOutput {
    pub response: Response,
    pub gained_focus: bool,
    pub lost_focus: bool,
    /// Pointer release over the field, relative to the text origin.
    pub released_at: Option<Pos2>,
}

/// Events that the platform input method would turn into edits.
fn is_native_text_event(event: &Event) -> bool {
    match event {
        Event::Text(_) | Event::Paste(_) | Event::Ime(_) | Event::Cut => true,
        Event::Key { key, .. } => matches!(key, Key::Backspace | Key::Delete | Key::Enter),
        _ => false,
    }
}

impl From<&EguiField> for FieldId {
    fn from(field: &EguiField) -> Self {
        FieldId::from_raw(field.id.value())
    }
}

impl FieldRef for EguiField {
    fn id(&self) -> FieldId {
        FieldId::from(self)
    }

    fn text(&self) -> String {
        self.value()
    }

    fn set_text(&mut self, text: &str) {
        let mut st = self.state.borrow_mut();
        st.text.clear();
        st.text.push_str(text);
        st.caret = clamp_caret(&st.text, st.caret);
        st.caret_dirty = true;
        if let Some(ctx) = &st.ctx {
            ctx.request_repaint();
        }
    }

    fn caret(&self) -> usize {
        self.state.borrow().caret
    }

    fn set_caret(&mut self, caret: usize) {
        let mut st = self.state.borrow_mut();
        st.caret = clamp_caret(&st.text, caret);
        st.caret_dirty = true;
    }

    fn set_native_input_enabled(&mut self, enabled: bool) {
        log::debug!(target: "numpad.egui", "{:?} native input {enabled}", self.id);
        self.state.borrow_mut().native_input_enabled = enabled;
    }

    fn register_observers(&mut self) {
        self.state.borrow_mut().observed = true;
    }

    fn unregister_observers(&mut self) {
        self.state.borrow_mut().observed = false;
    }

    fn request_focus(&mut self) {
        self.state.borrow_mut().focus_requested = true;
    }

    fn set_caret_visible(&mut self, visible: bool) {
        // egui draws the caret whenever the TextEdit has focus.
        self.state.borrow_mut().caret_visible = visible;
    }

    fn offset_for_position(&self, x: f32, _y: f32) -> usize {
        let st = self.state.borrow();
        let Some(ctx) = &st.ctx else {
            return st.caret;
        };

        let font_id = st.font_id.clone();
        caret_from_x(&st.text, x, |prefix| {
            ctx.fonts(|f| {
                f.layout_no_wrap(prefix.to_owned(), font_id.clone(), Color32::WHITE)
                    .rect
                    .width()
            })
        })
    }
}
