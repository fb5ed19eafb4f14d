//! The key grid surface.

use crate::press::{PressEvent, PressTracker};
use egui::{Response, Ui, Vec2};
use numpad_core::{DEFAULT_BACKSPACE_LABEL, FieldRef, KEY_LAYOUT, NumKeyboard, TouchEvent};
use std::time::Instant;

/// Renders [`KEY_LAYOUT`] as buttons and feeds activations to a keyboard.
///
/// Taps go to [`NumKeyboard::on_key`]. Holding the backspace key starts
/// repeat-delete; releasing it stops it. The grid also ticks the repeat timer
/// and schedules repaints so the timer keeps running without input.
#[derive(Clone, Debug)]
pub struct KeyGrid {
    key_size: Vec2,
    spacing: Vec2,
    press: PressTracker,
}

impl Default for KeyGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyGrid {
    pub fn new() -> Self {
        Self {
            key_size: Vec2::new(72.0, 48.0),
            spacing: Vec2::splat(6.0),
            press: PressTracker::default(),
        }
    }

    pub fn key_size(mut self, size: impl Into<Vec2>) -> Self {
        self.key_size = size.into();
        self
    }

    pub fn spacing(mut self, spacing: impl Into<Vec2>) -> Self {
        self.spacing = spacing.into();
        self
    }

    pub fn show<F: FieldRef>(&mut self, ui: &mut Ui, keyboard: &mut NumKeyboard<F>) -> Response {
        let now = Instant::now();
        let backspace = keyboard.backspace_label().to_owned();

        let grid = egui::Grid::new(ui.id().with("numpad_key_grid"))
            .spacing(self.spacing)
            .show(ui, |ui| {
                for row in KEY_LAYOUT {
                    for label in row {
                        let label = if label == DEFAULT_BACKSPACE_LABEL {
                            backspace.as_str()
                        } else {
                            label
                        };
                        let resp = ui.add_sized(self.key_size, egui::Button::new(label));
                        if label == backspace {
                            self.route_delete(&resp, keyboard, now);
                        } else if resp.clicked() {
                            keyboard.on_key(label);
                        }
                    }
                    ui.end_row();
                }
            });

        if keyboard.tick(now) {
            ui.ctx().request_repaint();
        }
        let wake = [keyboard.next_repeat_deadline(), self.press.long_press_deadline()]
            .into_iter()
            .flatten()
            .min();
        if let Some(deadline) = wake {
            ui.ctx()
                .request_repaint_after(deadline.saturating_duration_since(now));
        }

        grid.response
    }

    fn route_delete<F: FieldRef>(
        &mut self,
        resp: &Response,
        keyboard: &mut NumKeyboard<F>,
        now: Instant,
    ) {
        match self.press.update(resp.is_pointer_button_down_on(), now) {
            Some(PressEvent::LongPress) => {
                log::trace!(target: "numpad.egui", "backspace long press");
                keyboard.on_delete_long_press(now);
            }
            Some(PressEvent::Release { .. }) => {
                let pos = resp.interact_pointer_pos().unwrap_or(resp.rect.center());
                let at = pos - resp.rect.min;
                keyboard.on_delete_touch(TouchEvent::up(at.x, at.y));
            }
            None => {}
        }

        if resp.clicked() && !self.press.last_press_was_long() {
            let label = keyboard.backspace_label().to_owned();
            keyboard.on_key(&label);
        }
    }
}
