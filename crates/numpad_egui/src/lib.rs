//! # numpad_egui
//!
//! `egui` host adapter for [`numpad_core`].
//!
//! - [`EguiField`]: a [`numpad_core::FieldRef`] rendered as a single-line
//!   `TextEdit` whose text/IME input is suppressed while attached
//! - [`KeyGrid`]: the button grid, including long-press repeat-delete on the
//!   backspace key
//!
//! ```ignore
//! let amount = EguiField::new("amount", "");
//! let mut keyboard = NumKeyboard::new();
//! keyboard.attach([amount.clone()], MaxLength::Bounded(8));
//! let mut grid = KeyGrid::new();
//!
//! egui::CentralPanel::default().show(ctx, |ui| {
//!     amount.show_bound(ui, &mut keyboard);
//!     grid.show(ui, &mut keyboard);
//! });
//! ```

mod field;
mod grid;
mod press;
#[cfg(test)]
mod testing;

pub use field::{EguiField, FieldOutput};
pub use grid::KeyGrid;
pub use press::{LONG_PRESS_TIMEOUT, PressEvent, PressTracker};
