//! Headless frame driver shared by the adapter tests.

use egui::{Context, Event, FullOutput, Modifiers, PointerButton, Pos2, RawInput, Ui};

/// Run one frame with `events` and a central panel filled by `add`.
pub(crate) fn frame(ctx: &Context, events: Vec<Event>, mut add: impl FnMut(&mut Ui)) -> FullOutput {
    let input = RawInput {
        events,
        ..RawInput::default()
    };
    ctx.run(input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| add(ui));
    })
}

pub(crate) fn hover(pos: Pos2) -> Vec<Event> {
    vec![Event::PointerMoved(pos)]
}

pub(crate) fn press(pos: Pos2) -> Vec<Event> {
    vec![button(pos, true)]
}

pub(crate) fn release(pos: Pos2) -> Vec<Event> {
    vec![button(pos, false)]
}

/// Frames for a primary click at `pos`: hover, press, release.
pub(crate) fn click(pos: Pos2) -> [Vec<Event>; 3] {
    [hover(pos), press(pos), release(pos)]
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}
