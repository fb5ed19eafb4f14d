#![no_main]

use libfuzzer_sys::fuzz_target;
use numpad_core::{
    FieldId, MaxLength, MemoryField, NumKeyboard, TouchAction, TouchEvent, char_len,
};
use std::time::{Duration, Instant};

const LABELS: [&str; 5] = ["1", "9", ".", "0", "⌫"];

fuzz_target!(|data: &[u8]| {
    let Some((&max, ops)) = data.split_first() else {
        return;
    };

    let fields = [
        MemoryField::new(FieldId::from_raw(1)),
        MemoryField::with_text(FieldId::from_raw(2), "123"),
    ];
    let max_length = MaxLength::from(Some(usize::from(max % 8)));
    let mut keyboard = NumKeyboard::new();
    keyboard.attach(fields.iter().cloned(), max_length);

    let t0 = Instant::now();
    let mut elapsed = Duration::ZERO;

    for pair in ops.chunks(2) {
        let op = pair[0];
        let arg = pair.get(1).copied().unwrap_or(0);
        let field = &fields[usize::from(arg & 1)];
        let id = field.field_id();

        match op % 9 {
            0..=2 => keyboard.on_key(LABELS[usize::from(arg) % LABELS.len()]),
            3 => keyboard.on_focus_changed(id, arg & 2 == 0),
            4 => {
                keyboard.on_touch(id, TouchEvent::up(f32::from(arg), 0.0));
            }
            5 => {
                keyboard.on_delete_long_press(t0 + elapsed);
            }
            6 => {
                let release = TouchEvent::new(TouchAction::Up, f32::from(arg), 0.0);
                keyboard.on_delete_touch(release);
            }
            7 => {
                keyboard.detach(id);
            }
            _ => keyboard.attach([field.clone()], max_length),
        }

        elapsed += Duration::from_millis(u64::from(arg % 64));
        keyboard.tick(t0 + elapsed);

        if let Some(active) = keyboard.active_field() {
            assert!(keyboard.is_attached(active));
        }
        for f in &fields {
            let text = f.value();
            assert!(f.caret_offset() <= char_len(&text));
            assert_eq!(f.is_native_input_enabled(), !keyboard.is_attached(f.field_id()));
        }
    }
});
