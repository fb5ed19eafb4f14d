use numpad_core::{
    FieldId, FieldRef, KeyboardSettings, MaxLength, MemoryField, NumKeyboard, TouchAction,
    TouchEvent, char_len,
};
use std::time::{Duration, Instant};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn keyboard_with(field: &MemoryField, max_length: MaxLength) -> NumKeyboard<MemoryField> {
    let mut keyboard = NumKeyboard::new();
    keyboard.attach([field.clone()], max_length);
    keyboard.on_focus_changed(field.field_id(), true);
    keyboard
}

#[test]
fn typing_stops_at_max_length() {
    let field = MemoryField::new(FieldId::from_raw(1));
    let mut keyboard = keyboard_with(&field, MaxLength::Bounded(3));

    for label in ["1", "2", "3"] {
        keyboard.on_key(label);
    }
    assert_eq!(field.value(), "123");
    assert_eq!(field.caret_offset(), 3);

    keyboard.on_key("4");
    assert_eq!(field.value(), "123");
    assert_eq!(field.caret_offset(), 3);
}

#[test]
fn backspace_until_empty_then_noop() {
    let field = MemoryField::with_text(FieldId::from_raw(1), "abc");
    let mut keyboard = keyboard_with(&field, MaxLength::Unbounded);

    keyboard.on_key("⌫");
    assert_eq!((field.value().as_str(), field.caret_offset()), ("ab", 2));

    keyboard.on_key("⌫");
    keyboard.on_key("⌫");
    assert_eq!((field.value().as_str(), field.caret_offset()), ("", 0));

    keyboard.on_key("⌫");
    assert_eq!((field.value().as_str(), field.caret_offset()), ("", 0));
}

#[test]
fn backspace_at_caret_start_keeps_text() {
    let mut field = MemoryField::with_text(FieldId::from_raw(1), "42");
    field.set_caret(0);
    let mut keyboard = keyboard_with(&field, MaxLength::Unbounded);

    keyboard.on_key("⌫");
    assert_eq!(field.value(), "42");
    assert_eq!(field.caret_offset(), 0);
}

#[test]
fn insert_and_delete_mid_text() {
    let mut field = MemoryField::with_text(FieldId::from_raw(1), "1245");
    field.set_caret(2);
    let mut keyboard = keyboard_with(&field, MaxLength::Unbounded);

    keyboard.on_key("3");
    assert_eq!(field.value(), "12345");
    assert_eq!(field.caret_offset(), 3);

    keyboard.on_key("⌫");
    assert_eq!(field.value(), "1245");
    assert_eq!(field.caret_offset(), 2);

    keyboard.on_key(".");
    assert_eq!(field.value(), "12.45");
}

#[test]
fn long_press_deletes_from_the_end_until_release() {
    let mut field = MemoryField::with_text(FieldId::from_raw(1), "12345");
    field.set_caret(1);
    let mut keyboard = keyboard_with(&field, MaxLength::Unbounded);
    let t0 = Instant::now();

    assert!(keyboard.on_delete_long_press(t0));
    assert_eq!(field.value(), "1234");
    assert_eq!(field.caret_offset(), 4);

    assert!(!keyboard.tick(t0 + ms(30)));
    assert!(keyboard.tick(t0 + ms(50)));
    assert_eq!(field.caret_offset(), 3);
    assert!(keyboard.tick(t0 + ms(100)));
    assert_eq!(field.value(), "12");
    assert_eq!(field.caret_offset(), 2);

    assert!(!keyboard.on_delete_touch(TouchEvent::up(0.0, 0.0)));
    assert_eq!(keyboard.next_repeat_deadline(), None);
    assert!(!keyboard.tick(t0 + ms(150)));
    assert!(!keyboard.tick(t0 + ms(1_000)));
    assert_eq!(field.value(), "12");
}

#[test]
fn repeat_delete_empties_field_and_stays_armed() {
    let field = MemoryField::with_text(FieldId::from_raw(1), "12");
    let mut keyboard = keyboard_with(&field, MaxLength::Unbounded);
    let t0 = Instant::now();

    keyboard.on_delete_long_press(t0);
    keyboard.tick(t0 + ms(50));
    assert_eq!(field.value(), "");
    assert!(!keyboard.tick(t0 + ms(100)));
    assert!(keyboard.is_repeating_delete());

    keyboard.on_delete_touch(TouchEvent::new(TouchAction::Cancel, 0.0, 0.0));
    assert!(!keyboard.is_repeating_delete());
}

#[test]
fn touch_up_moves_caret_and_selects_field() {
    let other = MemoryField::new(FieldId::from_raw(1));
    let field = MemoryField::with_text(FieldId::from_raw(2), "hello");
    let mut keyboard = keyboard_with(&other, MaxLength::Unbounded);
    keyboard.attach_unbounded([field.clone()]);

    let x = field.x_for_offset(2);
    let consumed = keyboard.on_touch(field.field_id(), TouchEvent::up(x, 4.0));

    assert!(!consumed);
    assert_eq!(keyboard.active_field(), Some(field.field_id()));
    assert_eq!(field.caret_offset(), 2);
    assert_eq!(field.value(), "hello");
    assert_eq!(field.text_revision(), 0);

    keyboard.on_key("0");
    assert_eq!(field.value(), "he0llo");
    assert_eq!(other.value(), "");
}

#[test]
fn touch_past_text_end_clamps_caret() {
    let field = MemoryField::with_text(FieldId::from_raw(1), "12");
    let mut keyboard = keyboard_with(&field, MaxLength::Unbounded);

    keyboard.on_touch(field.field_id(), TouchEvent::up(10_000.0, 0.0));
    assert_eq!(field.caret_offset(), 2);
}

#[test]
fn keys_after_detach_all_are_noops() {
    let field = MemoryField::with_text(FieldId::from_raw(1), "9");
    let mut keyboard = keyboard_with(&field, MaxLength::Unbounded);

    keyboard.detach_all();
    keyboard.on_key("1");
    keyboard.on_key("⌫");
    keyboard.on_delete_long_press(Instant::now());
    keyboard.on_focus_changed(field.field_id(), true);

    assert_eq!(field.value(), "9");
    assert_eq!(keyboard.active_field(), None);
    assert!(field.is_native_input_enabled());
}

#[test]
fn keys_route_to_last_focused_field() {
    let a = MemoryField::new(FieldId::from_raw(1));
    let b = MemoryField::new(FieldId::from_raw(2));
    let mut keyboard = NumKeyboard::new();
    keyboard.attach([a.clone()], MaxLength::Bounded(2));
    keyboard.attach([b.clone()], MaxLength::Bounded(4));

    keyboard.on_focus_changed(a.field_id(), true);
    keyboard.on_key("1");
    keyboard.on_focus_changed(b.field_id(), true);
    keyboard.on_key("2");
    keyboard.on_focus_changed(b.field_id(), false);
    keyboard.on_key("3");

    assert_eq!(a.value(), "1");
    assert_eq!(b.value(), "23");
}

#[test]
fn settings_drive_a_keyboard() {
    let field = MemoryField::new(FieldId::from_raw(1));
    let settings = KeyboardSettings::from_toml_str(
        r#"
        max_length = 2
        haptic_feedback = false
        repeat_interval_ms = 100
        "#,
    )
    .unwrap();
    let mut keyboard = NumKeyboard::from_config(settings.into_config(vec![field.clone()]));

    assert!(!keyboard.is_haptic_feedback_enabled());
    assert_eq!(keyboard.repeat_interval(), ms(100));
    assert_eq!(keyboard.max_length(field.field_id()), Some(MaxLength::Bounded(2)));

    keyboard.on_focus_changed(field.field_id(), true);
    for label in ["7", "7", "7"] {
        keyboard.on_key(label);
    }
    assert_eq!(field.value(), "77");

    let t0 = Instant::now();
    keyboard.on_delete_long_press(t0);
    assert!(!keyboard.tick(t0 + ms(50)));
    assert!(keyboard.tick(t0 + ms(100)));
    assert_eq!(field.value(), "");
}

/// Small deterministic generator so the sequence test needs no extra crates.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

#[test]
fn caret_stays_in_range_for_random_sequences() {
    for seed in 0..32u64 {
        let field = MemoryField::new(FieldId::from_raw(1));
        let max = MaxLength::from(Some((seed % 6) as usize));
        let mut keyboard = keyboard_with(&field, max);
        let mut rng = Lcg(seed);
        let t0 = Instant::now();

        for step in 0..200u64 {
            let before = field.value();
            match rng.next() % 7 {
                0..=2 => keyboard.on_key(["1", "2", ".", "0"][(rng.next() % 4) as usize]),
                3 => keyboard.on_key("⌫"),
                4 => {
                    let x = (rng.next() % 120) as f32;
                    keyboard.on_touch(field.field_id(), TouchEvent::up(x, 0.0));
                }
                5 => {
                    keyboard.on_delete_long_press(t0 + ms(step * 10));
                }
                _ => {
                    keyboard.on_delete_touch(TouchEvent::up(0.0, 0.0));
                }
            }
            keyboard.tick(t0 + ms(step * 10));

            let text = field.value();
            assert!(field.caret_offset() <= char_len(&text), "seed {seed} step {step}");
            if let MaxLength::Bounded(n) = max
                && n > 0
            {
                assert!(
                    char_len(&text) <= n.max(char_len(&before)),
                    "seed {seed} step {step}: {text:?} exceeds {n}"
                );
            }
        }
    }
}
