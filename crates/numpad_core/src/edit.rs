//! Caret-aware text edits for the keypad.
//!
//! Everything here is a pure function of `(text, caret)`: the result is
//! either `Some(Edit)` with the new text and caret, or `None` when the key
//! press has no effect. Writing the result back to a field is the binding
//! manager's job.

use crate::id::FieldId;
use crate::text::{byte_index, char_len, clamp_caret};

/// Per-field length constraint.
///
/// Only a positive bound is enforced: `Bounded(0)` admits any length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MaxLength {
    #[default]
    Unbounded,
    Bounded(usize),
}

impl MaxLength {
    /// Returns `true` if text of `len` characters may grow by one more.
    #[inline]
    pub fn admits_insert(self, len: usize) -> bool {
        match self {
            Self::Bounded(max) if max > 0 => len < max,
            _ => true,
        }
    }
}

impl From<Option<usize>> for MaxLength {
    fn from(max: Option<usize>) -> Self {
        max.map_or(Self::Unbounded, Self::Bounded)
    }
}

/// Result of a successful edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    pub text: String,
    /// Character offset, always within `[0, char_len(text)]`.
    pub caret: usize,
}

impl Edit {
    fn new(text: String, caret: usize) -> Self {
        let caret = clamp_caret(&text, caret);
        Self { text, caret }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKind {
    Insert(char),
    DeleteBeforeCaret,
    /// Drop the final character regardless of caret; used by repeat-delete.
    DeleteLast,
}

/// One mutation request against a field, built per key event.
#[derive(Clone, Copy, Debug)]
pub struct EditOperation<'a> {
    pub kind: EditKind,
    pub field: FieldId,
    pub text: &'a str,
    pub caret: usize,
}

impl EditOperation<'_> {
    pub fn apply(&self, max_length: MaxLength) -> Option<Edit> {
        let edit = match self.kind {
            EditKind::Insert(ch) => insert_char(self.text, self.caret, ch, max_length),
            EditKind::DeleteBeforeCaret => delete_before_caret(self.text, self.caret),
            EditKind::DeleteLast => delete_last_char(self.text),
        };
        match &edit {
            Some(e) => log::trace!(
                target: "numpad.edit",
                "{} {:?}: {:?}@{} -> {:?}@{}",
                self.field,
                self.kind,
                self.text,
                self.caret,
                e.text,
                e.caret
            ),
            None => log::trace!(
                target: "numpad.edit",
                "{} {:?}: no-op at {:?}@{}",
                self.field,
                self.kind,
                self.text,
                self.caret
            ),
        }
        edit
    }
}

/// Insert `ch` at `caret`.
///
/// Returns `None` when `max_length` is a positive bound the text already
/// reaches.
///
/// ```
/// use numpad_core::{MaxLength, insert_char};
///
/// let edit = insert_char("13", 1, '2', MaxLength::Unbounded).unwrap();
/// assert_eq!((edit.text.as_str(), edit.caret), ("123", 2));
/// assert!(insert_char("123", 3, '4', MaxLength::Bounded(3)).is_none());
/// ```
pub fn insert_char(text: &str, caret: usize, ch: char, max_length: MaxLength) -> Option<Edit> {
    if !max_length.admits_insert(char_len(text)) {
        return None;
    }

    let caret = clamp_caret(text, caret);
    let mut out = String::with_capacity(text.len() + ch.len_utf8());
    let at = byte_index(text, caret);
    out.push_str(&text[..at]);
    out.push(ch);
    out.push_str(&text[at..]);
    Some(Edit::new(out, caret + 1))
}

/// Remove the character immediately before `caret`.
///
/// Returns `None` when the caret sits at the start of the text.
pub fn delete_before_caret(text: &str, caret: usize) -> Option<Edit> {
    let caret = clamp_caret(text, caret);
    let removed = caret.checked_sub(1)?;

    let start = byte_index(text, removed);
    let end = byte_index(text, caret);
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..start]);
    out.push_str(&text[end..]);
    Some(Edit::new(out, removed))
}

/// Remove the final character and place the caret at the new end.
///
/// Returns `None` on empty text.
pub fn delete_last_char(text: &str) -> Option<Edit> {
    let mut out = text.to_owned();
    out.pop()?;
    let caret = char_len(&out);
    Some(Edit::new(out, caret))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_splices_at_caret() {
        let edit = insert_char("1245", 2, '3', MaxLength::Unbounded).unwrap();
        assert_eq!(edit.text, "12345");
        assert_eq!(edit.caret, 3);
    }

    #[test]
    fn insert_at_max_length_is_rejected() {
        assert!(insert_char("12", 2, '3', MaxLength::Bounded(2)).is_none());
        assert!(insert_char("123", 0, '3', MaxLength::Bounded(2)).is_none());
        assert!(insert_char("1", 1, '2', MaxLength::Bounded(2)).is_some());
    }

    #[test]
    fn zero_bound_admits_anything() {
        let edit = insert_char("999", 3, '9', MaxLength::Bounded(0)).unwrap();
        assert_eq!(edit.text, "9999");
    }

    #[test]
    fn insert_clamps_out_of_range_caret() {
        let edit = insert_char("12", 40, '3', MaxLength::Unbounded).unwrap();
        assert_eq!(edit.text, "123");
        assert_eq!(edit.caret, 3);
    }

    #[test]
    fn insert_counts_characters_for_the_bound() {
        // Three chars, nine bytes.
        assert!(insert_char("€€€", 3, '1', MaxLength::Bounded(4)).is_some());
        assert!(insert_char("€€€", 3, '1', MaxLength::Bounded(3)).is_none());
    }

    #[test]
    fn delete_before_caret_removes_previous_char() {
        let edit = delete_before_caret("hello", 2).unwrap();
        assert_eq!(edit.text, "hllo");
        assert_eq!(edit.caret, 1);
    }

    #[test]
    fn delete_before_caret_at_start_is_noop() {
        assert!(delete_before_caret("hello", 0).is_none());
        assert!(delete_before_caret("", 3).is_none());
    }

    #[test]
    fn delete_before_caret_handles_multibyte() {
        let edit = delete_before_caret("1€2", 2).unwrap();
        assert_eq!(edit.text, "12");
        assert_eq!(edit.caret, 1);
    }

    #[test]
    fn delete_last_moves_caret_to_end() {
        let edit = delete_last_char("12345").unwrap();
        assert_eq!(edit.text, "1234");
        assert_eq!(edit.caret, 4);
        assert!(delete_last_char("").is_none());
    }

    #[test]
    fn operation_dispatches_on_kind() {
        let op = EditOperation {
            kind: EditKind::DeleteBeforeCaret,
            field: FieldId::from_raw(1),
            text: "abc",
            caret: 3,
        };
        assert_eq!(op.apply(MaxLength::Unbounded), Some(Edit::new("ab".into(), 2)));

        let op = EditOperation {
            kind: EditKind::Insert('4'),
            ..op
        };
        assert_eq!(op.apply(MaxLength::Bounded(3)), None);
    }
}
