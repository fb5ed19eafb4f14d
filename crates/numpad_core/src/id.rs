//! Host-agnostic identifier for bindable text fields.
//!
//! A plain `u64` keeps the keyboard decoupled from whatever widget ids the
//! host toolkit uses. Integration layers map their own ids with
//! [`FieldId::from_raw`].

/// Opaque identifier for a text field attached to a [`NumKeyboard`](crate::NumKeyboard).
///
/// The keyboard never holds an owning reference to the active field; it keeps
/// a `FieldId` and looks the field up in its attached set on every event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(u64);

impl FieldId {
    /// Create a `FieldId` from a raw value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the underlying raw value.
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field#{}", self.0)
    }
}
