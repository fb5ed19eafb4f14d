//! Character-offset utilities for keypad editing.
//!
//! Carets handed to and from fields are character offsets (Unicode scalar
//! values), so every splice goes through [`byte_index`] before touching the
//! underlying UTF-8 string.

/// Number of characters in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Clamp a character offset to `[0, char_len(s)]`.
///
/// # Examples
///
/// ```
/// use numpad_core::clamp_caret;
///
/// assert_eq!(clamp_caret("a€b", 2), 2);
/// assert_eq!(clamp_caret("a€b", 100), 3);
/// assert_eq!(clamp_caret("", 5), 0);
/// ```
#[inline]
pub fn clamp_caret(s: &str, caret: usize) -> usize {
    caret.min(char_len(s))
}

/// Convert a character offset into a byte index into `s`.
///
/// Offsets past the end map to `s.len()`.
///
/// # Examples
///
/// ```
/// use numpad_core::byte_index;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(byte_index(s, 0), 0);
/// assert_eq!(byte_index(s, 1), 1);
/// assert_eq!(byte_index(s, 2), 4);
/// assert_eq!(byte_index(s, 3), 5);
/// assert_eq!(byte_index(s, 9), 5);
/// ```
pub fn byte_index(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

/// Rebuild the list of valid caret byte positions for a string.
///
/// The resulting vector contains every char boundary including 0 and
/// `value.len()`, so the position of an entry in the list is its character
/// offset.
///
/// # Examples
///
/// ```
/// use numpad_core::rebuild_cursor_boundaries;
///
/// let mut boundaries = Vec::new();
/// rebuild_cursor_boundaries("a€b", &mut boundaries);
/// assert_eq!(boundaries, vec![0, 1, 4, 5]);
/// ```
pub fn rebuild_cursor_boundaries(value: &str, out: &mut Vec<usize>) {
    out.clear();
    out.extend(value.char_indices().map(|(i, _)| i));

    if out.first().copied() != Some(0) {
        out.insert(0, 0);
    }
    if out.last().copied() != Some(value.len()) {
        out.push(value.len());
    }
}

/// Find the caret character offset nearest to an x-coordinate.
///
/// Binary search over pre-built `boundaries` (see [`rebuild_cursor_boundaries`])
/// for the last prefix whose measured width is `<= x`, then snap to whichever
/// neighbouring boundary is closer.
pub fn caret_from_x_with_boundaries(
    value: &str,
    boundaries: &[usize],
    x: f32,
    mut measure_prefix: impl FnMut(&str) -> f32,
) -> usize {
    if value.is_empty() || boundaries.is_empty() {
        return 0;
    }

    let x = x.max(0.0);

    let mut lo = 0usize;
    let mut hi = boundaries.len() - 1;

    while lo < hi {
        let mid = lo + (hi - lo).div_ceil(2);
        let w = measure_prefix(&value[..boundaries[mid]]).max(0.0);
        if w <= x {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    let left_w = measure_prefix(&value[..boundaries[lo]]).max(0.0);

    if lo + 1 < boundaries.len() {
        let right_w = measure_prefix(&value[..boundaries[lo + 1]]).max(0.0);
        if x - left_w > right_w - x {
            return lo + 1;
        }
    }

    lo
}

/// Convenience wrapper around [`caret_from_x_with_boundaries`] that builds
/// the boundary list itself.
pub fn caret_from_x(value: &str, x: f32, measure_prefix: impl FnMut(&str) -> f32) -> usize {
    let mut boundaries = Vec::new();
    rebuild_cursor_boundaries(value, &mut boundaries);
    caret_from_x_with_boundaries(value, &boundaries, x, measure_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_index_walks_multibyte_chars() {
        let s = "1€2";
        assert_eq!(byte_index(s, 0), 0);
        assert_eq!(byte_index(s, 1), 1);
        assert_eq!(byte_index(s, 2), 4);
        assert_eq!(byte_index(s, 3), s.len());
    }

    #[test]
    fn clamp_caret_counts_chars_not_bytes() {
        assert_eq!(clamp_caret("€€", 2), 2);
        assert_eq!(clamp_caret("€€", 3), 2);
    }

    #[test]
    fn caret_from_x_picks_nearest_boundary() {
        let value = "hello";
        let measure = |s: &str| s.chars().count() as f32 * 10.0;

        assert_eq!(caret_from_x(value, 0.0, measure), 0);
        assert_eq!(caret_from_x(value, 4.0, measure), 0); // closer to 0 than 10
        assert_eq!(caret_from_x(value, 6.0, measure), 1); // closer to 10 than 0
        assert_eq!(caret_from_x(value, 19.0, measure), 2);
        assert_eq!(caret_from_x(value, 999.0, measure), 5);
        assert_eq!(caret_from_x(value, -30.0, measure), 0);
    }

    #[test]
    fn caret_from_x_returns_char_offsets_for_multibyte_text() {
        let value = "€€€";
        let measure = |s: &str| s.chars().count() as f32 * 10.0;

        assert_eq!(caret_from_x(value, 21.0, measure), 2);
        assert_eq!(caret_from_x(value, 100.0, measure), 3);
    }

    #[test]
    fn caret_from_x_on_empty_text_is_zero() {
        assert_eq!(caret_from_x("", 50.0, |_| 0.0), 0);
    }
}
