//! Checks on a single row, column, or box.
//!
//! Two representations are supported, matching the two kinds of callers:
//!
//! - [`Fragment`] holds numeric cells (`0` = empty) read out of a [`Grid`],
//!   checked for completeness by [`is_fragment_complete`].
//! - Raw character fragments, e.g. the cells a client submitted, checked for
//!   duplicates by [`is_fragment_valid`] with a caller-chosen empty marker.
//!
//! [`Grid`]: crate::Grid

use std::collections::HashSet;

/// Nine cells of one row, column, or box, `0` meaning empty.
pub type Fragment = [u8; 9];

/// Empty-cell marker used by the canonical board encoding.
pub const DEFAULT_EMPTY_MARKER: &str = "0";

const SOLVED_FRAGMENT: Fragment = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Returns `true` if the fragment holds each digit 1-9 exactly once.
///
/// A fragment with any empty cell is never complete.
///
/// # Examples
///
/// ```
/// use hisudoku_core::is_fragment_complete;
///
/// assert!(is_fragment_complete(&[9, 8, 7, 6, 5, 4, 3, 2, 1]));
/// assert!(!is_fragment_complete(&[1, 1, 2, 3, 4, 5, 6, 7, 8]));
/// assert!(!is_fragment_complete(&[0, 2, 3, 4, 5, 6, 7, 8, 9]));
/// ```
#[must_use]
pub fn is_fragment_complete(fragment: &Fragment) -> bool {
    let mut sorted = *fragment;
    sorted.sort_unstable();
    sorted == SOLVED_FRAGMENT
}

/// Returns `true` if no two non-empty entries of `fragment` are equal.
///
/// Entries equal to `empty_marker` are ignored, so any number of empty cells
/// is allowed. The fragment may have any length.
///
/// # Examples
///
/// ```
/// use hisudoku_core::{DEFAULT_EMPTY_MARKER, is_fragment_valid};
///
/// assert!(is_fragment_valid(&["1", "0", "2", "0", "3"], DEFAULT_EMPTY_MARKER));
/// assert!(!is_fragment_valid(&["1", "1", "2"], DEFAULT_EMPTY_MARKER));
///
/// // Other encodings may use a different marker.
/// assert!(is_fragment_valid(&["_", "4", "_"], "_"));
/// ```
#[must_use]
pub fn is_fragment_valid<S>(fragment: &[S], empty_marker: &str) -> bool
where
    S: AsRef<str>,
{
    let filled = fragment
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|cell| *cell != empty_marker)
        .collect::<Vec<_>>();
    let distinct = filled.iter().copied().collect::<HashSet<_>>();
    distinct.len() == filled.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_in_any_order() {
        assert!(is_fragment_complete(&[1, 2, 3, 4, 5, 6, 7, 8, 9]));
        assert!(is_fragment_complete(&[9, 8, 7, 6, 5, 4, 3, 2, 1]));
        assert!(is_fragment_complete(&[5, 3, 4, 6, 7, 8, 9, 1, 2]));
    }

    #[test]
    fn test_incomplete_fragments() {
        assert!(!is_fragment_complete(&[1, 1, 2, 3, 4, 5, 6, 7, 8]));
        assert!(!is_fragment_complete(&[0; 9]));
        assert!(!is_fragment_complete(&[0, 2, 3, 4, 5, 6, 7, 8, 9]));
    }

    #[test]
    fn test_complete_does_not_modify_input() {
        let fragment = [9, 8, 7, 6, 5, 4, 3, 2, 1];
        assert!(is_fragment_complete(&fragment));
        assert_eq!(fragment, [9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_valid_ignores_repeated_empties() {
        assert!(is_fragment_valid(&["1", "0", "2", "0", "3"], "0"));
        assert!(is_fragment_valid(&["0"; 9], "0"));
        assert!(is_fragment_valid::<&str>(&[], "0"));
    }

    #[test]
    fn test_valid_rejects_real_duplicates() {
        assert!(!is_fragment_valid(&["1", "1", "2"], "0"));
        assert!(!is_fragment_valid(&["9", "0", "3", "0", "9"], "0"));
    }

    #[test]
    fn test_valid_respects_marker() {
        // With `.` as the marker, zeros count as ordinary values.
        assert!(!is_fragment_valid(&["0", "0", "."], "."));
        assert!(is_fragment_valid(&[".", ".", "0"], "."));
    }

    #[test]
    fn test_valid_accepts_owned_strings() {
        let cells = vec![String::from("4"), String::from("0"), String::from("7")];
        assert!(is_fragment_valid(&cells, DEFAULT_EMPTY_MARKER));
    }
}
