//! Lexical check of the canonical board encoding.

use std::sync::LazyLock;

use regex::Regex;

static CANONICAL_BOARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{3}\.[0-9]{3}\.[0-9]{3};){9}$").expect("canonical board pattern is valid")
});

/// Returns `true` if `text` is exactly nine `ddd.ddd.ddd;` groups.
///
/// This is a purely structural check. It says nothing about whether the digits
/// obey sudoku placement rules; use [`is_sudoku_string_valid_board`] for that.
///
/// [`is_sudoku_string_valid_board`]: crate::is_sudoku_string_valid_board
///
/// # Examples
///
/// ```
/// use hisudoku_core::is_well_formed;
///
/// let row = "123.456.789;";
/// assert!(is_well_formed(&row.repeat(9)));
///
/// // Eight digits in the first row.
/// let short = format!("123.456.78;{}", row.repeat(8));
/// assert!(!is_well_formed(&short));
/// ```
#[must_use]
pub fn is_well_formed(text: &str) -> bool {
    CANONICAL_BOARD.is_match(text)
}
