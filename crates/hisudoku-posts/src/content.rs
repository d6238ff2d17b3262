//! Board checks applied to submitted post content.

use hisudoku_core::{is_sudoku_string_valid_board, is_well_formed};
use serde::{Deserialize, Serialize};

use crate::PostError;

/// Which board checks submitted content must pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPolicy {
    /// Require the exact `ddd.ddd.ddd;` × 9 encoding.
    pub require_well_formed: bool,
    /// Require that no row, column, or box repeats a digit.
    pub require_valid_board: bool,
}

impl Default for ContentPolicy {
    fn default() -> Self {
        Self::STRICT
    }
}

impl ContentPolicy {
    /// Both checks enabled.
    pub const STRICT: Self = Self {
        require_well_formed: true,
        require_valid_board: true,
    };

    /// No checks; content is stored as submitted.
    pub const PERMISSIVE: Self = Self {
        require_well_formed: false,
        require_valid_board: false,
    };

    /// Checks `content` against this policy.
    ///
    /// The format check runs first, so malformed text is reported as
    /// [`PostError::MalformedContent`] even if its digits also conflict.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::MalformedContent`] or [`PostError::InvalidBoard`]
    /// for the first required check that fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use hisudoku_posts::{ContentPolicy, PostError};
    ///
    /// let policy = ContentPolicy::default();
    /// assert_eq!(policy.check("hello"), Err(PostError::MalformedContent));
    /// assert_eq!(
    ///     policy.check(&"123.456.789;".repeat(9)),
    ///     Err(PostError::InvalidBoard),
    /// );
    /// assert_eq!(policy.check(&"000.000.000;".repeat(9)), Ok(()));
    /// ```
    pub fn check(self, content: &str) -> Result<(), PostError> {
        if self.require_well_formed && !is_well_formed(content) {
            return Err(PostError::MalformedContent);
        }
        if self.require_valid_board && !is_sudoku_string_valid_board(content) {
            return Err(PostError::InvalidBoard);
        }
        Ok(())
    }
}
