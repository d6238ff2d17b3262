//! Board validation for the hisudoku sudoku-sharing backend.
//!
//! Boards travel as text: nine row-groups of the form `ddd.ddd.ddd;`, where
//! every `d` is a digit and `0` marks an empty cell. This crate turns that text
//! into grids and answers two independent questions about it:
//!
//! 1. **Format** - does the text follow the canonical encoding exactly?
//!    See [`is_well_formed`].
//! 2. **Content** - does the board break a placement rule, i.e. is some
//!    non-zero digit repeated inside a row, column, or 3×3 box?
//!    See [`is_board_valid`] and [`is_sudoku_string_valid_board`].
//!
//! Fragment helpers ([`is_fragment_complete`], [`is_fragment_valid`]) check a
//! single row, column, or box on its own.
//!
//! Every check is a pure function over its input: no state, no I/O, safe to
//! call from any thread.
//!
//! # Examples
//!
//! ```
//! use hisudoku_core::{Grid, is_board_valid, is_sudoku_string_valid_board, is_well_formed};
//!
//! let text = "530.070.000;600.195.000;098.000.060;\
//!             800.060.003;400.803.001;700.020.006;\
//!             060.000.280;000.419.005;000.080.079;";
//!
//! assert!(is_well_formed(text));
//! assert!(is_sudoku_string_valid_board(text));
//!
//! let grid: Grid = text.parse().unwrap();
//! assert!(is_board_valid(&grid));
//! assert_eq!(grid.to_string(), text);
//! ```

pub mod format;
pub mod fragment;
pub mod grid;
pub mod house;
pub mod validation;

#[cfg(test)]
mod testing;

pub use self::{
    format::is_well_formed,
    fragment::{DEFAULT_EMPTY_MARKER, Fragment, is_fragment_complete, is_fragment_valid},
    grid::{Grid, GridError, ParseGridError, parse_board},
    house::House,
    validation::{
        Conflict, find_conflict, is_board_valid, is_grid_solved, is_sudoku_string_valid_board,
    },
};
