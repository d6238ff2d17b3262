//! Sudoku placement-rule checks.
//!
//! A board is *valid* when no non-zero digit appears twice in the same row,
//! column, or box. Empty cells (`0`) never conflict, so a partially filled
//! board can be valid, and so is a completely empty one.
//!
//! A board is *solved* when it is full and every house is a permutation of
//! 1-9; see [`is_grid_solved`].

use crate::{Grid, House, fragment::is_fragment_complete, grid::parse_board};

/// The first repeated digit found while scanning a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    /// The house that already contained the digit.
    pub house: House,
    /// The repeated digit (1-9).
    pub digit: u8,
    /// Column of the cell where the repeat was seen.
    pub x: u8,
    /// Row of the cell where the repeat was seen.
    pub y: u8,
}

/// Scans the grid and returns the first placement conflict, if any.
///
/// Cells are visited in row-major order. For each filled cell the row, then
/// the column, then the box is checked, and the scan stops at the first digit
/// already seen in one of them.
///
/// # Examples
///
/// ```
/// use hisudoku_core::{Grid, House, find_conflict};
///
/// let mut grid = Grid::EMPTY;
/// grid.set(0, 0, 4).unwrap();
/// grid.set(1, 1, 4).unwrap();
///
/// let conflict = find_conflict(&grid).unwrap();
/// assert_eq!(conflict.house, House::Box { index: 0 });
/// assert_eq!((conflict.x, conflict.y, conflict.digit), (1, 1, 4));
/// ```
#[must_use]
pub fn find_conflict(grid: &Grid) -> Option<Conflict> {
    // Bit `d` set = digit `d` already seen in that house.
    let mut rows = [0_u16; 9];
    let mut columns = [0_u16; 9];
    let mut boxes = [0_u16; 9];

    for y in 0..9 {
        for x in 0..9 {
            let digit = grid.cell(x, y);
            if digit == 0 {
                continue;
            }
            let bit = 1_u16 << digit;
            let index = House::box_index(x, y);
            for (house, seen) in [
                (House::Row { y }, &mut rows[usize::from(y)]),
                (House::Column { x }, &mut columns[usize::from(x)]),
                (House::Box { index }, &mut boxes[usize::from(index)]),
            ] {
                if *seen & bit != 0 {
                    return Some(Conflict { house, digit, x, y });
                }
                *seen |= bit;
            }
        }
    }
    None
}

/// Returns `true` if no row, column, or box repeats a non-zero digit.
///
/// # Examples
///
/// ```
/// use hisudoku_core::{Grid, is_board_valid};
///
/// assert!(is_board_valid(&Grid::EMPTY));
///
/// let mut grid = Grid::EMPTY;
/// grid.set(0, 3, 9).unwrap();
/// grid.set(0, 7, 9).unwrap();
/// assert!(!is_board_valid(&grid)); // same column
/// ```
#[must_use]
pub fn is_board_valid(grid: &Grid) -> bool {
    find_conflict(grid).is_none()
}

/// Parses board text and checks it with [`is_board_valid`].
///
/// The text is read with [`parse_board`], so separators are not checked;
/// combine with [`is_well_formed`] when the exact format matters. Text whose
/// digits do not make up nine rows of nine cells is never a valid board.
///
/// [`is_well_formed`]: crate::is_well_formed
///
/// # Examples
///
/// ```
/// use hisudoku_core::is_sudoku_string_valid_board;
///
/// let row = "123.456.789;";
/// // Every column repeats its digit.
/// assert!(!is_sudoku_string_valid_board(&row.repeat(9)));
///
/// // Too few rows.
/// assert!(!is_sudoku_string_valid_board(row));
/// ```
#[must_use]
pub fn is_sudoku_string_valid_board(text: &str) -> bool {
    Grid::try_from(parse_board(text)).is_ok_and(|grid| is_board_valid(&grid))
}

/// Returns `true` if every row, column, and box holds each digit 1-9 once.
///
/// # Examples
///
/// ```
/// use hisudoku_core::{Grid, is_grid_solved};
///
/// assert!(!is_grid_solved(&Grid::EMPTY));
/// ```
#[must_use]
pub fn is_grid_solved(grid: &Grid) -> bool {
    grid.fragments()
        .all(|(_, fragment)| is_fragment_complete(&fragment))
}
