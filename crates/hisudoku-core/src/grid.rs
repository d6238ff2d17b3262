//! Board grids and their text encoding.
//!
//! [`parse_board`] is the lenient reader: it pulls digits out of each
//! `;`-separated segment and never fails. [`Grid`] is the strict, fixed-size
//! form used by the constraint checks; it can only be built from input that
//! really is nine rows of nine digits.
//!
//! # Examples
//!
//! ```
//! use hisudoku_core::{Grid, GridError, parse_board};
//!
//! let rows = parse_board("123.456.789;000.000.000;");
//! assert_eq!(rows.len(), 2);
//!
//! assert_eq!(
//!     Grid::try_from(rows),
//!     Err(GridError::RowCount { count: 2 }),
//! );
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Fragment, House, format::is_well_formed};

/// Splits board text on `;` and reads the digits of each segment.
///
/// Non-digit characters are skipped. Segments without any digit produce no
/// row, so the empty segment after a trailing `;` is dropped. The rows are
/// returned as found; nothing checks that there are nine of them or that each
/// holds nine cells.
///
/// # Examples
///
/// ```
/// use hisudoku_core::parse_board;
///
/// let rows = parse_board(&"123.456.789;".repeat(9));
/// assert_eq!(rows.len(), 9);
/// assert_eq!(rows[0], [1, 2, 3, 4, 5, 6, 7, 8, 9]);
///
/// // Garbage is filtered, short rows survive.
/// assert_eq!(parse_board("1x2;;34"), [vec![1, 2], vec![3, 4]]);
/// ```
#[must_use]
pub fn parse_board(text: &str) -> Vec<Vec<u8>> {
    text.split(';')
        .map(|segment| {
            segment
                .bytes()
                .filter(u8::is_ascii_digit)
                .map(|b| b - b'0')
                .collect::<Vec<_>>()
        })
        .filter(|row| !row.is_empty())
        .collect()
}

/// Errors raised when cells do not form a 9×9 board of digits 0-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The board does not have exactly nine rows.
    #[display("expected 9 rows, got {count}")]
    RowCount {
        /// Number of rows found.
        count: usize,
    },
    /// A row does not have exactly nine cells.
    #[display("row {y} has {len} cells, expected 9")]
    RowLength {
        /// Index of the offending row.
        y: usize,
        /// Number of cells found in that row.
        len: usize,
    },
    /// A cell value is outside 0-9.
    #[display("cell ({x}, {y}) holds {value}, expected 0-9")]
    CellOutOfRange {
        /// Column of the cell.
        x: usize,
        /// Row of the cell.
        y: usize,
        /// The rejected value.
        value: u8,
    },
}

/// Errors raised when strict board text cannot be turned into a [`Grid`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ParseGridError {
    /// The text is not nine `ddd.ddd.ddd;` groups.
    #[display("board text is not nine `ddd.ddd.ddd;` groups")]
    Malformed,
    /// The digits do not form a grid.
    #[display("invalid grid: {_0}")]
    Grid(#[from] GridError),
}

/// A 9×9 sudoku board with cells in 0-9, `0` meaning empty.
///
/// Cells are addressed as `(x, y)`: column first, then row, both 0-8.
///
/// The [`Display`] implementation writes the canonical text encoding, and
/// [`FromStr`] reads it back, rejecting anything [`is_well_formed`] rejects.
///
/// # Examples
///
/// ```
/// use hisudoku_core::Grid;
///
/// let mut grid = Grid::EMPTY;
/// grid.set(4, 0, 7).unwrap();
/// assert_eq!(grid.cell(4, 0), 7);
/// assert_eq!(grid.filled_count(), 1);
///
/// let text = grid.to_string();
/// assert!(text.starts_with("000.700.000;"));
/// assert_eq!(text.parse::<Grid>(), Ok(grid));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    rows: [[u8; 9]; 9],
}

impl Grid {
    /// A grid with every cell empty.
    pub const EMPTY: Self = Self { rows: [[0; 9]; 9] };

    /// Creates a grid from a row-major array of cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellOutOfRange`] if any cell is greater than 9.
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Result<Self, GridError> {
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value > 9 {
                    return Err(GridError::CellOutOfRange { x, y, value });
                }
            }
        }
        Ok(Self { rows })
    }

    /// Creates a grid from rows of any shape, such as the output of [`parse_board`].
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RowCount`] unless there are exactly nine rows,
    /// [`GridError::RowLength`] unless each row has nine cells, and
    /// [`GridError::CellOutOfRange`] if a cell is greater than 9.
    pub fn from_ragged<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[u8]>,
    {
        if rows.len() != 9 {
            return Err(GridError::RowCount { count: rows.len() });
        }
        let mut cells = [[0; 9]; 9];
        for (y, (row, target)) in rows.iter().zip(&mut cells).enumerate() {
            let row = row.as_ref();
            *target = row
                .try_into()
                .map_err(|_| GridError::RowLength { y, len: row.len() })?;
        }
        Self::from_rows(cells)
    }

    /// Returns the cells as a row-major array.
    #[must_use]
    pub const fn rows(&self) -> &[[u8; 9]; 9] {
        &self.rows
    }

    /// Returns the value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub fn cell(&self, x: u8, y: u8) -> u8 {
        self.rows[usize::from(y)][usize::from(x)]
    }

    /// Sets the value at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellOutOfRange`] if `value` is greater than 9.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    pub fn set(&mut self, x: u8, y: u8, value: u8) -> Result<(), GridError> {
        if value > 9 {
            return Err(GridError::CellOutOfRange {
                x: usize::from(x),
                y: usize::from(y),
                value,
            });
        }
        self.rows[usize::from(y)][usize::from(x)] = value;
        Ok(())
    }

    /// Returns row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in the range 0-8.
    #[must_use]
    pub fn row(&self, y: u8) -> Fragment {
        self.rows[usize::from(y)]
    }

    /// Returns column `x`, read top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in the range 0-8.
    #[must_use]
    pub fn column(&self, x: u8) -> Fragment {
        House::Column { x }.cells(self)
    }

    /// Returns box `index`, read in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub fn box_cells(&self, index: u8) -> Fragment {
        House::Box { index }.cells(self)
    }

    /// Returns every house together with its cells, in [`House::ALL`] order.
    pub fn fragments(&self) -> impl Iterator<Item = (House, Fragment)> + '_ {
        House::ALL.into_iter().map(|house| (house, house.cells(self)))
    }

    /// Returns the number of non-empty cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&value| value != 0).count()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_ragged(&rows)
    }
}

impl TryFrom<[[u8; 9]; 9]> for Grid {
    type Error = GridError;

    fn try_from(rows: [[u8; 9]; 9]) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_well_formed(s) {
            return Err(ParseGridError::Malformed);
        }
        Ok(Self::from_ragged(&parse_board(s))?)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for (chunk_index, chunk) in row.chunks(3).enumerate() {
                if chunk_index > 0 {
                    f.write_str(".")?;
                }
                for value in chunk {
                    write!(f, "{value}")?;
                }
            }
            f.write_str(";")?;
        }
        Ok(())
    }
}
