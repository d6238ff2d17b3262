use std::fmt::{self, Display};

use crate::{Fragment, Grid};

/// A sudoku house (row, column, or 3×3 box).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all houses in row, column, box order.
    #[expect(clippy::cast_possible_truncation)]
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the index of the box containing the cell at `(x, y)`.
    ///
    /// Boxes are numbered left to right, top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// use hisudoku_core::House;
    ///
    /// assert_eq!(House::box_index(0, 0), 0);
    /// assert_eq!(House::box_index(4, 1), 1);
    /// assert_eq!(House::box_index(8, 8), 8);
    /// ```
    #[must_use]
    #[inline]
    pub const fn box_index(x: u8, y: u8) -> u8 {
        (y / 3) * 3 + x / 3
    }

    /// Converts a cell index within the house (0-8) into absolute `(x, y)` coordinates.
    ///
    /// Box cells are numbered in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub fn position_from_cell_index(self, i: u8) -> (u8, u8) {
        assert!(i < 9);
        match self {
            House::Row { y } => (i, y),
            House::Column { x } => (x, i),
            House::Box { index } => ((index % 3) * 3 + i % 3, (index / 3) * 3 + i / 3),
        }
    }

    /// Reads the nine cells of this house out of `grid`.
    ///
    /// # Panics
    ///
    /// Panics if the house index is not in the range 0-8.
    #[must_use]
    pub fn cells(self, grid: &Grid) -> Fragment {
        let mut fragment = [0; 9];
        for (i, cell) in (0..9).zip(&mut fragment) {
            let (x, y) = self.position_from_cell_index(i);
            *cell = grid.cell(x, y);
        }
        fragment
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            House::Row { y } => write!(f, "row {y}"),
            House::Column { x } => write!(f, "column {x}"),
            House::Box { index } => write!(f, "box {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order() {
        assert_eq!(House::ALL[0], House::Row { y: 0 });
        assert_eq!(House::ALL[9], House::Column { x: 0 });
        assert_eq!(House::ALL[26], House::Box { index: 8 });
    }

    #[test]
    fn test_box_index() {
        for y in 0..9 {
            for x in 0..9 {
                let index = House::box_index(x, y);
                let house = House::Box { index };
                let inside = (0..9).any(|i| house.position_from_cell_index(i) == (x, y));
                assert!(inside, "({x}, {y}) not in box {index}");
            }
        }
    }

    #[test]
    fn test_box_positions_row_major() {
        let house = House::Box { index: 5 };
        let positions = (0..9)
            .map(|i| house.position_from_cell_index(i))
            .collect::<Vec<_>>();
        assert_eq!(
            positions,
            [
                (6, 3),
                (7, 3),
                (8, 3),
                (6, 4),
                (7, 4),
                (8, 4),
                (6, 5),
                (7, 5),
                (8, 5)
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(House::Row { y: 3 }.to_string(), "row 3");
        assert_eq!(House::Column { x: 0 }.to_string(), "column 0");
        assert_eq!(House::Box { index: 8 }.to_string(), "box 8");
    }
}
