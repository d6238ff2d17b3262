//! Boards shared by unit tests.

use proptest::prelude::*;

use crate::Grid;

/// A solved board.
pub(crate) const SOLUTION: [[u8; 9]; 9] = [
    [5, 3, 4, 6, 7, 8, 9, 1, 2],
    [6, 7, 2, 1, 9, 5, 3, 4, 8],
    [1, 9, 8, 3, 4, 2, 5, 6, 7],
    [8, 5, 9, 7, 6, 1, 4, 2, 3],
    [4, 2, 6, 8, 5, 3, 7, 9, 1],
    [7, 1, 3, 9, 2, 4, 8, 5, 6],
    [9, 6, 1, 5, 3, 7, 2, 8, 4],
    [2, 8, 7, 4, 1, 9, 6, 3, 5],
    [3, 4, 5, 2, 8, 6, 1, 7, 9],
];

/// The puzzle [`SOLUTION`] solves, in canonical text form.
pub(crate) const PUZZLE_TEXT: &str = "530.070.000;600.195.000;098.000.060;\
                                      800.060.003;400.803.001;700.020.006;\
                                      060.000.280;000.419.005;000.080.079;";

/// Valid grids: [`SOLUTION`] with its digits permuted and random cells blanked.
pub(crate) fn valid_grid() -> impl Strategy<Value = Grid> {
    (
        Just((1..=9).collect::<Vec<u8>>()).prop_shuffle(),
        prop::collection::vec(any::<bool>(), 81),
    )
        .prop_map(|(digits, blanks)| {
            let mut rows = SOLUTION;
            for (y, row) in rows.iter_mut().enumerate() {
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell = if blanks[y * 9 + x] {
                        0
                    } else {
                        digits[usize::from(*cell) - 1]
                    };
                }
            }
            Grid::from_rows(rows).unwrap()
        })
}
