use std::fmt::{self, Display};

use hisudoku_core::{
    Conflict, Grid, GridError, find_conflict, is_fragment_complete, is_fragment_valid,
    is_grid_solved, is_sudoku_string_valid_board, is_well_formed, parse_board,
};

/// Result of checking one board string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BoardReport {
    pub(crate) well_formed: bool,
    pub(crate) valid: bool,
    pub(crate) problem: Option<Problem>,
}

/// Why a board is not valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Problem {
    Shape(GridError),
    Conflict(Conflict),
}

impl BoardReport {
    pub(crate) fn new(text: &str) -> Self {
        let valid = is_sudoku_string_valid_board(text);
        let problem = match Grid::try_from(parse_board(text)) {
            Err(err) => Some(Problem::Shape(err)),
            Ok(grid) => find_conflict(&grid).map(Problem::Conflict),
        };
        Self {
            well_formed: is_well_formed(text),
            valid,
            problem,
        }
    }

    pub(crate) fn passes(&self, strict: bool) -> bool {
        self.valid && (self.well_formed || !strict)
    }
}

impl Display for BoardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  well-formed: {}", yes_no(self.well_formed))?;
        write!(f, "  valid: {}", yes_no(self.valid))?;
        match self.problem {
            None => Ok(()),
            Some(Problem::Shape(err)) => write!(f, " ({err})"),
            Some(Problem::Conflict(conflict)) => write!(
                f,
                " ({} repeats {} at ({}, {}))",
                conflict.house, conflict.digit, conflict.x, conflict.y
            ),
        }
    }
}

/// Renders a grid as a table with box separators, `.` for empty cells.
pub(crate) fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    for (y, row) in grid.rows().iter().enumerate() {
        if y > 0 && y % 3 == 0 {
            out.push_str("------+-------+------\n");
        }
        for (x, value) in row.iter().enumerate() {
            if x > 0 {
                out.push_str(if x % 3 == 0 { " | " } else { " " });
            }
            out.push(if *value == 0 { '.' } else { char::from(b'0' + value) });
        }
        out.push('\n');
    }
    out
}

/// Summary printed under a rendered grid.
pub(crate) fn grid_summary(grid: &Grid) -> String {
    let valid = find_conflict(grid).is_none();
    format!(
        "filled: {}/81\nvalid: {}\nsolved: {}",
        grid.filled_count(),
        yes_no(valid),
        yes_no(is_grid_solved(grid))
    )
}

/// Result of checking a fragment given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FragmentReport {
    pub(crate) valid: bool,
    /// Only known when the fragment is exactly nine numeric cells.
    pub(crate) complete: Option<bool>,
}

impl FragmentReport {
    pub(crate) fn new(cells: &[String], empty_marker: &str) -> Self {
        Self {
            valid: is_fragment_valid(cells, empty_marker),
            complete: numeric_fragment(cells).map(|fragment| is_fragment_complete(&fragment)),
        }
    }
}

impl Display for FragmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "valid: {}", yes_no(self.valid))?;
        if let Some(complete) = self.complete {
            write!(f, "\ncomplete: {}", yes_no(complete))?;
        }
        Ok(())
    }
}

fn numeric_fragment(cells: &[String]) -> Option<[u8; 9]> {
    let mut fragment = [0; 9];
    if cells.len() != fragment.len() {
        return None;
    }
    for (cell, target) in cells.iter().zip(&mut fragment) {
        *target = cell.parse().ok().filter(|value| *value <= 9)?;
    }
    Some(fragment)
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
