use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hisudoku_core::DEFAULT_EMPTY_MARKER;

/// Validate sudoku boards written as nine `ddd.ddd.ddd;` groups.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Check boards for format and placement-rule violations.
    Check(CheckArgs),
    /// Print a board as a 9×9 table.
    Show(ShowArgs),
    /// Check a single row, column, or box for repeated digits.
    Fragment(FragmentArgs),
}

#[derive(Debug, clap::Args)]
pub(crate) struct CheckArgs {
    /// Boards to check. Reads `--file`, or standard input, when omitted.
    #[arg(value_name = "BOARD")]
    pub(crate) boards: Vec<String>,

    /// Read boards from a file, one per line.
    #[arg(short, long, value_name = "PATH", conflicts_with = "boards")]
    pub(crate) file: Option<PathBuf>,

    /// Only pass boards that are both well-formed and valid.
    #[arg(long)]
    pub(crate) strict: bool,
}

#[derive(Debug, clap::Args)]
pub(crate) struct ShowArgs {
    /// Board in the canonical encoding.
    #[arg(value_name = "BOARD")]
    pub(crate) board: String,
}

#[derive(Debug, clap::Args)]
pub(crate) struct FragmentArgs {
    /// Cells of the fragment, one argument each.
    #[arg(value_name = "CELL", required = true, num_args = 1..)]
    pub(crate) cells: Vec<String>,

    /// Marker for empty cells.
    #[arg(long, value_name = "MARKER", default_value = DEFAULT_EMPTY_MARKER)]
    pub(crate) empty: String,
}
