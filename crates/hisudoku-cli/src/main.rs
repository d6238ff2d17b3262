//! Command-line front end for the hisudoku board validator.

use std::process::ExitCode;

use clap::Parser as _;
use hisudoku_core::Grid;

use self::{
    args::{Args, CheckArgs, Command, FragmentArgs, ShowArgs},
    input::{CliError, collect_boards},
    report::{BoardReport, FragmentReport, grid_summary, render_grid},
};

mod args;
mod input;
mod report;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let result = match args.command {
        Command::Check(args) => check(args),
        Command::Show(args) => Ok(show(&args)),
        Command::Fragment(args) => Ok(fragment(&args)),
    };
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn check(args: CheckArgs) -> Result<bool, CliError> {
    let boards = collect_boards(args.boards, args.file.as_deref())?;
    log::info!("checking {} board(s)", boards.len());

    let mut all_pass = true;
    for board in &boards {
        let report = BoardReport::new(board);
        println!("{board}");
        println!("{report}");
        all_pass &= report.passes(args.strict);
    }
    Ok(all_pass)
}

/// A board that does not parse is reported like a failed check, not an I/O error.
fn show(args: &ShowArgs) -> bool {
    let grid = match args.board.parse::<Grid>() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("error: {err}");
            return false;
        }
    };
    print!("{}", render_grid(&grid));
    println!("{}", grid_summary(&grid));
    true
}

fn fragment(args: &FragmentArgs) -> bool {
    let report = FragmentReport::new(&args.cells, &args.empty);
    println!("{report}");
    report.valid
}
