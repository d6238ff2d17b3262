use std::{
    fs,
    io::{self, BufRead as _},
    path::{Path, PathBuf},
};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub(crate) enum CliError {
    #[display("failed to read {}: {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },
    #[display("failed to read standard input: {_0}")]
    ReadStdin(io::Error),
}

/// Collects the boards to check: explicit arguments, else file lines, else stdin lines.
///
/// Blank lines and surrounding whitespace are ignored.
pub(crate) fn collect_boards(
    boards: Vec<String>,
    file: Option<&Path>,
) -> Result<Vec<String>, CliError> {
    if !boards.is_empty() {
        return Ok(boards);
    }
    if let Some(path) = file {
        log::debug!("reading boards from {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.to_owned(),
            source,
        })?;
        return Ok(board_lines(text.lines()));
    }
    log::debug!("reading boards from standard input");
    let lines = io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(CliError::ReadStdin)?;
    Ok(board_lines(lines.iter().map(String::as_str)))
}

fn board_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
