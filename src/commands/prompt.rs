//! Interactive input: prompting for paths and opening the files they name

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use markrank_core::bail_usage;
use markrank_core::error::Result;

pub const UNITS_PROMPT: &str = "Please enter the name of the units file : ";
pub const RECORDS_PROMPT: &str = "Please enter the name of the student records file : ";

/// Print `question` (unless quiet) and read one line of answer from `input`
///
/// Only the line terminator is stripped from the answer. End of input is a
/// usage error.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
    quiet: bool,
) -> Result<String> {
    if !quiet {
        write!(out, "{}", question)?;
        out.flush()?;
    }

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        bail_usage!(format!("no answer given to prompt: {}", question.trim_end()));
    }

    Ok(answer.trim_end_matches(['\n', '\r']).to_string())
}

/// Use `preset` when given, otherwise prompt for a path
pub fn path_or_ask<R: BufRead, W: Write>(
    preset: Option<&Path>,
    input: &mut R,
    out: &mut W,
    question: &str,
    quiet: bool,
) -> Result<PathBuf> {
    match preset {
        Some(path) => Ok(path.to_path_buf()),
        None => ask(input, out, question, quiet).map(PathBuf::from),
    }
}

/// Open `path` for buffered reading
pub fn open_input(path: &Path) -> io::Result<BufReader<File>> {
    File::open(path).map(BufReader::new)
}
