//! Line and field helpers shared by the unit and record parsers

use std::io::BufRead;

use crate::error::Result;

/// Iterate the lines of `reader` with 1-based line numbers
pub fn numbered_lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<(usize, String)>> {
    reader
        .lines()
        .enumerate()
        .map(|(idx, line)| line.map(|l| (idx + 1, l)).map_err(Into::into))
}

/// Split a line into comma-separated fields after trimming surrounding whitespace
///
/// Fields themselves are not trimmed; an empty line yields a single empty field.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.trim().split(',').collect()
}

/// Parse a numeric token, tolerating surrounding whitespace
pub fn parse_number(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok()
}

/// True for lines containing nothing but whitespace
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_split_fields_keeps_empty_fields() {
        assert_eq!(split_fields("Bob,25,"), vec!["Bob", "25", ""]);
        assert_eq!(split_fields("Carol,,"), vec!["Carol", "", ""]);
    }

    #[test]
    fn test_split_fields_trims_line_only() {
        assert_eq!(split_fields("  Alice, 40 ,80\r"), vec!["Alice", " 40 ", "80"]);
    }

    #[test]
    fn test_split_empty_line() {
        assert_eq!(split_fields(""), vec![""]);
        assert_eq!(split_fields("   "), vec![""]);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("40"), Some(40.0));
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("1e2"), Some(100.0));
        assert_eq!(parse_number("inf"), Some(f64::INFINITY));
        assert_eq!(parse_number("forty"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_numbered_lines() {
        let lines: Vec<(usize, String)> = numbered_lines(Cursor::new("a\nb\n"))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines, vec![(1, "a".to_string()), (2, "b".to_string())]);
    }
}
