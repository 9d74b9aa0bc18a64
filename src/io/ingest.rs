//! Sample ingest from line-oriented text files.
//!
//! Format:
//! - one record per line
//! - whitespace-separated fields
//! - the field at the configured 0-based column must parse as a finite float
//!
//! There is no header handling and no comment skipping. Any malformed line
//! aborts the load with an error that names the file, line and column.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::domain::SampleSet;
use crate::error::AppError;

/// Open `path` and load the configured column as a sorted sample set.
pub fn load_samples(path: &Path, column: usize) -> Result<SampleSet, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open data file '{}': {e}", path.display())))?;

    let values = parse_samples(BufReader::new(file), path, column)?;
    if values.is_empty() {
        return Err(AppError::stats(format!(
            "Data file '{}' contains no samples.",
            path.display()
        )));
    }

    tracing::debug!(path = %path.display(), column, n = values.len(), "loaded samples");
    Ok(SampleSet::from_unsorted(values))
}

/// Parse the configured column from every line of `reader`, in file order.
///
/// `path` is only used in error messages.
pub fn parse_samples<R: BufRead>(reader: R, path: &Path, column: usize) -> Result<Vec<f64>, AppError> {
    let mut values = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| {
            AppError::input(format!("Failed to read '{}' line {line_no}: {e}", path.display()))
        })?;
        values.push(parse_field(&line, column).map_err(|msg| {
            AppError::input(format!("{}:{line_no}: {msg}", path.display()))
        })?);
    }

    Ok(values)
}

fn parse_field(line: &str, column: usize) -> Result<f64, String> {
    let field = line.split_whitespace().nth(column).ok_or_else(|| {
        let found = line.split_whitespace().count();
        format!("missing column {column} (line has {found} field(s))")
    })?;

    let value: f64 = field
        .parse()
        .map_err(|e| format!("column {column}: cannot parse '{field}' as a number: {e}"))?;
    if !value.is_finite() {
        return Err(format!("column {column}: non-finite value '{field}'"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn parse(text: &str, column: usize) -> Result<Vec<f64>, AppError> {
        parse_samples(Cursor::new(text), Path::new("mem.txt"), column)
    }

    #[test]
    fn selects_configured_column() {
        let v = parse("1 10\n2 20\n3 30\n", 1).unwrap();
        assert_eq!(v, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn default_column_and_mixed_whitespace() {
        let v = parse("  4.5\tx\n-2e1   y\n", 0).unwrap();
        assert_eq!(v, vec![4.5, -20.0]);
    }

    #[test]
    fn missing_column_names_line() {
        let err = parse("1 10\n2\n", 1).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
        assert!(err.message().starts_with("mem.txt:2:"), "{err}");
        assert!(err.message().contains("missing column 1"), "{err}");
    }

    #[test]
    fn non_numeric_field_fails() {
        let err = parse("1\nabc\n", 0).unwrap_err();
        assert!(err.message().contains("'abc'"), "{err}");
    }

    #[test]
    fn blank_line_fails() {
        assert!(parse("1\n\n2\n", 0).is_err());
    }

    #[test]
    fn nan_is_rejected() {
        assert!(parse("NaN\n", 0).is_err());
    }

    #[test]
    fn load_sorts_samples() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "3\n1\n2\n").unwrap();

        let s = load_samples(file.path(), 0).unwrap();
        assert_eq!(s.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn load_empty_file_is_a_stats_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = load_samples(file.path(), 0).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_STATS);
    }

    #[test]
    fn load_missing_file_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_samples(&dir.path().join("nope.txt"), 0).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
    }
}
