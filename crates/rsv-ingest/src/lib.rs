//! Line ingestion for level reports (rsv-ingest boundary).
//!
//! Converts text (a file, any reader, or an in-memory string) into
//! [`rsv_validator::Report`] values. This is the **read** side only: it does
//! not validate safety or print anything. Callers hand the resulting
//! `Vec<Report>` to `rsv_validator::count_safe` (or equivalent).
//!
//! ## Line contract
//!
//! | Input                | Result                                     |
//! |----------------------|--------------------------------------------|
//! | `7 6 4 2 1`          | one report, five levels                    |
//! | `  -3\t4   5 `       | one report; any whitespace separates       |
//! | blank line           | [`ReportIngestError::EmptyLine`]           |
//! | `1 2 x`              | [`ReportIngestError::InvalidToken`] col 3  |
//!
//! Malformed lines fail the whole parse at the first offending line. Nothing
//! is skipped or coerced into a default report.

use std::fmt;
use std::io::Read;
use std::path::Path;

use rsv_validator::Report;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced while turning lines into reports.
#[derive(Debug, PartialEq, Eq)]
pub enum ReportIngestError {
    /// An I/O or UTF-8 decoding error.
    Io(String),
    /// The line holds no tokens at all.
    EmptyLine { line: usize },
    /// A token is not a signed 64-bit integer.
    InvalidToken {
        line: usize,
        /// 1-based token position within the line.
        column: usize,
        token: String,
    },
}

impl fmt::Display for ReportIngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportIngestError::Io(msg) => write!(f, "report io error: {msg}"),
            ReportIngestError::EmptyLine { line } => {
                write!(f, "line {line}: empty report")
            }
            ReportIngestError::InvalidToken {
                line,
                column,
                token,
            } => write!(
                f,
                "line {line}: token {column} '{token}' is not an integer level"
            ),
        }
    }
}

impl std::error::Error for ReportIngestError {}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse a single line into a [`Report`]. `line_no` is 1-based and only used
/// for error reporting.
pub fn parse_report_line(line_no: usize, line: &str) -> Result<Report, ReportIngestError> {
    let mut levels = Vec::new();

    for (i, token) in line.split_whitespace().enumerate() {
        let level = token
            .parse::<i64>()
            .map_err(|_| ReportIngestError::InvalidToken {
                line: line_no,
                column: i + 1,
                token: token.to_string(),
            })?;
        levels.push(level);
    }

    if levels.is_empty() {
        return Err(ReportIngestError::EmptyLine { line: line_no });
    }

    Ok(Report::new(levels))
}

/// Parse every line of `src` into a report, in order.
///
/// A leading UTF-8 BOM is ignored; `\r\n` endings and a trailing newline are
/// accepted.
pub fn parse_reports_str(src: &str) -> Result<Vec<Report>, ReportIngestError> {
    let src = src.strip_prefix('\u{feff}').unwrap_or(src);

    src.lines()
        .enumerate()
        .map(|(i, line)| parse_report_line(i + 1, line))
        .collect()
}

/// Read `reader` to the end and parse it. See [`parse_reports_str`].
pub fn parse_reports_reader<R: Read>(mut reader: R) -> Result<Vec<Report>, ReportIngestError> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|e| ReportIngestError::Io(format!("read: {e}")))?;

    parse_reports_str(&buf)
}

/// Parse the file at `path`. See [`parse_reports_str`].
pub fn parse_reports_file(path: &Path) -> Result<Vec<Report>, ReportIngestError> {
    let buf = std::fs::read_to_string(path)
        .map_err(|e| ReportIngestError::Io(format!("read '{}': {e}", path.display())))?;

    parse_reports_str(&buf)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
