/// Errors from the report pipeline.
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while extracting, aggregating, or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A data row does not reach the configured key/value columns.
    #[error("row {line} has {width} column(s), need at least {needed}")]
    RowTooShort {
        /// 1-based position of the row in the concatenated input.
        line: usize,
        /// Number of cells the row actually has.
        width: usize,
        /// Minimum number of cells required by the column mapping.
        needed: usize,
    },

    /// A value cell could not be parsed as a decimal number.
    #[error("row {line}: cannot parse rating '{cell}': {source}")]
    InvalidRating {
        /// 1-based position of the row in the concatenated input.
        line: usize,
        /// The offending cell text.
        cell: String,
        /// The underlying parse failure.
        source: ParseFloatError,
    },

    /// Data rows were found but no header row named the report columns.
    #[error("no header row found (first cell 'NAME') to label the report columns")]
    MissingHeader,

    /// A CSV-level read failure (encoding, malformed quoting, I/O mid-read).
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    /// A file could not be opened or written.
    #[error("I/O error for '{}': {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}

/// Exit code mapping for `ReportError` variants.
impl ReportError {
    /// Return the CLI exit code for this error.
    ///
    /// All report failures are fatal one-shot errors; usage errors exit 2
    /// via clap before any of these can occur.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RowTooShort { .. }
            | Self::InvalidRating { .. }
            | Self::MissingHeader
            | Self::Csv(_)
            | Self::Io { .. } => 1,
        }
    }
}
