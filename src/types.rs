/// Shared serializable output types.
///
/// These types are what gets written to stdout — either as JSON or rendered
/// as a table. They are decoupled from the intermediate accumulator state.
use serde::{Deserialize, Serialize};

/// One line of the final report: an aggregate annotated with its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    /// 1-based display position after sorting (dense, no gaps).
    pub rank: usize,
    /// The group key (e.g., brand name).
    pub key: String,
    /// Arithmetic mean of the group's values, rounded to 2 fractional digits.
    pub mean: f64,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `ReportError`.
    #[must_use]
    pub fn from_report_error(err: &crate::report::ReportError) -> Self {
        use crate::report::ReportError;
        let code = match err {
            ReportError::RowTooShort { .. } => "row_too_short",
            ReportError::InvalidRating { .. } => "invalid_rating",
            ReportError::MissingHeader => "missing_header",
            ReportError::Csv(_) => "csv_error",
            ReportError::Io { .. } => "io_error",
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
            },
        }
    }
}
