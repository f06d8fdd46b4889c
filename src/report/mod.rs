/// Report domain layer: extraction, aggregation, rendering.
pub mod aggregate;
pub mod errors;
pub mod extract;
pub mod render;

pub use aggregate::aggregate;
pub use errors::ReportError;
pub use extract::extract;
pub use render::render;

/// Zero-based index of the group-key column for the average-rating report.
pub const KEY_INDEX: usize = 1;
/// Zero-based index of the value column for the average-rating report.
pub const VALUE_INDEX: usize = 3;

/// Default report file name when `--report` is not given.
pub const DEFAULT_REPORT_NAME: &str = "average-rating.txt";
