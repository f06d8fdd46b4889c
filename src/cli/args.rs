/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::Parser;

use crate::report::DEFAULT_REPORT_NAME;

/// ratings-report — aggregate product ratings from CSV files into a ranked report.
#[derive(Debug, Parser)]
#[command(
    name = "ratings-report",
    about = "Aggregate product ratings from CSV files into a ranked average-by-brand report",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Input CSV files to process. A missing file contributes zero rows.
    #[arg(long, value_name = "PATH", num_args = 1.., required = true)]
    pub files: Vec<PathBuf>,

    /// Output report file path (overwritten on every run).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_REPORT_NAME)]
    pub report: PathBuf,

    /// Echo the ranked rows to stdout as JSON instead of a table.
    /// The report file always receives the table.
    #[arg(long)]
    pub json: bool,

    /// Print stage timing to stderr for debugging.
    #[arg(long)]
    pub debug: bool,
}
