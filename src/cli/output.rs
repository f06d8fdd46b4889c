/// Output emission: report file writing, console echo, error formatting.
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::report::ReportError;
use crate::types::{ErrorOutput, RankedRow};

/// Diagnostic printed when the inputs contain no data rows.
pub const NO_DATA_MESSAGE: &str = "No data to build the report";

/// Output context passed to all emitters.
pub struct OutputCtx {
    /// When true, echo JSON to stdout instead of the rendered table.
    pub json: bool,
    /// When true, print stage timing spans to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(json: bool, debug: bool) -> Self {
        Self { json, debug }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

/// Write the rendered table to the report file, truncating any existing content.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be created or written.
pub fn write_report_file(path: &Path, table: &str) -> Result<(), ReportError> {
    std::fs::write(path, table).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Echo the report to stdout.
///
/// Table mode prints the rendered table followed by one extra blank line;
/// JSON mode prints the ranked rows as a pretty-printed array instead.
pub fn write_report(table: &str, ranked: &[RankedRow], ctx: &OutputCtx) {
    if ctx.json {
        print_json(ranked);
    } else {
        println!("{table}");
        println!();
    }
}

/// Report the empty-input no-op path to stdout.
pub fn write_no_data(ctx: &OutputCtx) {
    if ctx.json {
        let envelope = serde_json::json!({ "ok": true, "message": NO_DATA_MESSAGE });
        println!("{envelope}");
    } else {
        println!("{NO_DATA_MESSAGE}");
    }
}

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, json: bool) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    if json {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "Error: {}", err.error.message);
    }
}

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
