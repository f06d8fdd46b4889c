/// Build and emit the average-rating report.
use crate::cli::OutputCtx;
use crate::cli::args::Cli;
use crate::cli::output::{write_no_data, write_report, write_report_file};
use crate::report::{KEY_INDEX, ReportError, VALUE_INDEX, aggregate, extract, render};
use crate::source::load_rows;

/// Run the report pipeline: load rows, extract, aggregate, render, emit.
///
/// The empty-input case is a designed no-op: a diagnostic line goes to
/// stdout, no file is written, and the exit is successful.
///
/// # Errors
///
/// Returns `ReportError` on a short row, an unparsable rating cell, a CSV
/// read failure, a missing header row, or a report write failure.
pub fn run(cli: &Cli, ctx: &OutputCtx) -> Result<(), ReportError> {
    let _t_load = ctx.timer("load_rows");
    let rows = load_rows(&cli.files)?;
    drop(_t_load);

    let _t_extract = ctx.timer("extract");
    let extraction = extract(&rows, KEY_INDEX, VALUE_INDEX)?;
    drop(_t_extract);

    if extraction.pairs.is_empty() {
        write_no_data(ctx);
        return Ok(());
    }
    let header = extraction.header.ok_or(ReportError::MissingHeader)?;

    let _t_aggregate = ctx.timer("aggregate");
    let ranked = aggregate(&extraction.pairs);
    drop(_t_aggregate);

    let _t_render = ctx.timer("render");
    let table = render(&ranked, &header);
    drop(_t_render);

    write_report_file(&cli.report, &table)?;
    write_report(&table, &ranked, ctx);
    Ok(())
}
