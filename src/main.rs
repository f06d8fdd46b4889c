#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! ratings-report — aggregate product ratings from CSV files into a ranked report.

mod cli;
mod commands;
mod report;
mod source;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    let ctx = OutputCtx::new(cli.json, cli.debug);

    match commands::run(&cli, &ctx) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_report_error(&err);
            write_error(&error_output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}
