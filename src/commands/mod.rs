/// The single report command.
pub mod report;

pub use report::run;
