//! HashDupe - keep one file per duplicate hash
//!
//! Reads a headerless `filename,hash` CSV list, groups file names sharing a
//! hash, keeps the shortest name of each group and reports the rest as
//! removal candidates. Nothing on disk other than the report is touched.

pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::config::{Config, RunSettings};
use crate::duplicates::{group_by_hash, select_all, GroupingStats};
use crate::error::ExitCode;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Where the report was written
    pub output: PathBuf,
    /// Rows dropped for having fewer than two columns
    pub skipped_rows: usize,
    /// Grouping statistics
    pub stats: GroupingStats,
}

/// Read, group, select and write the report for already resolved settings.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or parsed, or the report
/// cannot be created or written.
pub fn run(settings: &RunSettings) -> Result<RunSummary> {
    let set = input::read_records(&settings.input)?;
    let skipped_rows = set.skipped_rows;

    let (groups, stats) = group_by_hash(set.records);
    let selections = select_all(&groups, settings.tie_break);

    output::write_report(&settings.output, &selections, settings.format)?;

    Ok(RunSummary {
        output: settings.output.clone(),
        skipped_rows,
        stats,
    })
}

/// Run the application for parsed command-line arguments.
///
/// # Errors
///
/// Returns configuration, input or report errors; the caller decides how
/// to report them and which exit code to use (see [`ExitCode::for_error`]).
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_args(&cli.run);
    let settings = config.resolve()?;
    log::debug!("Resolved settings: {:?}", settings);

    let summary = run(&settings).with_context(|| {
        format!(
            "Failed to build duplicate report from {}",
            settings.input.display()
        )
    })?;

    println!("Saved duplicate file list to {}", summary.output.display());
    Ok(ExitCode::Success)
}
