//! Command-line interface definitions for HashDupe.
//!
//! This module defines all CLI arguments and options using the clap derive API.
//! Global options control logging and error reporting; the remaining options
//! select the input list, the report path and the report layout.
//!
//! # Example
//!
//! ```bash
//! # Write removal candidates to duplicates.txt next to hashes.csv
//! hashdupe --csv ~/scan/hashes.csv
//!
//! # Keep/remove detail per group, written to a custom file
//! hashdupe --csv ~/scan/hashes.csv --out review.txt --debug
//!
//! # Deterministic choice among equal-length names
//! hashdupe --csv hashes.csv --tie-break lexicographic
//! ```

use clap::{Args, Parser};
use std::path::PathBuf;

use crate::duplicates::TieBreak;
use crate::output::ReportFormat;

/// Choose one file to keep per group of identical hashes.
///
/// HashDupe reads a headerless `filename,hash` CSV list, groups names that
/// share a hash, keeps the shortest name in each group and writes the rest
/// to a report as removal candidates. No files are touched.
#[derive(Debug, Parser)]
#[command(name = "hashdupe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report errors as JSON on stderr
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Path to a TOML config file
    ///
    /// If not specified, `config.toml` in the platform config directory is
    /// used when it exists.
    #[arg(long, value_name = "PATH", env = "HASHDUPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Input and report options
    #[command(flatten)]
    pub run: RunArgs,
}

/// Options describing one run.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Headerless CSV list of `filename,hash` rows
    #[arg(short = 'i', long = "csv", visible_alias = "input", value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Report file (default: duplicates.txt)
    ///
    /// Relative paths are resolved against the input file's directory.
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Write the verbose report: kept file and removal candidates per group
    #[arg(short, long, visible_alias = "verbose-report")]
    pub debug: bool,

    /// Report layout (overridden by --debug)
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<ReportFormat>,

    /// How to order file names of equal length
    #[arg(long, value_enum, value_name = "RULE")]
    pub tie_break: Option<TieBreak>,
}
