//! Report writer for keep/remove selections.
//!
//! # Formats
//!
//! Compact (default), one line per removal candidate:
//!
//! ```text
//! photo1.jpg
//! ```
//!
//! Verbose, one block per duplicate group:
//!
//! ```text
//! Keep: photo.jpg
//! Removal candidates:
//!   photo1.jpg
//! ---
//! ```
//!
//! CSV, with a header row and one row per removal candidate:
//!
//! ```text
//! group_id,keep,removal
//! 1,photo.jpg,photo1.jpg
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::duplicates::Selection;

/// Label in front of the kept file in verbose output.
pub const KEEP_LABEL: &str = "Keep:";
/// Header line above removal candidates in verbose output.
pub const REMOVALS_HEADER: &str = "Removal candidates:";
/// Indent for each removal candidate in verbose output.
pub const REMOVAL_INDENT: &str = "  ";
/// Line written after each group in verbose output.
pub const GROUP_SEPARATOR: &str = "---";

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report file could not be created.
    #[error("Failed to create output file {path}: {source}")]
    Create {
        /// Path that was being created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// I/O error during writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during CSV serialization.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Report layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Removal candidates only, one per line
    #[default]
    Compact,
    /// Kept file, labelled removal candidates and a separator per group
    Verbose,
    /// `group_id,keep,removal` rows with a header
    Csv,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Compact => write!(f, "compact"),
            ReportFormat::Verbose => write!(f, "verbose"),
            ReportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// A single row in the CSV report.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    /// 1-based position of the duplicate group in the report
    group_id: usize,
    /// File kept for this group
    keep: &'a str,
    /// One removal candidate
    removal: &'a str,
}

/// Report formatter over a slice of selections.
pub struct ReportWriter<'a> {
    selections: &'a [Selection],
    format: ReportFormat,
}

impl<'a> ReportWriter<'a> {
    /// Create a new report formatter.
    #[must_use]
    pub fn new(selections: &'a [Selection], format: ReportFormat) -> Self {
        Self { selections, format }
    }

    /// Write the report to the given writer.
    ///
    /// The writer is buffered internally and flushed before returning.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` if writing or serialization fails.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        match self.format {
            ReportFormat::Compact => self.write_compact(BufWriter::new(writer)),
            ReportFormat::Verbose => self.write_verbose(BufWriter::new(writer)),
            ReportFormat::Csv => self.write_csv(writer),
        }
    }

    fn write_compact<W: Write>(&self, mut out: W) -> Result<(), ReportError> {
        for selection in self.selections {
            for removal in &selection.removals {
                writeln!(out, "{removal}")?;
            }
        }
        out.flush()?;
        Ok(())
    }

    fn write_verbose<W: Write>(&self, mut out: W) -> Result<(), ReportError> {
        for selection in self.selections {
            writeln!(out, "{KEEP_LABEL} {}", selection.keep)?;
            writeln!(out, "{REMOVALS_HEADER}")?;
            for removal in &selection.removals {
                writeln!(out, "{REMOVAL_INDENT}{removal}")?;
            }
            writeln!(out, "{GROUP_SEPARATOR}")?;
        }
        out.flush()?;
        Ok(())
    }

    fn write_csv<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for (idx, selection) in self.selections.iter().enumerate() {
            for removal in &selection.removals {
                csv_writer.serialize(CsvRow {
                    group_id: idx + 1,
                    keep: selection.keep.as_str(),
                    removal: removal.as_str(),
                })?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Generate the report as a string.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` if serialization fails.
    pub fn to_string(&self) -> Result<String, ReportError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}

/// Create `path` and write the report into it.
///
/// A file left behind by a failure part-way through writing is not removed.
///
/// # Errors
///
/// Returns [`ReportError::Create`] if the file cannot be created, or another
/// `ReportError` if writing fails.
pub fn write_report(
    path: &Path,
    selections: &[Selection],
    format: ReportFormat,
) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|source| ReportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "Writing {} report for {} group(s) to {}",
        format,
        selections.len(),
        path.display()
    );
    ReportWriter::new(selections, format).write_to(file)
}
