//! Reading `filename,hash` lists.
//!
//! The input is a headerless two-column CSV file: column 1 is a file name,
//! column 2 an opaque content hash. Hashes are only ever compared for
//! equality, so any algorithm (or any string at all) works.
//!
//! Rows with fewer than two columns are skipped rather than rejected.
//! Columns beyond the second are ignored.
//!
//! # Example
//!
//! ```
//! use hashdupe::input::read_records_from;
//!
//! let data = "photo1.jpg,H1\nphoto.jpg,H1\nlonely\n";
//! let set = read_records_from(data.as_bytes()).unwrap();
//!
//! assert_eq!(set.records.len(), 2);
//! assert_eq!(set.skipped_rows, 1);
//! ```

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while reading the input list.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file could not be opened.
    #[error("Failed to open input file {path}: {source}")]
    Open {
        /// Path that was being opened
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The tabular content could not be decoded.
    #[error("Failed to parse input{}: {source}", line_suffix(.line))]
    Parse {
        /// 1-based line number, when the decoder reports one
        line: Option<u64>,
        /// The underlying CSV error
        #[source]
        source: csv::Error,
    },

    /// A quoted field was never closed and swallowed the rest of the input.
    #[error("Failed to parse input at line {line}: unterminated quoted field")]
    UnterminatedQuote {
        /// 1-based line where the quoted field starts
        line: u64,
    },
}

impl InputError {
    /// Check if this error means the content itself could not be decoded.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::UnterminatedQuote { .. })
    }
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

impl From<csv::Error> for InputError {
    fn from(source: csv::Error) -> Self {
        let line = source.position().map(csv::Position::line);
        Self::Parse { line, source }
    }
}

/// One input row: a file name and the hash of its content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    /// File name as written in the input
    pub filename: String,
    /// Content hash, treated as an opaque equality key
    pub hash: String,
}

impl Record {
    /// Create a new record.
    #[must_use]
    pub fn new(filename: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            hash: hash.into(),
        }
    }
}

/// Records read from one input, plus the count of rows that were dropped.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    /// Well-formed records in input order
    pub records: Vec<Record>,
    /// Rows skipped for having fewer than two columns
    pub skipped_rows: usize,
}

/// Read records from a file on disk.
///
/// # Errors
///
/// Returns [`InputError::Open`] if the file cannot be opened and
/// [`InputError::Parse`] if its content is not valid CSV.
pub fn read_records(path: &Path) -> Result<RecordSet, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Reading records from {}", path.display());
    read_records_from(file)
}

/// Read records from any reader.
///
/// # Errors
///
/// Returns [`InputError::Parse`] if the content cannot be decoded
/// (including invalid UTF-8), or [`InputError::UnterminatedQuote`] if a
/// quoted field is never closed.
pub fn read_records_from<R: Read>(reader: R) -> Result<RecordSet, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut set = RecordSet::default();
    for row in csv_reader.records() {
        let row = row?;
        match (row.get(0), row.get(1)) {
            (Some(filename), Some(hash)) => set.records.push(Record::new(filename, hash)),
            (Some(lone), None) if lone.contains(['\n', '\r']) => {
                // only an open quote lets a single field span lines
                return Err(InputError::UnterminatedQuote {
                    line: row.position().map_or(0, csv::Position::line),
                });
            }
            _ => {
                set.skipped_rows += 1;
                log::debug!(
                    "Skipping short row at line {}: {} column(s)",
                    row.position().map_or(0, csv::Position::line),
                    row.len()
                );
            }
        }
    }

    log::debug!(
        "Read {} record(s), skipped {} short row(s)",
        set.records.len(),
        set.skipped_rows
    );
    Ok(set)
}
