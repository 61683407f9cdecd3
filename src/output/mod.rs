//! Report output for keep/remove selections.
//!
//! This module writes selections in one of several formats:
//! - Compact: one removal candidate per line (default)
//! - Verbose: kept file, removal candidates and a separator per group
//! - CSV: `group_id,keep,removal` rows for spreadsheet import
//!
//! # Example
//!
//! ```
//! use hashdupe::duplicates::Selection;
//! use hashdupe::output::{ReportFormat, ReportWriter};
//!
//! let selections = vec![Selection {
//!     keep: "photo.jpg".to_string(),
//!     removals: vec!["photo1.jpg".to_string()],
//! }];
//!
//! let report = ReportWriter::new(&selections, ReportFormat::Compact);
//! assert_eq!(report.to_string().unwrap(), "photo1.jpg\n");
//! ```

pub mod report;

// Re-export main types
pub use report::{write_report, ReportError, ReportFormat, ReportWriter};
