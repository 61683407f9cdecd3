//! Keep/remove selection for one hash group.
//!
//! The policy orders file names by string length, ascending, and keeps the
//! first one. Everything after it becomes a removal candidate, in sorted
//! order. Length is the byte length of the UTF-8 name.
//!
//! Names of equal length are ordered by the configured [`TieBreak`]:
//!
//! - [`TieBreak::InputOrder`] keeps them in the order they were read
//!   (a stable sort on length alone).
//! - [`TieBreak::Lexicographic`] compares them byte-wise as a secondary key,
//!   so the result no longer depends on input row order.
//!
//! # Example
//!
//! ```
//! use hashdupe::duplicates::{Selection, TieBreak};
//!
//! let files = vec!["photo1.jpg".to_string(), "photo.jpg".to_string()];
//! let selection = Selection::from_group(&files, TieBreak::InputOrder).unwrap();
//!
//! assert_eq!(selection.keep, "photo.jpg");
//! assert_eq!(selection.removals, vec!["photo1.jpg"]);
//! ```

use std::cmp::Ordering;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Secondary ordering for file names of equal length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Equal-length names keep their input order
    #[default]
    InputOrder,
    /// Equal-length names are compared byte-wise
    Lexicographic,
}

impl TieBreak {
    fn compare(self, a: &str, b: &str) -> Ordering {
        let by_len = a.len().cmp(&b.len());
        match self {
            Self::InputOrder => by_len,
            Self::Lexicographic => by_len.then_with(|| a.cmp(b)),
        }
    }
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TieBreak::InputOrder => write!(f, "input-order"),
            TieBreak::Lexicographic => write!(f, "lexicographic"),
        }
    }
}

/// The file to keep and the files proposed for removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The surviving file
    pub keep: String,
    /// Every other member of the group, in sorted order
    pub removals: Vec<String>,
}

impl Selection {
    /// Select a keep file from a group.
    ///
    /// Returns `None` for groups with fewer than two files, which need no
    /// decision.
    #[must_use]
    pub fn from_group(files: &[String], tie_break: TieBreak) -> Option<Self> {
        if files.len() < 2 {
            return None;
        }

        let mut sorted = files.to_vec();
        // sort_by is stable, which InputOrder relies on
        sorted.sort_by(|a, b| tie_break.compare(a, b));

        let removals = sorted.split_off(1);
        let keep = sorted.pop()?;
        Some(Self { keep, removals })
    }

    /// Number of files in the source group.
    #[must_use]
    pub fn group_len(&self) -> usize {
        self.removals.len() + 1
    }
}
