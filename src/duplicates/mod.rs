//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Grouping file names by their content hash
//! - Choosing one file to keep per group of duplicates

pub mod groups;
pub mod selector;

pub use groups::{group_by_hash, GroupingStats, HashGroup, HashGroups};
pub use selector::{Selection, TieBreak};

/// Run selection over every duplicate group, in group order.
///
/// Singleton groups produce nothing.
#[must_use]
pub fn select_all(groups: &HashGroups, tie_break: TieBreak) -> Vec<Selection> {
    groups
        .duplicates()
        .filter_map(|group| Selection::from_group(&group.files, tie_break))
        .collect()
}
