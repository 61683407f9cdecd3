//! Hash grouping of input records.
//!
//! # Overview
//!
//! Grouping is a single pass over the records: every file name is appended
//! to the bucket of its hash. The result is an immutable [`HashGroups`]
//! mapping that remembers both the order in which hashes were first seen and,
//! inside each bucket, the order in which file names were seen.
//!
//! Duplicate `(filename, hash)` rows are kept as-is, so the same name can
//! appear twice in one bucket if the input repeats it.
//!
//! # Example
//!
//! ```
//! use hashdupe::duplicates::group_by_hash;
//! use hashdupe::input::Record;
//!
//! let records = vec![
//!     Record::new("photo1.jpg", "H1"),
//!     Record::new("photo.jpg", "H1"),
//!     Record::new("c.txt", "H2"),
//! ];
//!
//! let (groups, stats) = group_by_hash(records);
//!
//! assert_eq!(stats.unique_hashes, 2);
//! assert_eq!(stats.duplicate_groups, 1);
//! assert_eq!(groups.get("H1").unwrap(), ["photo1.jpg", "photo.jpg"]);
//! ```

use std::collections::HashMap;

use crate::input::Record;

/// File names sharing one hash value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashGroup {
    /// The shared hash
    pub hash: String,
    /// File names in first-seen order
    pub files: Vec<String>,
}

impl HashGroup {
    /// Number of file names in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Check if this group needs a keep/remove decision (2+ files).
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.files.len() > 1
    }

    /// Number of removal candidates this group will produce.
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.files.len().saturating_sub(1)
    }
}

/// Mapping from hash to file names, built once by [`group_by_hash`].
///
/// Iteration follows the order in which each hash first appeared in the
/// input, so the same input always yields the same report.
#[derive(Debug, Clone, Default)]
pub struct HashGroups {
    groups: Vec<HashGroup>,
    index: HashMap<String, usize>,
}

impl HashGroups {
    /// Number of distinct hashes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if no records were grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// File names recorded for `hash`, if any.
    #[must_use]
    pub fn get(&self, hash: &str) -> Option<&[String]> {
        self.index
            .get(hash)
            .map(|&idx| self.groups[idx].files.as_slice())
    }

    /// All groups, in first-seen hash order.
    pub fn iter(&self) -> impl Iterator<Item = &HashGroup> {
        self.groups.iter()
    }

    /// Only the groups with two or more file names.
    pub fn duplicates(&self) -> impl Iterator<Item = &HashGroup> {
        self.groups.iter().filter(|g| g.has_duplicates())
    }
}

/// Statistics from the grouping pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingStats {
    /// Number of records grouped
    pub total_records: usize,
    /// Number of distinct hash values
    pub unique_hashes: usize,
    /// Number of hashes shared by 2+ records
    pub duplicate_groups: usize,
    /// Number of removal candidates across all duplicate groups
    pub duplicate_files: usize,
}

/// Group file names by hash.
///
/// # Arguments
///
/// * `records` - Records in input order
///
/// # Returns
///
/// The complete [`HashGroups`] mapping (singletons included) and
/// [`GroupingStats`] describing it.
#[must_use]
pub fn group_by_hash(records: impl IntoIterator<Item = Record>) -> (HashGroups, GroupingStats) {
    let mut groups = HashGroups::default();
    let mut stats = GroupingStats::default();

    for record in records {
        stats.total_records += 1;
        match groups.index.get(&record.hash) {
            Some(&idx) => groups.groups[idx].files.push(record.filename),
            None => {
                groups.index.insert(record.hash.clone(), groups.groups.len());
                groups.groups.push(HashGroup {
                    hash: record.hash,
                    files: vec![record.filename],
                });
            }
        }
    }

    stats.unique_hashes = groups.len();
    for group in groups.duplicates() {
        stats.duplicate_groups += 1;
        stats.duplicate_files += group.duplicate_count();
        log::trace!("Hash {}: {} files", group.hash, group.len());
    }

    log::info!(
        "Grouped {} records into {} hashes ({} duplicate groups, {} removal candidates)",
        stats.total_records,
        stats.unique_hashes,
        stats.duplicate_groups,
        stats.duplicate_files
    );

    (groups, stats)
}
