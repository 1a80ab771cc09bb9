//! Size-keyed grouping of file paths.
//!
//! # Overview
//!
//! [`SizeIndex`] maps an exact byte size to the set of canonical paths having
//! that size. It is write-then-read-once: paths are recorded during
//! traversal, and the report reads the collision groups afterwards.
//!
//! Sizes iterate in ascending numeric order. Within a size, paths are unique
//! and ordered by their raw code units (bytes on Unix), which for valid
//! Unicode is strict code-point order.
//!
//! # Example
//!
//! ```
//! use samesize::duplicates::SizeIndex;
//!
//! let mut index = SizeIndex::new();
//! index.record(1024, "/b.txt".into());
//! index.record(1024, "/a.txt".into());
//! index.record(2048, "/c.txt".into());
//!
//! // Only sizes shared by 2+ files form a group
//! let groups: Vec<_> = index.collision_groups().collect();
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].size, 1024);
//! assert_eq!(groups[0].paths().collect::<Vec<_>>(), ["/a.txt", "/b.txt"]);
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::{OsStr, OsString};

use crate::scanner::FileEntry;

/// All files sharing one size, borrowed from a [`SizeIndex`].
#[derive(Debug, Clone, Copy)]
pub struct SizeGroup<'a> {
    /// File size in bytes (shared by all files in this group)
    pub size: u64,
    files: &'a BTreeSet<OsString>,
}

impl<'a> SizeGroup<'a> {
    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Whether more than one file has this size.
    #[must_use]
    pub fn is_collision(&self) -> bool {
        self.files.len() > 1
    }

    /// Paths in ascending order.
    pub fn paths(&self) -> impl Iterator<Item = &'a OsStr> + 'a {
        self.files.iter().map(OsString::as_os_str)
    }
}

/// Mapping from byte size to the set of paths with that size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeIndex {
    buckets: BTreeMap<u64, BTreeSet<OsString>>,
}

impl SizeIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `path` has `size` bytes.
    ///
    /// Recording a path already present under the same size has no effect.
    pub fn record(&mut self, size: u64, path: OsString) {
        let bucket = self.buckets.entry(size).or_default();
        if !bucket.insert(path) {
            log::trace!("Size {} already lists this path", size);
        }
    }

    /// Number of distinct sizes seen.
    #[must_use]
    pub fn size_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of distinct paths recorded, across all sizes.
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.buckets.values().map(BTreeSet::len).sum()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Every size bucket in ascending size order, single files included.
    pub fn groups(&self) -> impl Iterator<Item = SizeGroup<'_>> + '_ {
        self.buckets
            .iter()
            .map(|(&size, files)| SizeGroup { size, files })
    }

    /// Size buckets holding two or more paths, in ascending size order.
    pub fn collision_groups(&self) -> impl Iterator<Item = SizeGroup<'_>> + '_ {
        self.groups().filter(SizeGroup::is_collision)
    }

    /// Total number of paths in all collision groups.
    #[must_use]
    pub fn collision_count(&self) -> usize {
        self.collision_groups().map(|group| group.len()).sum()
    }
}

impl Extend<FileEntry> for SizeIndex {
    fn extend<I: IntoIterator<Item = FileEntry>>(&mut self, files: I) {
        for file in files {
            self.record(file.size, file.path.into_os_string());
        }
    }
}

impl FromIterator<FileEntry> for SizeIndex {
    fn from_iter<I: IntoIterator<Item = FileEntry>>(files: I) -> Self {
        let mut index = Self::new();
        index.extend(files);
        index
    }
}
