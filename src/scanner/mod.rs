//! Scanner module for filesystem traversal.
//!
//! This module provides functionality for:
//! - Classifying user-supplied paths as folder, file, or neither
//! - Depth-first directory walking using walkdir
//! - Canonical path resolution for discovered files
//! - Reporting traversal diagnostics through a [`ScanObserver`]
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal and file discovery
//! - [`traverser`]: Per-run state (counters and size index) fed by the walker
//! - [`observer`]: Diagnostic callbacks
//! - [`path_utils`]: Canonical path resolution
//!
//! # Example
//!
//! ```no_run
//! use samesize::scanner::{Traverser, WalkerConfig};
//! use std::path::Path;
//!
//! let mut traverser = Traverser::new(WalkerConfig::default());
//! traverser.visit(Path::new("photos"));
//! traverser.visit(Path::new("backup/photo.jpg"));
//!
//! let counters = traverser.counters();
//! println!("{} files in {} folders", counters.files, counters.folders);
//! ```

pub mod observer;
pub mod path_utils;
pub mod traverser;
pub mod walker;

use std::fs;
use std::path::{Path, PathBuf};

// Re-export main types
pub use observer::{LogObserver, ScanObserver};
pub use traverser::{ScanCounters, Traverser};
pub use walker::{WalkEvent, Walker};

/// A regular file discovered during traversal.
///
/// Holds the canonical path (or the literal path when canonicalization
/// failed) and the size in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Canonical path to the file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
}

impl FileEntry {
    /// Create a new FileEntry.
    #[must_use]
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }
}

/// What a path refers to, decided once before any work is done on it.
///
/// Symbolic links are followed, so a link to a folder is a `Directory` and a
/// dangling link is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A folder whose entries can be listed.
    Directory,
    /// A regular file and its size in bytes.
    RegularFile {
        /// File size in bytes
        size: u64,
    },
    /// Missing, dangling, or a special file (device, socket, pipe).
    Other,
}

impl EntryKind {
    /// Classify a path by querying its metadata.
    #[must_use]
    pub fn of(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => Self::Directory,
            Ok(metadata) if metadata.is_file() => Self::RegularFile {
                size: metadata.len(),
            },
            Ok(_) => Self::Other,
            Err(e) => {
                log::trace!("No metadata for {}: {}", path.display(), e);
                Self::Other
            }
        }
    }
}

/// Configuration for directory walking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Descend into subfolders of the given folders.
    /// When false, subfolders are reported as ignored and not scanned.
    pub recursive: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self { recursive: true }
    }
}

impl WalkerConfig {
    /// Set whether subfolders are scanned.
    #[must_use]
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

/// Errors that can occur during directory scanning.
///
/// None of these stop a scan: each is reported and traversal continues.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// A folder exists but its entries could not be listed.
    #[error("Protected folder: {path}")]
    ProtectedFolder {
        /// The folder that could not be listed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A symbolic link leads back to a folder on the current branch.
    #[error("Symlink loop: {path} (points back to {ancestor})")]
    SymlinkLoop {
        /// The link that was not followed
        path: PathBuf,
        /// The folder it points back to
        ancestor: PathBuf,
    },

    /// An entry vanished or could not be queried while walking.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
