//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct, which walks one folder
//! depth-first and yields a [`WalkEvent`] for every folder entered, every
//! regular file found, and every subfolder skipped because recursion is off.
//!
//! # Behavior
//!
//! - Single-threaded, depth-first traversal with one open directory handle
//! - Symbolic links are followed; a link back to a folder on the current
//!   branch is reported as [`ScanError::SymlinkLoop`] instead of descended
//! - A folder that cannot be listed yields [`ScanError::ProtectedFolder`]
//!   after its [`WalkEvent::Folder`] event, and is treated as empty
//! - Special files (pipes, sockets, devices) are skipped silently
//! - Entries that vanish or cannot be queried yield [`ScanError::Io`]
//! - Entries within a folder are visited in file-name order
//!
//! # Example
//!
//! ```no_run
//! use samesize::scanner::{WalkEvent, Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Pictures"), WalkerConfig::default());
//! for event in walker.walk() {
//!     match event {
//!         Ok(WalkEvent::File(file)) => println!("{}: {} bytes", file.path.display(), file.size),
//!         Ok(_) => {}
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::path_utils::canonical_or_literal;
use super::{FileEntry, ScanError, WalkerConfig};

/// One step of a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEvent {
    /// A folder is about to be listed: the root, or a subfolder when
    /// recursion is enabled.
    Folder(PathBuf),
    /// A regular file, with its canonical path and size.
    File(FileEntry),
    /// A subfolder that was not descended because recursion is disabled.
    SkippedSubfolder(PathBuf),
}

/// Depth-first directory walker.
#[derive(Debug)]
pub struct Walker {
    /// Root folder to walk
    root: PathBuf,
    /// Walker configuration
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given folder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use samesize::scanner::{Walker, WalkerConfig};
    /// use std::path::Path;
    ///
    /// let walker = Walker::new(Path::new("."), WalkerConfig::default());
    /// ```
    #[must_use]
    pub fn new(path: &Path, config: WalkerConfig) -> Self {
        Self {
            root: path.to_path_buf(),
            config,
        }
    }

    /// Walk the folder tree, yielding events in depth-first order.
    ///
    /// The root folder itself is the first [`WalkEvent::Folder`]. Errors are
    /// yielded as [`ScanError`] values rather than stopping iteration.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use samesize::scanner::{WalkEvent, Walker, WalkerConfig};
    /// use std::path::Path;
    ///
    /// let walker = Walker::new(Path::new("."), WalkerConfig::default());
    /// let files = walker
    ///     .walk()
    ///     .filter(|event| matches!(event, Ok(WalkEvent::File(_))))
    ///     .count();
    /// println!("Found {} files", files);
    /// ```
    pub fn walk(&self) -> impl Iterator<Item = Result<WalkEvent, ScanError>> + '_ {
        // Depth 1 entries are still yielded at max_depth 1, so skipped
        // subfolders can be reported; they are just never listed.
        let max_depth = if self.config.recursive { usize::MAX } else { 1 };

        let walk_dir = WalkDir::new(&self.root)
            .follow_links(true)
            .max_depth(max_depth)
            .max_open(1)
            .sort_by_file_name();

        walk_dir
            .into_iter()
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => self.process_entry(&entry),
                Err(e) => Some(Err(self.convert_error(e))),
            })
    }

    /// Turn one listed entry into an event, or nothing for special files.
    fn process_entry(&self, entry: &DirEntry) -> Option<Result<WalkEvent, ScanError>> {
        let path = entry.path();
        let file_type = entry.file_type();

        if file_type.is_dir() {
            if entry.depth() == 0 || self.config.recursive {
                return Some(Ok(WalkEvent::Folder(path.to_path_buf())));
            }
            return Some(Ok(WalkEvent::SkippedSubfolder(path.to_path_buf())));
        }

        if !file_type.is_file() {
            log::trace!("Skipping special file: {}", path.display());
            return None;
        }

        // Links are followed, so this is the target's metadata
        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                return Some(Err(ScanError::Io {
                    path: path.to_path_buf(),
                    source: e
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other("metadata unavailable")),
                }));
            }
        };

        Some(Ok(WalkEvent::File(FileEntry::new(
            canonical_or_literal(path),
            metadata.len(),
        ))))
    }

    /// Classify a walkdir error.
    ///
    /// walkdir reports a failed listing against the folder's own path, and a
    /// failed stat (dangling link, vanished entry) against the entry's path,
    /// so a path that is still a folder means the listing failed.
    fn convert_error(&self, error: walkdir::Error) -> ScanError {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);

        if let Some(ancestor) = error.loop_ancestor() {
            return ScanError::SymlinkLoop {
                path,
                ancestor: ancestor.to_path_buf(),
            };
        }

        let is_folder = path.is_dir();
        let source = error
            .into_io_error()
            .unwrap_or_else(|| io::Error::other("walk failed"));

        if is_folder {
            ScanError::ProtectedFolder { path, source }
        } else {
            ScanError::Io { path, source }
        }
    }
}
