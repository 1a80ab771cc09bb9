//! Per-run traversal state.
//!
//! A [`Traverser`] is built once per run. It owns the counters and the
//! [`SizeIndex`], classifies every path it is given, walks folders with a
//! [`Walker`], and folds each regular file into the index.

use std::path::Path;

use super::observer::{LogObserver, ScanObserver};
use super::path_utils::canonical_or_literal;
use super::walker::{WalkEvent, Walker};
use super::{EntryKind, FileEntry, ScanError, WalkerConfig};
use crate::duplicates::SizeIndex;

/// Files and folders found so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCounters {
    /// Regular files found, counting every time a file is reached
    pub files: u64,
    /// Folders entered
    pub folders: u64,
}

impl ScanCounters {
    /// Whether anything at all was found.
    #[must_use]
    pub fn found_anything(&self) -> bool {
        self.files > 0 || self.folders > 0
    }
}

/// Walks user-supplied paths and indexes every regular file by size.
#[derive(Debug)]
pub struct Traverser<O: ScanObserver = LogObserver> {
    config: WalkerConfig,
    counters: ScanCounters,
    index: SizeIndex,
    observer: O,
}

impl Traverser {
    /// Create a traverser that logs its diagnostics.
    #[must_use]
    pub fn new(config: WalkerConfig) -> Self {
        Self::with_observer(config, LogObserver)
    }
}

impl<O: ScanObserver> Traverser<O> {
    /// Create a traverser that reports diagnostics to `observer`.
    #[must_use]
    pub fn with_observer(config: WalkerConfig, observer: O) -> Self {
        Self {
            config,
            counters: ScanCounters::default(),
            index: SizeIndex::new(),
            observer,
        }
    }

    /// Turn recursion into subfolders on or off for paths visited from now on.
    pub fn set_recursive(&mut self, recursive: bool) {
        self.config.recursive = recursive;
    }

    /// Current walker configuration.
    #[must_use]
    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Counters accumulated so far.
    #[must_use]
    pub fn counters(&self) -> ScanCounters {
        self.counters
    }

    /// The size index built so far.
    #[must_use]
    pub fn index(&self) -> &SizeIndex {
        &self.index
    }

    /// The observer receiving diagnostics.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consume the traverser, keeping the index and counters.
    #[must_use]
    pub fn into_parts(self) -> (SizeIndex, ScanCounters) {
        (self.index, self.counters)
    }

    /// Scan one path: a folder is walked, a file is indexed, anything else
    /// is reported and skipped.
    pub fn visit(&mut self, path: &Path) {
        match EntryKind::of(path) {
            EntryKind::Directory => self.visit_folder(path),
            EntryKind::RegularFile { size } => {
                self.record(FileEntry::new(canonical_or_literal(path), size));
            }
            EntryKind::Other => self.observer.on_not_file_or_folder(path),
        }
    }

    fn visit_folder(&mut self, path: &Path) {
        let walker = Walker::new(path, self.config.clone());

        for event in walker.walk() {
            match event {
                Ok(WalkEvent::Folder(folder)) => {
                    self.counters.folders += 1;
                    self.observer.on_folder(&folder);
                }
                Ok(WalkEvent::File(file)) => self.record(file),
                Ok(WalkEvent::SkippedSubfolder(folder)) => {
                    self.observer.on_ignored_subfolder(&folder);
                }
                Err(ScanError::ProtectedFolder { path, source }) => {
                    log::debug!("Listing {} failed: {}", path.display(), source);
                    self.observer.on_protected_folder(&path);
                }
                Err(ScanError::SymlinkLoop { path, ancestor }) => {
                    self.observer.on_symlink_loop(&path, &ancestor);
                }
                Err(e) => log::trace!("Ignoring entry: {}", e),
            }
        }
    }

    fn record(&mut self, file: FileEntry) {
        self.counters.files += 1;
        self.index.record(file.size, file.path.into_os_string());
    }
}
