//! Canonical path resolution.
//!
//! Files are indexed under their canonical path: absolute, with every
//! symbolic link resolved and `.`/`..` components removed. Two routes to the
//! same file (a folder and a link to it, or a relative and an absolute
//! spelling) therefore index the same path once.

use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the canonical path of `path`, or return it unchanged if that
/// fails.
///
/// Canonicalization can fail for a file that vanished after it was listed,
/// or for a path with an unreadable component; the literal path is still a
/// usable name for the report.
///
/// # Example
///
/// ```
/// use samesize::scanner::path_utils::canonical_or_literal;
/// use std::path::Path;
///
/// let missing = Path::new("no/such/file.txt");
/// assert_eq!(canonical_or_literal(missing), missing);
/// ```
#[must_use]
pub fn canonical_or_literal(path: &Path) -> PathBuf {
    match fs::canonicalize(path) {
        Ok(canonical) => canonical,
        Err(e) => {
            log::debug!(
                "Cannot canonicalize {}, using it as given: {}",
                path.display(),
                e
            );
            path.to_path_buf()
        }
    }
}
