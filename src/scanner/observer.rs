//! Diagnostic callbacks for traversal.
//!
//! The [`Traverser`](super::Traverser) never writes diagnostics itself; it
//! reports each one to a [`ScanObserver`]. The production observer,
//! [`LogObserver`], forwards them to the `log` facade, which writes to
//! standard error.

use std::path::Path;

/// Receives traversal diagnostics.
///
/// Every method has a no-op default so implementations only handle the
/// events they care about.
pub trait ScanObserver {
    /// Called when a folder is entered and counted.
    fn on_folder(&mut self, _path: &Path) {}

    /// Called when a folder's entries could not be listed.
    /// The folder is treated as empty.
    fn on_protected_folder(&mut self, _path: &Path) {}

    /// Called for each subfolder skipped because recursion is disabled.
    fn on_ignored_subfolder(&mut self, _path: &Path) {}

    /// Called when a user-supplied path is neither a file nor a folder.
    fn on_not_file_or_folder(&mut self, _path: &Path) {}

    /// Called when a symbolic link points back to a folder on the current
    /// branch and is not followed.
    fn on_symlink_loop(&mut self, _path: &Path, _ancestor: &Path) {}
}

/// Observer that writes every diagnostic through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ScanObserver for LogObserver {
    fn on_folder(&mut self, path: &Path) {
        log::info!("Scanning folder: {}", path.display());
    }

    fn on_protected_folder(&mut self, path: &Path) {
        log::warn!("Protected folder: {}", path.display());
    }

    fn on_ignored_subfolder(&mut self, path: &Path) {
        log::info!("Ignoring subfolder: {}", path.display());
    }

    fn on_not_file_or_folder(&mut self, path: &Path) {
        log::warn!("Not a file or folder: {}", path.display());
    }

    fn on_symlink_loop(&mut self, path: &Path, ancestor: &Path) {
        log::warn!(
            "Symlink loop: {} (points back to {})",
            path.display(),
            ancestor.display()
        );
    }
}

impl<T: ScanObserver + ?Sized> ScanObserver for &mut T {
    fn on_folder(&mut self, path: &Path) {
        (**self).on_folder(path);
    }

    fn on_protected_folder(&mut self, path: &Path) {
        (**self).on_protected_folder(path);
    }

    fn on_ignored_subfolder(&mut self, path: &Path) {
        (**self).on_ignored_subfolder(path);
    }

    fn on_not_file_or_folder(&mut self, path: &Path) {
        (**self).on_not_file_or_folder(path);
    }

    fn on_symlink_loop(&mut self, path: &Path, ancestor: &Path) {
        (**self).on_symlink_loop(path, ancestor);
    }
}
