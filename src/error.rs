//! Exit statuses for the samesize application.

/// Exit statuses reported to the operating system.
///
/// - 1: Success (at least one file or folder was scanned)
/// - -1: Failure (a command-line option was not recognized, or output failed)
/// - 0: Unknown (help was shown, or there was nothing to do)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// At least one file or folder was found during the run.
    Success = 1,
    /// Incorrect request or an unrecoverable error.
    Failure = -1,
    /// Help was shown, or nothing was really done.
    Unknown = 0,
}

impl ExitStatus {
    /// Get the numeric exit status.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Short lowercase name, used in debug logging.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Unknown => "unknown",
        }
    }
}
