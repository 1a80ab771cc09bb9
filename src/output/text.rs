//! Plain-text report of files sharing a size.
//!
//! # Format
//!
//! Each collision group is preceded by a blank line, and a summary line
//! closes the report:
//!
//! ```text
//!
//! Size 5 bytes has 2 files:
//!   /photos/x.txt
//!   /photos/y.txt
//!
//! Found 2 files with same size from 3 files in 1 folders.
//! ```

use std::io::{self, Write};
use std::path::Path;

use super::digits::DigitGrouping;
use crate::duplicates::SizeIndex;
use crate::scanner::ScanCounters;

/// Totals printed on the summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Files in a group of two or more with the same size
    pub same_size: u64,
    /// Files found
    pub files: u64,
    /// Folders found
    pub folders: u64,
}

/// Text report writer.
pub struct TextReport<'a> {
    index: &'a SizeIndex,
    counters: ScanCounters,
    digits: &'a dyn DigitGrouping,
}

impl<'a> TextReport<'a> {
    /// Create a report over a finished scan.
    #[must_use]
    pub fn new(index: &'a SizeIndex, counters: ScanCounters, digits: &'a dyn DigitGrouping) -> Self {
        Self {
            index,
            counters,
            digits,
        }
    }

    /// Write every collision group and the summary line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails (for example a closed pipe).
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<ReportSummary> {
        let mut summary = ReportSummary {
            same_size: 0,
            files: self.counters.files,
            folders: self.counters.folders,
        };

        for group in self.index.collision_groups() {
            summary.same_size += group.len() as u64;

            writeln!(writer)?;
            writeln!(
                writer,
                "Size {} bytes has {} files:",
                self.digits.format(group.size),
                self.digits.format(group.len() as u64)
            )?;
            for path in group.paths() {
                writeln!(writer, "  {}", Path::new(path).display())?;
            }
        }

        writeln!(writer)?;
        writeln!(
            writer,
            "Found {} files with same size from {} files in {} folders.",
            self.digits.format(summary.same_size),
            self.digits.format(summary.files),
            self.digits.format(summary.folders)
        )?;
        writer.flush()?;

        Ok(summary)
    }
}
