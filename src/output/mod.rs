//! Output formatting for scan results.
//!
//! - [`text`]: the plain-text same-size report written to standard output
//! - [`digits`]: grouped-digit number formatting used by the report
//!
//! # Example
//!
//! ```no_run
//! use samesize::output::{GroupedDigits, TextReport};
//! use samesize::scanner::{Traverser, WalkerConfig};
//! use std::path::Path;
//!
//! let mut traverser = Traverser::new(WalkerConfig::default());
//! traverser.visit(Path::new("."));
//! let (index, counters) = traverser.into_parts();
//!
//! let digits = GroupedDigits::from_env();
//! TextReport::new(&index, counters, &digits)
//!     .write_to(std::io::stdout())
//!     .unwrap();
//! ```

pub mod digits;
pub mod text;

// Re-export main types
pub use digits::{DigitGrouping, GroupedDigits, PlainDigits};
pub use text::{ReportSummary, TextReport};
