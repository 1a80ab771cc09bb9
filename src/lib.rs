//! samesize - Find All Files With Same File Size
//!
//! Scans files and folders, groups regular files by exact byte size, and
//! reports every size shared by two or more files. This is the usual first
//! step of duplicate detection: files of different sizes cannot be
//! duplicates.

pub mod app;
pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

pub use app::{run_app, run_with, RunSettings};
