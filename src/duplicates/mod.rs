//! Same-size detection module.
//!
//! This module provides the size index that groups files by exact byte size,
//! the first step of duplicate detection: files of different sizes cannot be
//! duplicates, and files of equal size are worth a closer look.

pub mod groups;

pub use groups::{SizeGroup, SizeIndex};
