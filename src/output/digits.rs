//! Grouped-digit number formatting.
//!
//! Counts and sizes in the report are printed with digit grouping
//! (`1,234,567`). The grouping convention is a pluggable capability: anything
//! implementing [`DigitGrouping`] can format the report's numbers.
//! [`GroupedDigits`] is the stock implementation, configured by a separator
//! and group sizes, and can be picked from the active POSIX locale.
//!
//! # Example
//!
//! ```
//! use samesize::output::digits::{DigitGrouping, GroupedDigits};
//!
//! assert_eq!(GroupedDigits::default().format(1234567), "1,234,567");
//! assert_eq!(GroupedDigits::for_locale("de_DE.UTF-8").format(1234567), "1.234.567");
//! assert_eq!(GroupedDigits::for_locale("en_IN").format(1234567), "12,34,567");
//! ```

use std::env;

/// Formats non-negative integers for display.
pub trait DigitGrouping {
    /// Format `value` with digit grouping.
    fn format(&self, value: u64) -> String;
}

/// Digit grouping with a fixed separator.
///
/// The rightmost group has `primary` digits; every group to its left has
/// `secondary` digits. Western grouping is 3/3, Indian grouping is 3/2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedDigits {
    separator: String,
    primary: usize,
    secondary: usize,
}

const NO_BREAK_SPACE: &str = "\u{a0}";

impl Default for GroupedDigits {
    fn default() -> Self {
        Self::new(",", 3, 3)
    }
}

impl GroupedDigits {
    /// Create a grouping. Group sizes of zero are treated as one.
    #[must_use]
    pub fn new(separator: impl Into<String>, primary: usize, secondary: usize) -> Self {
        Self {
            separator: separator.into(),
            primary: primary.max(1),
            secondary: secondary.max(1),
        }
    }

    /// The separator placed between groups.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Grouping for the active locale.
    ///
    /// The locale is taken from `LC_ALL`, then `LC_NUMERIC`, then `LANG`; the
    /// first non-empty value wins, as in POSIX `setlocale`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Grouping for the locale found through `lookup`, with the same
    /// precedence as [`from_env`](Self::from_env).
    ///
    /// ```
    /// use samesize::output::digits::GroupedDigits;
    ///
    /// let digits = GroupedDigits::from_vars(|name| match name {
    ///     "LC_ALL" => Some(String::new()),
    ///     "LANG" => Some("de_DE.UTF-8".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(digits.separator(), ".");
    /// ```
    #[must_use]
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = ["LC_ALL", "LC_NUMERIC", "LANG"]
            .into_iter()
            .filter_map(&lookup)
            .find(|value| !value.is_empty());

        match locale {
            Some(name) => {
                log::debug!("Number format from locale {}", name);
                Self::for_locale(&name)
            }
            None => Self::default(),
        }
    }

    /// Grouping for a POSIX locale name such as `fr_FR.UTF-8` or `de_CH`.
    ///
    /// `C`, `POSIX` and unknown languages use `,` every three digits.
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        // Strip ".codeset" and "@modifier"
        let name = locale
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let mut parts = name.split(['_', '-']);
        let language = parts.next().unwrap_or_default();
        let territory = parts.next().unwrap_or_default();

        match (language, territory) {
            ("de" | "it", "ch") => Self::new("'", 3, 3),
            ("en" | "hi", "in") | ("hi", _) => Self::new(",", 3, 2),
            (
                "de" | "es" | "it" | "nl" | "pt" | "da" | "id" | "tr" | "el" | "ro" | "sl"
                | "hr" | "sr",
                _,
            ) => Self::new(".", 3, 3),
            (
                "fr" | "ru" | "pl" | "cs" | "sk" | "sv" | "fi" | "nb" | "nn" | "no" | "uk"
                | "hu" | "bg" | "et" | "lt" | "lv",
                _,
            ) => Self::new(NO_BREAK_SPACE, 3, 3),
            _ => Self::default(),
        }
    }
}

impl DigitGrouping for GroupedDigits {
    fn format(&self, value: u64) -> String {
        let digits = value.to_string();
        if digits.len() <= self.primary {
            return digits;
        }

        // Group boundaries, collected right to left
        let mut groups = Vec::new();
        let mut end = digits.len();
        let mut width = self.primary;
        while end > width {
            groups.push(&digits[end - width..end]);
            end -= width;
            width = self.secondary;
        }
        groups.push(&digits[..end]);

        groups.reverse();
        groups.join(self.separator.as_str())
    }
}

/// Grouping that prints plain digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDigits;

impl DigitGrouping for PlainDigits {
    fn format(&self, value: u64) -> String {
        value.to_string()
    }
}
