//! Command-line interface definitions for samesize.
//!
//! The command line is a list of options and file or folder names, processed
//! strictly in order:
//!
//! ```bash
//! # Scan folders and subfolders (default)
//! samesize ~/Pictures /mnt/backup/Pictures
//!
//! # Scan only the top level of the first folder, then a second one fully
//! samesize -s0 ~/Downloads -s1 ~/Pictures
//!
//! # Show help
//! samesize -?
//! ```
//!
//! Options are case-insensitive. On Windows a leading `/` is accepted in
//! place of `-`. clap collects the argument vector; its own help and version
//! flags are disabled, and [`Cli::parse_raw`] shields a user-supplied `--`,
//! so that every token reaches [`classify`].

use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::iter;

/// Find all files with the same file size.
#[derive(Debug, Parser)]
#[command(name = "samesize")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Options and file or folder names, in the order they apply
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parse an argument vector whose first item is the program name.
    ///
    /// Every user argument, a literal `--` included, is kept in order.
    pub fn parse_raw<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(escape_args(args))
    }
}

/// Put an end-of-options marker after the program name. clap consumes it,
/// so a `--` typed by the user is passed through as an ordinary argument.
fn escape_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let program = args.next().unwrap_or_else(|| OsString::from("samesize"));

    iter::once(program)
        .chain(iter::once(OsString::from("--")))
        .chain(args)
        .collect()
}

/// Which leading characters introduce an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSyntax {
    /// Accept `/` as well as `-` (Windows convention).
    pub slash_prefix: bool,
}

impl OptionSyntax {
    /// The convention of the platform we were built for.
    #[must_use]
    pub fn native() -> Self {
        Self {
            slash_prefix: cfg!(windows),
        }
    }

    /// Dash-only options.
    #[must_use]
    pub fn unix() -> Self {
        Self {
            slash_prefix: false,
        }
    }

    /// Dash or slash options.
    #[must_use]
    pub fn windows() -> Self {
        Self { slash_prefix: true }
    }
}

/// What one command-line argument asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Empty argument, ignored.
    Skip,
    /// Show help and stop.
    Help,
    /// Turn subfolder scanning on or off for the paths that follow.
    Recurse(bool),
    /// An option we don't know; the original argument is kept for the message.
    Unrecognized(OsString),
    /// A file or folder to scan.
    Path(OsString),
}

/// Classify one argument.
///
/// # Examples
///
/// ```
/// use samesize::cli::{classify, Directive, OptionSyntax};
/// use std::ffi::OsStr;
///
/// let unix = OptionSyntax::unix();
/// assert_eq!(classify(OsStr::new("-S0"), unix), Directive::Recurse(false));
/// assert_eq!(classify(OsStr::new("-help"), unix), Directive::Help);
/// assert_eq!(classify(OsStr::new("photos"), unix), Directive::Path("photos".into()));
/// ```
#[must_use]
pub fn classify(arg: &OsStr, syntax: OptionSyntax) -> Directive {
    if arg.is_empty() {
        // Scripts often pass empty parameters
        return Directive::Skip;
    }

    let word = arg.to_string_lossy().to_lowercase();
    let slash = syntax.slash_prefix;

    match word.as_str() {
        "?" | "-?" | "/?" | "-h" | "-help" => Directive::Help,
        "/h" | "/help" if slash => Directive::Help,
        "-s" | "-s1" => Directive::Recurse(true),
        "/s" | "/s1" if slash => Directive::Recurse(true),
        "-s0" => Directive::Recurse(false),
        "/s0" if slash => Directive::Recurse(false),
        w if w.starts_with('-') || (slash && w.starts_with('/')) => {
            Directive::Unrecognized(arg.to_os_string())
        }
        _ => Directive::Path(arg.to_os_string()),
    }
}

/// Title line of the help summary.
pub const PROGRAM_TITLE: &str = "Find All Files With Same File Size";

/// Write the help summary.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_help<W: Write>(mut writer: W) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", PROGRAM_TITLE)?;
    writeln!(writer)?;
    writeln!(writer, "  samesize  [options]  fileOrFolderNames")?;
    writeln!(writer)?;
    writeln!(writer, "Options:")?;
    writeln!(writer, "  -? = -help = show summary of command-line syntax")?;
    writeln!(writer, "  -s0 = do only given files or folders, no subfolders")?;
    writeln!(
        writer,
        "  -s1 = -s = process files, folders, and subfolders (default)"
    )?;
    writeln!(writer)?;
    writeln!(writer, "Output may be redirected with the \">\" operator.")?;
    writeln!(writer)?;
    writeln!(
        writer,
        "samesize {}. MIT License.",
        env!("CARGO_PKG_VERSION")
    )?;
    writer.flush()
}
