//! Application driver: processes arguments in order, scans, reports, and
//! picks the exit status.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::{classify, write_help, Cli, Directive, OptionSyntax};
use crate::error::ExitStatus;
use crate::output::{DigitGrouping, GroupedDigits, TextReport};
use crate::scanner::{LogObserver, ScanObserver, Traverser, WalkerConfig};

/// Settings that come from the platform rather than the command line.
pub struct RunSettings {
    /// Option prefix convention
    pub syntax: OptionSyntax,
    /// Number formatting for the report
    pub digits: Box<dyn DigitGrouping>,
}

impl RunSettings {
    /// Settings for the current platform and locale.
    #[must_use]
    pub fn native() -> Self {
        Self {
            syntax: OptionSyntax::native(),
            digits: Box::new(GroupedDigits::from_env()),
        }
    }
}

/// Run the application against the real standard streams.
///
/// # Errors
///
/// Returns an error if the report or help text cannot be written.
pub fn run_app(cli: Cli) -> Result<ExitStatus> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_with(
        cli.args,
        &RunSettings::native(),
        &mut stdout.lock(),
        &mut stderr.lock(),
        LogObserver,
    )
}

/// Run the application with explicit streams and diagnostics observer.
///
/// Arguments are handled strictly in order. Paths are scanned as soon as
/// they are reached; a help request or an unrecognized option ends the run
/// at that point, without a report.
///
/// # Errors
///
/// Returns an error if writing to `out` or `err` fails.
pub fn run_with<O, E, S>(
    args: impl IntoIterator<Item = OsString>,
    settings: &RunSettings,
    out: &mut O,
    err: &mut E,
    observer: S,
) -> Result<ExitStatus>
where
    O: Write,
    E: Write,
    S: ScanObserver,
{
    let mut traverser = Traverser::with_observer(WalkerConfig::default(), observer);

    for arg in args {
        match classify(&arg, settings.syntax) {
            Directive::Skip => {}
            Directive::Help => {
                write_help(&mut *err).context("writing help")?;
                return Ok(ExitStatus::Unknown);
            }
            Directive::Recurse(recursive) => traverser.set_recursive(recursive),
            Directive::Unrecognized(option) => {
                writeln!(err, "Option not recognized: {}", option.to_string_lossy())
                    .context("writing error message")?;
                write_help(&mut *err).context("writing help")?;
                return Ok(ExitStatus::Failure);
            }
            Directive::Path(path) => traverser.visit(Path::new(&path)),
        }
    }

    let (index, counters) = traverser.into_parts();
    let summary = TextReport::new(&index, counters, settings.digits.as_ref())
        .write_to(&mut *out)
        .context("writing report")?;

    log::debug!(
        "{} same-size files, {} files, {} folders",
        summary.same_size,
        summary.files,
        summary.folders
    );

    if counters.found_anything() {
        Ok(ExitStatus::Success)
    } else {
        write_help(&mut *err).context("writing help")?;
        Ok(ExitStatus::Unknown)
    }
}
