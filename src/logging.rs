//! Logging infrastructure for samesize.
//!
//! All diagnostics (folder progress, protected folders, ignored subfolders,
//! paths that are neither files nor folders) go through the `log` facade and
//! are written to standard error by the `env_logger` backend. Standard output
//! is reserved for the size report.
//!
//! The level filter is determined by (in priority order):
//!
//! 1. `RUST_LOG` environment variable (if set)
//! 2. Default: info level
//!
//! # Format
//!
//! Info records print as the bare message, so the diagnostic stream reads as
//! plain text (`Scanning folder: /photos`). Every other level carries a short
//! prefix (`warning: Protected folder: /root`). Debug builds add the module
//! path to debug and trace records.
//!
//! # Example
//!
//! ```rust,no_run
//! use samesize::logging::init_logging;
//!
//! init_logging();
//! log::info!("Scanning folder: {}", "/photos");
//! ```

use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use std::env;
use std::io::Write;

/// Level used when `RUST_LOG` is not set.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Initialize the logging subsystem.
///
/// This function should be called once at the start of the application,
/// before any logging calls are made.
///
/// # Panics
///
/// Panics if called more than once, as `env_logger` can only be initialized
/// once per process.
pub fn init_logging() {
    let use_env = env::var("RUST_LOG").is_ok();

    let mut builder = Builder::new();
    builder.target(Target::Stderr);

    if use_env {
        builder.parse_default_env();
    } else {
        builder.filter_level(DEFAULT_LEVEL);
    }

    configure_format(&mut builder);
    builder.init();

    if use_env {
        log::debug!(
            "Logging initialized from RUST_LOG environment variable: {:?}",
            env::var("RUST_LOG").ok()
        );
    } else {
        log::debug!("Logging initialized at level: {:?}", DEFAULT_LEVEL);
    }
}

/// Prefix printed in front of a record of the given level.
///
/// Info records have none: they are the user-facing progress notices.
fn level_prefix(level: Level) -> Option<&'static str> {
    match level {
        Level::Error => Some("error"),
        Level::Warn => Some("warning"),
        Level::Info => None,
        Level::Debug => Some("debug"),
        Level::Trace => Some("trace"),
    }
}

/// Configure the record format.
///
/// - Debug builds: debug and trace records include the module path
/// - Release builds: prefix and message only
fn configure_format(builder: &mut Builder) {
    builder.format(|buf, record| {
        let level = record.level();
        let Some(prefix) = level_prefix(level) else {
            return writeln!(buf, "{}", record.args());
        };
        let level_style = buf.default_level_style(level);

        if cfg!(debug_assertions) && level >= Level::Debug {
            writeln!(
                buf,
                "{level_style}{}{level_style:#} [{}] {}",
                prefix,
                record.module_path().unwrap_or("unknown"),
                record.args()
            )
        } else {
            writeln!(buf, "{level_style}{}:{level_style:#} {}", prefix, record.args())
        }
    });
}
