//! samesize - Find All Files With Same File Size
//!
//! Entry point for the samesize CLI application.

use samesize::{cli::Cli, error::ExitStatus, logging::init_logging};

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_raw(std::env::args_os());
    init_logging();

    match samesize::run_app(cli) {
        Ok(status) => {
            log::debug!("Exiting with {} status", status.name());
            std::process::exit(status.as_i32());
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(ExitStatus::Failure.as_i32());
        }
    }
}
