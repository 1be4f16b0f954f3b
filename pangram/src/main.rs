//! Runs the fixed pangram cases and exits with the number of failures.
//!
//! Usage:
//!   cargo run -p pangram
//!   HW_LOG_LEVEL=debug cargo run -p pangram   # per-case trace on stderr

use pangram::cases::CASES;
use pangram::runner::{run_all, write_summary};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let log_file = hw_core::log_file_from_env();
    if let Err(e) = hw_core::initialize_logger(hw_core::log_level_from_env(), log_file.as_deref())
    {
        eprintln!("Failed to initialize logger: {e:#}. Continuing without logs.");
    }

    let summary = run_all(CASES);
    log::info!(
        "{} pangram cases, {} failures",
        summary.tests(),
        summary.failures()
    );

    let mut out = io::stdout().lock();
    if let Err(e) = write_summary(&mut out, &summary).and_then(|()| out.flush()) {
        log::error!("Failed to write results: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::from(summary.exit_code())
}
