//! Standalone benchmark runner that prints the formatted report.
//!
//! Checks that `pagecount_fast` agrees with `pagecount` on the fixed pairs,
//! then times both against a baseline loop and prints ns/call and the speedup.
//! A mismatch is reported on stderr; the run always exits successfully.
//!
//! Usage:
//!   cargo run --release -p pagecount
//!   PAGECOUNT_LOOPS=100000000 cargo run --release -p pagecount
//!   HW_LOG_LEVEL=debug cargo run --release -p pagecount   # raw loop timings

use pagecount::bench;
use pagecount::config::BenchConfig;
use pagecount::pages::check_results;
use pagecount::report::{write_correctness, write_header, write_results};
use std::io::{self, Write};

fn run_report(config: &BenchConfig) -> io::Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();

    write_header(&mut out)?;

    let mismatches = check_results();
    if !write_correctness(&mut out, &mut stderr.lock(), &mismatches)? {
        log::warn!("{} of the fixed pairs disagree", mismatches.len());
    }

    let run = bench::run(config);
    write_results(&mut out, &run)?;
    out.flush()
}

fn main() {
    let log_file = hw_core::log_file_from_env();
    if let Err(e) = hw_core::initialize_logger(hw_core::log_level_from_env(), log_file.as_deref())
    {
        eprintln!("Failed to initialize logger: {e:#}. Continuing without logs.");
    }

    let config = BenchConfig::from_env_or_default();
    log::info!(
        "pagecount benchmark: {} loops, {} warm-up calls",
        config.loops,
        config.warmup
    );

    if let Err(e) = run_report(&config) {
        log::error!("Failed to write report: {e}");
    }
}
