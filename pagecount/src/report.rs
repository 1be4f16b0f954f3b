//! Report module: prints the correctness check and per-implementation timings.
//!
//! The report goes to `out` (stdout in the binary); mismatch diagnostics go to
//! `err` (stderr) and never change the outcome of the run.

use crate::bench::{BenchResult, BenchRun};
use crate::pages::Mismatch;
use std::io::{self, Write};

pub const TITLE: &str = "=== pagecount benchmark ===";

pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{TITLE}")?;
    writeln!(out)
}

/// Writes the correctness section. Returns true if every pair matched.
pub fn write_correctness<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    mismatches: &[Mismatch],
) -> io::Result<bool> {
    writeln!(out, "Correctness:")?;
    // Flush so the section title lands before any stderr diagnostics.
    out.flush()?;

    for mismatch in mismatches {
        writeln!(err, "  {mismatch}")?;
    }
    if mismatches.is_empty() {
        writeln!(out, "  Correctness check passed.")?;
        writeln!(out)?;
    }
    Ok(mismatches.is_empty())
}

fn write_result_line<W: Write>(
    out: &mut W,
    label: &str,
    result: &BenchResult,
    loops: u64,
) -> io::Result<()> {
    writeln!(
        out,
        "  {label:<16}: {:6.2} ns/call  ({loops} calls, {:.4} s total)",
        result.ns_per_op,
        result.total_s()
    )
}

/// Writes the timing section, the speedup line and the sink guard.
pub fn write_results<W: Write>(out: &mut W, run: &BenchRun) -> io::Result<()> {
    writeln!(out, "Results:")?;
    write_result_line(out, "pagecount", &run.division, run.loops)?;
    write_result_line(out, "pagecount_fast", &run.fast, run.loops)?;

    match run.speedup() {
        Some(ratio) => writeln!(out, "\n  Speedup: {ratio:.2}x")?,
        None => writeln!(out, "\n  (Speedup unavailable: net timing rounded to zero.)")?,
    }

    // Printing depends on the sink, so the timed loops stay observable.
    if run.sink == 0 {
        writeln!(out, "(impossible)")?;
    }
    Ok(())
}
