use crate::cases::Case;
use hw_core::string_operations::{missing_letters, pangram};
use std::io::{self, Write};

const SEPARATOR: &str = "-----------------------";

/// Result of running one [`Case`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub name: &'static str,
    pub expected: bool,
    pub actual: bool,
    /// Letters absent from the phrase; empty for a pangram.
    pub missing: String,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// Outcomes of a whole run, in case order.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub outcomes: Vec<Outcome>,
}

impl Summary {
    pub fn tests(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed()).count()
    }

    pub fn all_passed(&self) -> bool {
        self.failures() == 0
    }

    /// Failure count as a process exit status, saturating at 255.
    pub fn exit_code(&self) -> u8 {
        u8::try_from(self.failures()).unwrap_or(u8::MAX)
    }
}

pub fn run_case(case: &Case) -> Outcome {
    let actual = pangram(case.phrase);
    log::debug!("{}: {:?} -> {}", case.name, case.phrase, actual);
    Outcome {
        name: case.name,
        expected: case.expected,
        actual,
        missing: missing_letters(case.phrase),
    }
}

pub fn run_all(cases: &[Case]) -> Summary {
    Summary {
        outcomes: cases.iter().map(run_case).collect(),
    }
}

fn verdict(value: bool) -> &'static str {
    if value { "TRUE" } else { "FALSE" }
}

/// Writes one line per outcome, the separator, the tally and `OK`/`FAIL`.
pub fn write_summary<W: Write>(w: &mut W, summary: &Summary) -> io::Result<()> {
    for outcome in &summary.outcomes {
        if outcome.passed() {
            writeln!(w, "{}:PASS", outcome.name)?;
            continue;
        }
        write!(
            w,
            "{}:FAIL: Expected {} Was {}",
            outcome.name,
            verdict(outcome.expected),
            verdict(outcome.actual)
        )?;
        if !outcome.missing.is_empty() {
            write!(w, " (missing: {})", outcome.missing)?;
        }
        writeln!(w)?;
    }

    writeln!(w, "{SEPARATOR}")?;
    writeln!(
        w,
        "{} Tests {} Failures 0 Ignored",
        summary.tests(),
        summary.failures()
    )?;
    writeln!(w, "{}", if summary.all_passed() { "OK" } else { "FAIL" })
}
