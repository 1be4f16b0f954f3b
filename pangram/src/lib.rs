//! Pangram test harness
//!
//! Runs a fixed table of pangram cases against `hw_core::string_operations::pangram`
//! and prints one `name:PASS` / `name:FAIL` line per case followed by a tally,
//! the way a C unit-test runner would. The process exit status is the number
//! of failures.
//!
//! Run: `cargo run -p pangram`

pub mod cases;
pub mod runner;
