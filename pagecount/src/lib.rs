//! Page-count microbenchmark
//!
//! Operating systems hand out memory in fixed-size pages, so the number of
//! pages is `memory_size / page_size`. Page sizes are always powers of two,
//! which lets the division become a right shift by `log2(page_size)`.
//!
//! - [`pages`]: the division and shift implementations plus the fixed inputs
//! - [`bench`]: baseline-subtraction timing of both implementations
//! - [`report`]: the fixed-format text report
//! - [`config`]: loop counts from the environment
//!
//! Run the report: `cargo run --release -p pagecount`
//! Run criterion benchmarks: `cargo bench -p pagecount`

pub mod bench;
pub mod config;
pub mod pages;
pub mod report;
