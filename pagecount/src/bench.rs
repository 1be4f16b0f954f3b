//! Baseline-subtraction timing.
//!
//! Every timed loop reads the same pair, does the same accumulation into a
//! `sink`, and differs only in the page-count call. A baseline loop without
//! the call measures the loop itself; subtracting it leaves the cost of the
//! call. The sink is handed back to the caller so none of the loops can be
//! discarded as dead code.

use crate::config::BenchConfig;
use crate::pages::{pagecount, pagecount_fast, MEMORY_SIZES, N_PAIRS, PAGE_SIZES};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Net timing of one implementation, baseline already subtracted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchResult {
    pub total: Duration,
    pub ns_per_op: f64,
}

impl BenchResult {
    pub fn from_net(net: Duration, loops: u64) -> Self {
        Self {
            total: net,
            ns_per_op: net.as_secs_f64() * 1e9 / loops as f64,
        }
    }

    pub fn total_s(&self) -> f64 {
        self.total.as_secs_f64()
    }
}

/// `measured - baseline`, clamped at zero when noise puts the baseline ahead.
pub fn net_time(measured: Duration, baseline: Duration) -> Duration {
    measured.saturating_sub(baseline)
}

/// Everything one benchmark run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchRun {
    pub loops: u64,
    pub baseline: Duration,
    pub division: BenchResult,
    pub fast: BenchResult,
    /// Accumulated results of every loop; must be printed or checked.
    pub sink: u64,
}

impl BenchRun {
    /// How many times faster the shift is than the division, when both net
    /// timings are above zero.
    pub fn speedup(&self) -> Option<f64> {
        speedup(&self.division, &self.fast)
    }
}

pub fn speedup(division: &BenchResult, fast: &BenchResult) -> Option<f64> {
    (division.ns_per_op > 0.0 && fast.ns_per_op > 0.0)
        .then(|| division.ns_per_op / fast.ns_per_op)
}

/// Runs `op` over the fixed pairs `loops` times, returning the elapsed time.
pub fn time_loop<F>(loops: u64, sink: &mut u64, op: F) -> Duration
where
    F: Fn(u64, u64) -> u64,
{
    let start = Instant::now();
    for i in 0..loops {
        let pair = (i % N_PAIRS as u64) as usize;
        // Hide the constants so the loop body cannot be folded away.
        let m = black_box(MEMORY_SIZES[pair]);
        let p = black_box(PAGE_SIZES[pair]);
        *sink = sink.wrapping_add(op(m, p)).wrapping_add(m).wrapping_add(p);
    }
    start.elapsed()
}

/// Loop overhead alone: accumulates `1 + m + p`.
pub fn run_baseline(loops: u64, sink: &mut u64) -> Duration {
    time_loop(loops, sink, |_, _| 1)
}

pub fn run_pagecount(loops: u64, sink: &mut u64) -> Duration {
    time_loop(loops, sink, pagecount)
}

pub fn run_pagecount_fast(loops: u64, sink: &mut u64) -> Duration {
    time_loop(loops, sink, pagecount_fast)
}

/// A few untimed division calls to settle caches and branch predictors.
pub fn warm_up(calls: u64, sink: &mut u64) {
    for _ in 0..calls {
        *sink = sink.wrapping_add(pagecount(black_box(1 << 32), black_box(1 << 12)));
    }
}

pub fn run(config: &BenchConfig) -> BenchRun {
    let loops = config.loops;
    let mut sink = 0u64;

    warm_up(config.warmup, &mut sink);

    let baseline = run_baseline(loops, &mut sink);
    log::debug!("baseline: {baseline:?} for {loops} iterations");

    let clocks_div = run_pagecount(loops, &mut sink);
    log::debug!("pagecount: {clocks_div:?}");
    let division = BenchResult::from_net(net_time(clocks_div, baseline), loops);

    let clocks_fast = run_pagecount_fast(loops, &mut sink);
    log::debug!("pagecount_fast: {clocks_fast:?}");
    let fast = BenchResult::from_net(net_time(clocks_fast, baseline), loops);

    if clocks_div <= baseline || clocks_fast <= baseline {
        log::warn!("a timed loop ran no slower than the baseline; net time clamped to zero");
    }

    BenchRun {
        loops,
        baseline,
        division,
        fast,
        sink,
    }
}
