//! Page-count implementations and the fixed benchmark inputs.

use anyhow::{ensure, Result};
use rand::Rng;
use std::fmt;

pub const N_PAIRS: usize = 3;

/// Memory sizes of the three benchmark pairs: 4 GiB, 1 TiB, 4 PiB.
pub const MEMORY_SIZES: [u64; N_PAIRS] = [1 << 32, 1 << 40, 1 << 52];
/// Page sizes of the three benchmark pairs: 4 KiB, 64 KiB, 4 GiB.
pub const PAGE_SIZES: [u64; N_PAIRS] = [1 << 12, 1 << 16, 1 << 32];

/// Number of pages in `memory_size`, by integer division.
///
/// # Panics
///
/// Panics if `page_size` is zero.
#[inline]
pub fn pagecount(memory_size: u64, page_size: u64) -> u64 {
    memory_size / page_size
}

/// Same result as [`pagecount`] for a power-of-two `page_size`, computed as
/// `memory_size >> log2(page_size)`.
///
/// log2 of a power of two is its count of trailing zero bits, a single
/// instruction on current hardware. `page_size` must be a non-zero power of two.
#[inline]
pub fn pagecount_fast(memory_size: u64, page_size: u64) -> u64 {
    debug_assert!(
        page_size.is_power_of_two(),
        "page size {page_size} is not a power of two"
    );
    memory_size >> page_size.trailing_zeros()
}

/// Page count with the caller supplying `log2(page_size)` directly.
#[inline]
pub fn pagecount_shift(memory_size: u64, shift: u32) -> u64 {
    memory_size >> shift
}

/// A page size known to be a non-zero power of two, with its shift precomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize {
    bytes: u64,
    shift: u32,
}

impl PageSize {
    /// The common 4 KiB page.
    pub const STANDARD: PageSize = PageSize {
        bytes: 1 << 12,
        shift: 12,
    };

    /// # Errors
    ///
    /// Returns an error if `bytes` is zero or not a power of two.
    pub fn new(bytes: u64) -> Result<Self> {
        ensure!(
            bytes.is_power_of_two(),
            "page size {bytes} is not a non-zero power of two"
        );
        Ok(Self {
            bytes,
            shift: bytes.trailing_zeros(),
        })
    }

    pub fn bytes(self) -> u64 {
        self.bytes
    }

    /// `log2` of the page size.
    pub fn shift(self) -> u32 {
        self.shift
    }

    /// Pages in `memory_size`, rounding down for a partial trailing page.
    #[inline]
    pub fn pages_in(self, memory_size: u64) -> u64 {
        pagecount_shift(memory_size, self.shift)
    }

    /// Like [`PageSize::pages_in`], but rejects a `memory_size` that is not a
    /// whole number of pages.
    pub fn checked_pages_in(self, memory_size: u64) -> Result<u64> {
        ensure!(
            (memory_size & (self.bytes - 1)) == 0,
            "memory size {memory_size} is not a multiple of page size {}",
            self.bytes
        );
        Ok(self.pages_in(memory_size))
    }
}

impl TryFrom<u64> for PageSize {
    type Error = anyhow::Error;

    fn try_from(bytes: u64) -> Result<Self> {
        PageSize::new(bytes)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes (2^{})", self.bytes, self.shift)
    }
}

/// A benchmark pair on which an implementation disagreed with [`pagecount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub pair: usize,
    pub expected: u64,
    pub got: u64,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MISMATCH pair {}: expected {}, got {}",
            self.pair, self.expected, self.got
        )
    }
}

/// Compares `implementation` against [`pagecount`] on the fixed pairs.
pub fn check_implementation<F>(implementation: F) -> Vec<Mismatch>
where
    F: Fn(u64, u64) -> u64,
{
    MEMORY_SIZES
        .iter()
        .zip(PAGE_SIZES.iter())
        .enumerate()
        .filter_map(|(pair, (&m, &p))| {
            let expected = pagecount(m, p);
            let got = implementation(m, p);
            (expected != got).then_some(Mismatch {
                pair,
                expected,
                got,
            })
        })
        .collect()
}

/// [`check_implementation`] for [`pagecount_fast`].
pub fn check_results() -> Vec<Mismatch> {
    check_implementation(pagecount_fast)
}

/// Random `(memory_size, page_size)` pairs with a power-of-two page size that
/// divides the memory size exactly.
pub fn generate_pairs<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<(u64, u64)> {
    (0..count)
        .map(|_| {
            let shift = rng.gen_range(0..u64::BITS);
            let pages = rng.gen_range(1..=(u64::MAX >> shift));
            (pages << shift, 1u64 << shift)
        })
        .collect()
}
