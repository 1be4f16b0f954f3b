//! Benchmark settings, overridable from the environment.

use anyhow::{ensure, Result};
use hw_core::parse_or;

pub const LOOPS_VAR: &str = "PAGECOUNT_LOOPS";
pub const WARMUP_VAR: &str = "PAGECOUNT_WARMUP";

pub const DEFAULT_LOOPS: u64 = 10_000_000;
pub const DEFAULT_WARMUP: u64 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Timed iterations per loop.
    pub loops: u64,
    /// Untimed division calls before the first measurement.
    pub warmup: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            loops: DEFAULT_LOOPS,
            warmup: DEFAULT_WARMUP,
        }
    }
}

impl BenchConfig {
    /// Builds a config from raw setting values, `None` meaning unset.
    pub fn from_values(loops: Option<&str>, warmup: Option<&str>) -> Result<Self> {
        let config = Self {
            loops: parse_or(LOOPS_VAR, loops, DEFAULT_LOOPS)?,
            warmup: parse_or(WARMUP_VAR, warmup, DEFAULT_WARMUP)?,
        };
        ensure!(config.loops > 0, "{LOOPS_VAR} must be greater than zero");
        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        let loops = std::env::var(LOOPS_VAR).ok();
        let warmup = std::env::var(WARMUP_VAR).ok();
        Self::from_values(loops.as_deref(), warmup.as_deref())
    }

    /// [`BenchConfig::from_env`], falling back to the defaults on a bad value.
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            log::warn!("{e:#}; using default benchmark settings");
            Self::default()
        })
    }
}
