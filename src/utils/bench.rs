//! Shared benchmark utilities.
//!
//! By default (`cpu_cycles` feature), measurements use CPU cycle counters
//! for precise micro-benchmarking. Use `--features use_time` or
//! `--no-default-features` to use wall-clock time instead.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

// ============================================================================
// Measurement abstraction: cycles or time depending on feature flags
// ============================================================================

/// Measurement value type - cycles (u64) or Duration depending on feature
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Measurement = Duration;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Instant = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Instant = std::time::Instant;

/// Read current measurement (cycles or time)
#[inline(always)]
pub fn now() -> Instant {
    #[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
    {
        crate::utils::cycles::read_cycles()
    }
    #[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
    {
        std::time::Instant::now()
    }
}

/// Measurement elapsed since `start`
#[inline(always)]
pub fn elapsed(start: Instant) -> Measurement {
    #[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
    {
        crate::utils::cycles::read_cycles().saturating_sub(start)
    }
    #[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
    {
        start.elapsed()
    }
}

/// Raw measurement as an integer (cycles, or nanoseconds)
pub fn to_nanos(m: Measurement) -> u64 {
    #[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
    {
        m
    }
    #[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
    {
        m.as_nanos() as u64
    }
}

/// Get the measurement unit name
pub const fn unit_name() -> &'static str {
    #[cfg(all(feature = "cpu_cycles", not(feature = "use_time"), target_arch = "aarch64"))]
    {
        "ticks"
    }
    #[cfg(all(
        feature = "cpu_cycles",
        not(feature = "use_time"),
        not(target_arch = "aarch64")
    ))]
    {
        "cycles"
    }
    #[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
    {
        "ns"
    }
}

/// Format a statistic for display.
///
/// Statistics are carried as `Duration` whatever the time base; in cycle
/// mode the nanosecond field holds the raw counter value.
pub fn format_measurement(value: Duration) -> String {
    #[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
    {
        format!("{} {}", value.as_nanos(), unit_name())
    }
    #[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
    {
        format!("{:?}", value)
    }
}

/// Time an expression, returning `(Measurement, value)`.
#[macro_export]
macro_rules! measure {
    ($body:expr) => {{
        let start = $crate::utils::bench::now();
        let result = $body;
        let elapsed = $crate::utils::bench::elapsed(start);
        (elapsed, result)
    }};
}

/// Fresh seed from the thread-local generator
pub fn entropy_seed() -> u64 {
    rand::random()
}

/// Deterministic Fisher-Yates shuffle
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    slice.shuffle(&mut rng);
}

/// Drop the lowest and highest `fraction` of sorted samples.
///
/// Any positive fraction cuts at least one sample from each end, rounding up,
/// and at least one sample is always kept.
pub fn trim_outliers(sorted: &[u64], fraction: f64) -> &[u64] {
    if fraction <= 0.0 || sorted.is_empty() {
        return sorted;
    }
    let max_cut = (sorted.len() - 1) / 2;
    let cut = ((sorted.len() as f64 * fraction).ceil() as usize).min(max_cut);
    &sorted[cut..sorted.len() - cut]
}
