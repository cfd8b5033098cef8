//! Unified timing system for micro-benchmarks.
//!
//! This module provides the single timing infrastructure with:
//! - Support for both CPU cycles and wall-clock time (via features)
//! - Automatic CPU core pinning for stable measurements
//! - Randomized variant execution to avoid ordering bias
//! - Optional trimming of outlier samples

use std::hint::black_box;
use std::time::Duration;

use log::debug;

use super::bench::{shuffle, to_nanos, trim_outliers, Measurement};
pub use super::cpu_affinity::CpuPinGuard;

// ============================================================================
// Configuration
// ============================================================================

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Pin once before all measurements (minimal overhead)
    Global,
    /// Pin/unpin around each sample
    #[default]
    PerExecution,
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of warmup calls per variant before measurement (default: 10)
    pub warmup_iterations: usize,
    /// CPU pinning strategy (default: PerExecution)
    pub pin_strategy: PinStrategy,
    /// Fraction of samples dropped at each end before computing statistics
    pub trim_fraction: f64,
    /// Seed for the shuffled task schedule
    pub schedule_seed: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            pin_strategy: PinStrategy::default(),
            trim_fraction: 0.0,
            schedule_seed: 0x5eed_cafe,
        }
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    /// Unique name of the variant
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Runs one sample - returns (measurement, optional result value).
    /// Timing happens inside the closure to eliminate Fn trait overhead.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Result from measuring a single variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    /// Average measurement (as Duration for compatibility)
    pub avg_time: Duration,
    /// Precise average in nanoseconds/cycles as f64
    pub avg_nanos_f64: f64,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Number of samples the statistics were computed from
    pub samples: usize,
    /// Sample result value, compared across variants in the report
    pub result_sample: Option<f64>,
}

/// Measure multiple variants with randomized execution order.
///
/// 1. Warms up all variants
/// 2. Creates a shuffled task schedule interleaving every variant
/// 3. Measures each sample with CPU pinning
/// 4. Returns one `VariantResult` per variant, in input order
pub fn measure_variants(mut variants: Vec<Variant>, config: &TimingConfig) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    // (variant_idx, sample_idx)
    let mut tasks: Vec<(usize, usize)> = (0..variants.len())
        .flat_map(|v| (0..samples).map(move |s| (v, s)))
        .collect();
    shuffle(&mut tasks, config.schedule_seed);
    debug!(
        "measuring {} variants x {} samples ({:?} pinning)",
        variants.len(),
        samples,
        config.pin_strategy
    );

    let mut measurements: Vec<Vec<Measurement>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    for (variant_idx, _) in tasks {
        let variant = &mut variants[variant_idx];
        let _per_exec_pin =
            (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        let (elapsed_time, result) = (variant.run)();

        measurements[variant_idx].push(elapsed_time);
        result_samples[variant_idx] = result;
    }

    variants
        .into_iter()
        .enumerate()
        .map(|(idx, variant)| {
            let times = std::mem::take(&mut measurements[idx]);
            let result_sample = result_samples[idx].take();
            compute_variant_result(
                variant.name,
                variant.description,
                &times,
                config.trim_fraction,
                result_sample,
            )
        })
        .collect()
}

/// Compute statistics from raw measurements
fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    measurements: &[Measurement],
    trim_fraction: f64,
    result_sample: Option<f64>,
) -> VariantResult {
    if measurements.is_empty() {
        return VariantResult {
            name: name.to_string(),
            description: description.to_string(),
            avg_time: Duration::ZERO,
            avg_nanos_f64: 0.0,
            median_time: Duration::ZERO,
            min_time: Duration::ZERO,
            max_time: Duration::ZERO,
            std_dev: Duration::ZERO,
            samples: 0,
            result_sample: None,
        };
    }

    let mut sorted: Vec<u64> = measurements.iter().map(|m| to_nanos(*m)).collect();
    sorted.sort_unstable();
    let nanos = trim_outliers(&sorted, trim_fraction);

    let min_ns = nanos[0];
    let max_ns = nanos[nanos.len() - 1];
    let median_ns = nanos[nanos.len() / 2];

    let sum: u64 = nanos.iter().sum();
    let avg_nanos_f64 = sum as f64 / nanos.len() as f64;

    let variance: f64 = nanos
        .iter()
        .map(|&n| {
            let diff = n as f64 - avg_nanos_f64;
            diff * diff
        })
        .sum::<f64>()
        / (nanos.len() - 1).max(1) as f64;

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: Duration::from_nanos(avg_nanos_f64 as u64),
        avg_nanos_f64,
        median_time: Duration::from_nanos(median_ns),
        min_time: Duration::from_nanos(min_ns),
        max_time: Duration::from_nanos(max_ns),
        std_dev: Duration::from_nanos(variance.sqrt() as u64),
        samples: nanos.len(),
        result_sample,
    }
}
