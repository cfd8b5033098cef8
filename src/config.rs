//! Run configuration shared by the CLI and the library runner.

use log::debug;

use crate::utils::bench::entropy_seed;
use crate::utils::timer::TimingConfig;

/// Where the random key sequence comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Reproducible: the same keys are drawn on every run
    Fixed(u64),
    /// Fresh seed from OS entropy, printed so the run can be replayed
    #[default]
    Entropy,
}

impl SeedPolicy {
    /// Concrete seed for this run.
    pub fn resolve(self) -> u64 {
        let seed = match self {
            SeedPolicy::Fixed(seed) => seed,
            SeedPolicy::Entropy => entropy_seed(),
        };
        debug!("seed policy {:?} resolved to {}", self, seed);
        seed
    }
}

impl From<Option<u64>> for SeedPolicy {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(SeedPolicy::Entropy, SeedPolicy::Fixed)
    }
}

/// Everything a benchmark run needs.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Lookups performed per timed sample
    pub sample_sizes: Vec<usize>,
    pub timing: TimingConfig,
    pub seed: SeedPolicy,
    pub csv_path: Option<String>,
    /// Only run the algorithm with this name
    pub algorithm: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sample_sizes: vec![64, 256, 1024, 4096, 16384],
            timing: TimingConfig::default(),
            seed: SeedPolicy::default(),
            csv_path: None,
            algorithm: None,
        }
    }
}
