//! # Enum-Lookup-Bench
//!
//! Micro-benchmarks answering one question: which lookup strategy is fastest
//! for a small, fixed, enum-keyed table known at compile time?

pub mod config;
pub mod error;
pub mod lookup;
pub mod registry;
pub mod utils;

pub use config::{RunConfig, SeedPolicy};
pub use error::LookupError;
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::LookupError;
    pub use crate::lookup::enum_table::code::{
        direct_index, dispatch_raw, match_dispatch, ConstMap, HashLookup, Lookup, TreeLookup,
        LINEAR_MAP,
    };
    pub use crate::lookup::enum_table::data::{Currency, Record, ENTRIES, TABLE};
    pub use crate::lookup::enum_table::input::KeyGenerator;
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
}

use registry::{AlgorithmRegistry, AlgorithmRunner};
use utils::runner::{self, GroupedResults};

/// Failure of a whole benchmark run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("algorithm '{name}' not found (available: {available})")]
    UnknownAlgorithm { name: String, available: String },

    #[error("verification failed for '{algorithm}': {reason}")]
    Verification { algorithm: String, reason: String },

    #[error("failed to export CSV to {path}")]
    Csv {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Algorithms selected by `config.algorithm` (all of them if unset).
pub fn select_algorithms<'r>(
    registry: &'r AlgorithmRegistry,
    config: &RunConfig,
) -> Result<Vec<&'r dyn AlgorithmRunner>, RunError> {
    match &config.algorithm {
        Some(name) => registry
            .find(name)
            .map(|algo| vec![algo])
            .ok_or_else(|| RunError::UnknownAlgorithm {
                name: name.clone(),
                available: registry.list_names().join(", "),
            }),
        None => Ok(registry.all().iter().map(|a| a.as_ref()).collect()),
    }
}

/// Verify each algorithm's variants against its reference.
pub fn verify_algorithms(algorithms: &[&dyn AlgorithmRunner]) -> Result<(), RunError> {
    for algo in algorithms {
        log::debug!("verifying {}", algo.name());
        algo.verify().map_err(|reason| RunError::Verification {
            algorithm: algo.name().to_string(),
            reason,
        })?;
    }
    Ok(())
}

/// Verify, measure and optionally export `algorithms`.
pub fn run_benchmarks(
    algorithms: &[&dyn AlgorithmRunner],
    config: &RunConfig,
) -> Result<GroupedResults, RunError> {
    verify_algorithms(algorithms)?;

    let seed = config.seed.resolve();
    log::info!(
        "benchmarking {} algorithm(s), sizes {:?}, seed {}",
        algorithms.len(),
        config.sample_sizes,
        seed
    );
    let grouped = runner::run_all_algorithms(algorithms, &config.sample_sizes, &config.timing, seed);

    if let Some(path) = &config.csv_path {
        runner::export_csv(path, &grouped.raw_data).map_err(|source| RunError::Csv {
            path: path.clone(),
            source,
        })?;
    }

    Ok(grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::build_registry;

    #[test]
    fn test_all_algorithms_registry_verify() {
        let registry = build_registry();
        for algo in registry.all() {
            if let Err(e) = algo.verify() {
                panic!("Algorithm '{}' failed verification: {}", algo.name(), e);
            }
        }
    }

    #[test]
    fn test_unknown_algorithm() {
        let registry = build_registry();
        let config = RunConfig {
            algorithm: Some("no_such_table".to_string()),
            ..RunConfig::default()
        };
        let err = select_algorithms(&registry, &config).err().expect("should fail");
        assert!(matches!(err, RunError::UnknownAlgorithm { .. }));
        assert!(err.to_string().contains("enum_table"));
    }

    #[test]
    fn test_small_reproducible_run() {
        let registry = build_registry();
        let config = RunConfig {
            sample_sizes: vec![16],
            timing: utils::TimingConfig {
                runs_per_variant: 2,
                warmup_iterations: 1,
                ..Default::default()
            },
            seed: SeedPolicy::Fixed(1234),
            algorithm: Some("enum_table".to_string()),
            csv_path: None,
        };

        let algorithms = select_algorithms(&registry, &config).unwrap();
        assert_eq!(algorithms.len(), 1);
        let first = run_benchmarks(&algorithms, &config).unwrap();
        let second = run_benchmarks(&algorithms, &config).unwrap();
        assert_eq!(first.seed, 1234);

        let samples = |g: &GroupedResults| -> Vec<Option<f64>> {
            g.results[0][0].iter().map(|r| r.result_sample).collect()
        };
        assert_eq!(samples(&first), samples(&second));
    }
}
