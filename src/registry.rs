//! Algorithm registry for dynamic algorithm discovery and execution.
//!
//! Each benchmarked table registers an [`AlgorithmRunner`] that hands the
//! timing harness one closure per lookup strategy.

use crate::utils::timer::{Variant, VariantResult};

/// Result from running a variant benchmark (alias for VariantResult)
pub type BenchmarkResult = VariantResult;

/// A closure that runs one timed sample of a variant
pub type VariantClosure<'a> = Variant<'a>;

/// Trait that all benchmarked tables must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "enum_table")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "lookup")
    fn category(&self) -> &'static str;

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Get closures for each variant, ready to be measured.
    ///
    /// Setup (building lookup structures) happens here, outside the timed
    /// region. Each closure performs `size` lookups per call and times them
    /// itself; every closure draws its inputs from the same `seed`.
    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<VariantClosure<'a>>;

    /// Verify correctness of all variants against the reference
    fn verify(&self) -> Result<(), String>;
}

/// Global registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Register an algorithm
    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    /// Get all registered algorithms
    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    /// List algorithm names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    /// Distinct categories in registration order
    pub fn categories(&self) -> Vec<&'static str> {
        let mut categories: Vec<&'static str> = Vec::new();
        for algo in &self.algorithms {
            if !categories.contains(&algo.category()) {
                categories.push(algo.category());
            }
        }
        categories
    }

    /// List algorithms by category
    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::lookup::enum_table::EnumTableRunner);

    registry
}
