//! CLI for running the lookup benchmarks.
//!
//! Usage:
//!   enum-lookup                      # Run all algorithms
//!   enum-lookup --list               # List available algorithms
//!   enum-lookup enum_table --seed 7  # Reproducible run of one algorithm
//!   RUST_LOG=debug enum-lookup       # Show setup and scheduling details

use anyhow::Result;
use clap::{Parser, ValueEnum};

use enum_lookup_bench::registry::build_registry;
use enum_lookup_bench::utils::{PinStrategy, TimingConfig};
use enum_lookup_bench::{run_benchmarks, select_algorithms, tui, RunConfig, SeedPolicy};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Pin {
    /// Pin once for the whole run
    Global,
    /// Pin around every sample
    PerExecution,
}

impl From<Pin> for PinStrategy {
    fn from(pin: Pin) -> Self {
        match pin {
            Pin::Global => PinStrategy::Global,
            Pin::PerExecution => PinStrategy::PerExecution,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "enum-lookup", version, about = "Compare lookup strategies for small enum-keyed tables")]
struct Cli {
    /// Name of a specific algorithm to run (omit for all)
    algorithm: Option<String>,

    /// List all available algorithms
    #[arg(short, long)]
    list: bool,

    /// Comma-separated numbers of lookups per timed sample
    #[arg(long, value_delimiter = ',', default_values_t = [64, 256, 1024, 4096, 16384])]
    sizes: Vec<usize>,

    /// Number of measurement runs per variant
    #[arg(short, long, default_value_t = 30)]
    runs: usize,

    /// Warmup calls per variant before measuring
    #[arg(long, default_value_t = 10)]
    warmup: usize,

    /// Random seed for reproducible key sequences (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Export raw timings to CSV
    #[arg(long)]
    csv: Option<String>,

    /// Trim 1% extremes from measurements
    #[arg(short, long)]
    filter: bool,

    /// CPU pinning strategy
    #[arg(long, value_enum, default_value_t = Pin::PerExecution)]
    pin: Pin,

    /// Only verify that every variant returns the table's records
    #[arg(long)]
    verify: bool,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            sample_sizes: self.sizes.clone(),
            timing: TimingConfig {
                runs_per_variant: self.runs,
                warmup_iterations: self.warmup,
                pin_strategy: self.pin.into(),
                trim_fraction: if self.filter { 0.01 } else { 0.0 },
                ..TimingConfig::default()
            },
            seed: SeedPolicy::from(self.seed),
            csv_path: self.csv.clone(),
            algorithm: self.algorithm.clone(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let registry = build_registry();

    if cli.list {
        tui::print_available_algorithms(&registry);
        return Ok(());
    }

    let config = cli.run_config();

    if cli.verify {
        let algorithms = select_algorithms(&registry, &config)?;
        enum_lookup_bench::verify_algorithms(&algorithms)?;
        println!("All variants verified for {} algorithm(s).", algorithms.len());
        return Ok(());
    }

    tui::print_header();

    let algorithms = select_algorithms(&registry, &config)?;
    let grouped = run_benchmarks(&algorithms, &config)?;

    if let Some(path) = &config.csv_path {
        println!("  Raw data exported to: {}", path);
        println!();
    }

    tui::print_grouped_results(
        &algorithms,
        &config.sample_sizes,
        &grouped,
        config.timing.runs_per_variant,
        cli.filter,
    );

    Ok(())
}
