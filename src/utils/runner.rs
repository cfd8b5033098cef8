//! Benchmark execution across algorithms and CSV export.

use std::io::Write;
use std::path::Path;

use log::{debug, info};

use crate::registry::{AlgorithmRunner, BenchmarkResult};
use crate::utils::timer::{measure_variants, TimingConfig};

/// Raw timing data for a single variant (used for CSV export)
#[derive(Clone, Debug)]
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_nanos: u64,
    pub median_nanos: u64,
    pub result_sample: Option<f64>,
}

/// Results of a full run, indexed `[algorithm][size]`
pub struct GroupedResults {
    pub results: Vec<Vec<Vec<BenchmarkResult>>>,
    pub raw_data: Vec<RawTimingData>,
    /// Seed the key sequences were drawn from
    pub seed: u64,
}

/// Run every algorithm at every size.
///
/// Within one (algorithm, size) cell the variants run interleaved in a
/// shuffled order; the schedule seed is derived from `seed`.
pub fn run_all_algorithms(
    algorithms: &[&dyn AlgorithmRunner],
    sample_sizes: &[usize],
    timing: &TimingConfig,
    seed: u64,
) -> GroupedResults {
    let mut results = Vec::with_capacity(algorithms.len());
    let mut raw_data = Vec::new();

    for algo in algorithms {
        let mut per_size = Vec::with_capacity(sample_sizes.len());

        for (size_idx, &size) in sample_sizes.iter().enumerate() {
            debug!("running {} at size {}", algo.name(), size);

            let config = TimingConfig {
                schedule_seed: seed.wrapping_add(size_idx as u64),
                ..timing.clone()
            };
            let variant_results = measure_variants(algo.get_variant_closures(size, seed), &config);

            raw_data.extend(variant_results.iter().map(|r| RawTimingData {
                algo_name: algo.name().to_string(),
                variant_name: r.name.clone(),
                input_size: size,
                avg_nanos: r.avg_time.as_nanos() as u64,
                median_nanos: r.median_time.as_nanos() as u64,
                result_sample: r.result_sample,
            }));
            per_size.push(variant_results);
        }

        results.push(per_size);
    }

    GroupedResults {
        results,
        raw_data,
        seed,
    }
}

/// Export timing data to CSV file
pub fn export_csv(path: impl AsRef<Path>, data: &[RawTimingData]) -> std::io::Result<()> {
    let path = path.as_ref();
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_csv(&mut file, data)?;
    file.flush()?;
    info!("exported {} rows to {}", data.len(), path.display());
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, data: &[RawTimingData]) -> std::io::Result<()> {
    writeln!(
        out,
        "algorithm,variant,compiler,input_size,avg_{unit},median_{unit},result",
        unit = crate::utils::bench::unit_name()
    )?;

    for entry in data {
        let compiler = if entry.variant_name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            out,
            "{},{},{},{},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            compiler,
            entry.input_size,
            entry.avg_nanos,
            entry.median_nanos,
            entry.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    Ok(())
}
