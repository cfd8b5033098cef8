//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use terminal_size::{terminal_size, Width};

use crate::lookup::enum_table::code::BASELINE;
use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::runner::GroupedResults;

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

fn is_c_variant(name: &str) -> bool {
    name.starts_with("c-") || name.starts_with("c_")
}

/// Sorting priority for a variant: baseline first, then Rust variants in
/// registration order, then C variants.
fn variant_sort_key(result: &BenchmarkResult) -> u8 {
    if result.name == BASELINE {
        0
    } else if is_c_variant(&result.name) {
        2
    } else {
        1
    }
}

/// Sort variants: baseline first, then grouped by language (Rust, C)
pub fn sort_variants(results: &mut [BenchmarkResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let variants_str = algo.available_variants().join(", ");
    let name_line = format!("Algorithm: {}", algo.name());
    let cat_line = format!("Category:  {}", algo.category());
    let desc_line = algo.description();
    let var_line = format!("Variants: {}", variants_str);

    let content_width = [name_line.len(), cat_line.len(), desc_line.len(), var_line.len()]
        .iter()
        .cloned()
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for line in [name_line.as_str(), cat_line.as_str(), desc_line] {
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&var_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Run count for the table header, with the kept count when trimming cut any.
fn sample_note(results: &[BenchmarkResult], runs: usize, filtered: bool) -> String {
    let kept = results.iter().map(|r| r.samples).min().unwrap_or(runs);
    if filtered && kept < runs {
        format!("{} runs, filtered to {}", runs, kept)
    } else {
        format!("{} runs", runs)
    }
}

/// Print results table for a single size.
///
/// Speedup and relative error are computed against the first row.
pub fn print_results_table(results: &[BenchmarkResult], size: usize, runs: usize, filtered: bool) {
    if results.is_empty() {
        return;
    }

    let term_width = get_term_width();
    let fixed_width = 72;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 64 + 6;

    let baseline_time = results.first().map(|r| r.avg_nanos_f64).unwrap_or(1.0);
    let baseline_result = results.first().and_then(|r| r.result_sample);

    println!(
        "  Lookups per sample: {} ({})",
        size,
        sample_note(results, runs, filtered)
    );
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let speedup = if result.avg_nanos_f64 > 0.0 {
            baseline_time / result.avg_nanos_f64
        } else {
            0.0
        };

        let std_dev_ns = result.std_dev.as_nanos() as f64;
        let cv = if result.avg_nanos_f64 > 0.0 {
            std_dev_ns / result.avg_nanos_f64
        } else {
            0.0
        };

        let relative_error = match (result.result_sample, baseline_result) {
            (Some(res), Some(base)) => {
                let diff = (res - base).abs();
                if base.abs() > 1e-9 {
                    diff / base.abs()
                } else {
                    diff
                }
            }
            _ => 0.0,
        };

        let display_name = match (is_c_variant(&result.name), crate::utils::C_COMPILER_NAME) {
            (true, Some(c)) => format!("{} ({})", result.name, c),
            _ => result.name.clone(),
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
            truncate(&display_name, variant_col_width),
            crate::utils::bench::format_measurement(result.avg_time),
            crate::utils::bench::format_measurement(result.min_time),
            crate::utils::bench::format_measurement(result.max_time),
            speedup,
            cv * 100.0,
            relative_error,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Enum Lookup Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    for category in registry.categories() {
        println!();
        println!("  [{}]", category);
        for algo in registry.by_category(category) {
            println!("  {:<20} - {}", algo.name(), algo.description());
            println!("  {:<20} variants: {}", "", algo.available_variants().join(", "));
        }
    }
}

/// Display results grouped by algorithm and size
pub fn print_grouped_results(
    algorithms: &[&dyn AlgorithmRunner],
    sample_sizes: &[usize],
    grouped: &GroupedResults,
    runs: usize,
    filtered: bool,
) {
    for (algo_idx, algo) in algorithms.iter().enumerate() {
        print_algo_info_box(*algo);

        for (size_idx, &sample_size) in sample_sizes.iter().enumerate() {
            let mut variant_results = grouped.results[algo_idx][size_idx].clone();
            sort_variants(&mut variant_results);
            print_results_table(&variant_results, sample_size, runs, filtered);
        }
    }

    println!("  Seed: {} (pass --seed {} to replay these keys)", grouped.seed, grouped.seed);
    println!(
        "  Unit: {}. Speedup is relative to '{}'.",
        crate::utils::bench::unit_name(),
        BASELINE
    );
}
