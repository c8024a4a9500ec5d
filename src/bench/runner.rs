/*!
 * Benchmark Runner
 * Timed comparison of the two sorts over seeded random queues
 */

use super::report::{now_timestamp, BenchReport};
use crate::core::types::Value;
use crate::core::QueueResult;
use crate::queue::Queue;
use crate::sort::{quick_sort, selection_sort};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::time::Instant;

/// Queue sizes exercised by the automated suite.
pub const DEFAULT_SIZES: &[usize] = &[
    100, 500, 1000, 5000, 10_000, 20_000, 50_000, 75_000, 100_000,
];

/// Suite RNG seed. Fixed so two runs on the same machine time the same
/// data and their reports stay comparable.
pub const DEFAULT_SEED: u64 = 0x5EED_0F_42;

/// Generated values fall in `0..DEFAULT_VALUE_BOUND`.
pub const DEFAULT_VALUE_BOUND: Value = 1_000_000;

/// Directory the reports land in, relative to the working directory.
pub const DEFAULT_RESULTS_DIR: &str = "benchmark_results";

/// Measured times below this are clamped up, keeping ratios finite on
/// sizes the clock cannot resolve.
const MIN_SECS: f64 = 1e-6;

/// Configuration for a benchmark suite. Explicit value, no global state.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    pub seed: u64,
    pub value_bound: Value,
    pub results_dir: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            seed: DEFAULT_SEED,
            value_bound: DEFAULT_VALUE_BOUND,
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
        }
    }
}

/// Timing result for one queue size.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchSample {
    pub size: usize,
    pub selection_secs: f64,
    pub quick_secs: f64,
    pub ratio: f64,
}

/// Time both sorts once over the same `size` random values.
///
/// Two queues are built from one generated sequence; selection sort runs
/// on the first, quicksort on the second. Both sorted snapshots must
/// agree, which cross-checks the algorithms on every benchmark run.
///
/// # Errors
/// `OutOfMemory` if either queue cannot be built.
pub fn run_once(size: usize, value_bound: Value, rng: &mut StdRng) -> QueueResult<BenchSample> {
    let values: Vec<Value> = (0..size).map(|_| rng.gen_range(0..value_bound)).collect();

    let mut by_selection = Queue::from_values(&values)?;
    let mut by_quick = Queue::from_values(&values)?;

    let start = Instant::now();
    selection_sort(&mut by_selection);
    let selection_secs = start.elapsed().as_secs_f64().max(MIN_SECS);

    let start = Instant::now();
    quick_sort(&mut by_quick);
    let quick_secs = start.elapsed().as_secs_f64().max(MIN_SECS);

    debug_assert_eq!(
        by_selection.to_vec(),
        by_quick.to_vec(),
        "sorts disagreed on the same input"
    );

    Ok(BenchSample {
        size,
        selection_secs,
        quick_secs,
        ratio: selection_secs / quick_secs,
    })
}

/// Run the automated suite: one sample per configured size, RNG reseeded
/// per size from the config seed so every size times reproducible data.
///
/// # Errors
/// `OutOfMemory` if any queue cannot be built.
pub fn run_suite(config: &BenchConfig) -> QueueResult<BenchReport> {
    let total = config.sizes.len();
    info!("Benchmark suite over {total} sizes, seed {}", config.seed);

    let mut samples = Vec::with_capacity(total);
    for (i, &size) in config.sizes.iter().enumerate() {
        info!("Test {}/{total}: size = {size}", i + 1);
        let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
        let sample = run_once(size, config.value_bound, &mut rng)?;
        info!(
            "  selection {:.6}s, quick {:.6}s, ratio {:.2}:1",
            sample.selection_secs, sample.quick_secs, sample.ratio
        );
        samples.push(sample);
    }

    Ok(BenchReport::from_samples(now_timestamp(), &samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_once_times_both_sorts() {
        let mut rng = StdRng::seed_from_u64(7);
        let sample = run_once(200, DEFAULT_VALUE_BOUND, &mut rng).unwrap();

        assert_eq!(sample.size, 200);
        assert!(sample.selection_secs >= MIN_SECS);
        assert!(sample.quick_secs >= MIN_SECS);
        assert!(sample.ratio > 0.0);
    }

    #[test]
    fn empty_size_is_fine() {
        let mut rng = StdRng::seed_from_u64(7);
        let sample = run_once(0, DEFAULT_VALUE_BOUND, &mut rng).unwrap();
        assert_eq!(sample.size, 0);
        assert!(sample.ratio > 0.0);
    }

    #[test]
    fn suite_produces_one_sample_per_size() {
        let config = BenchConfig {
            sizes: vec![10, 50, 100],
            seed: 11,
            ..Default::default()
        };
        let report = run_suite(&config).unwrap();

        assert_eq!(report.sizes, vec![10, 50, 100]);
        assert_eq!(report.selection_sort.len(), 3);
        assert_eq!(report.quick_sort.len(), 3);
        assert_eq!(report.ratios.len(), 3);
    }

    #[test]
    fn default_config_matches_the_published_suite() {
        let config = BenchConfig::default();
        assert_eq!(config.sizes.first(), Some(&100));
        assert_eq!(config.sizes.last(), Some(&100_000));
        assert_eq!(config.value_bound, 1_000_000);
        assert_eq!(config.results_dir, PathBuf::from("benchmark_results"));
    }
}
