/*!
 * Bench Module
 * Sort timing comparison and report generation
 */

pub mod report;
pub mod runner;

// Re-export public API
pub use report::{now_timestamp, BenchReport, SavedPaths};
pub use runner::{run_once, run_suite, BenchConfig, BenchSample};
