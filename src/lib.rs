/*!
 * Queuesort Library
 * Singly-linked FIFO queue with two in-place sorts, two-line persistence,
 * and a sort-timing benchmark
 */

pub mod app;
pub mod bench;
pub mod core;
pub mod queue;
pub mod sort;
pub mod store;
pub mod trace;

// Re-exports
pub use bench::{run_once, run_suite, BenchConfig, BenchReport};
pub use self::core::{
    AppError, AppResult, QueueError, QueueResult, StoreError, StoreResult, Value,
};
pub use queue::Queue;
pub use sort::{quick_sort, selection_sort};
pub use store::{format_values, load_rows, parse_values, save_rows, SavedRows};
pub use trace::init_tracing;
