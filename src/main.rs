/*!
 * Queuesort - Main Entry Point
 *
 * Interactive and batch tool for a linked FIFO queue of integers:
 * - Selection sort and list quicksort
 * - Sort timing comparison with CSV/JSON reports
 * - Two-line text file persistence
 */

use queuesort::{app, init_tracing};
use tracing::debug;

fn main() -> miette::Result<()> {
    // Initialize structured tracing before anything else logs
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    debug!(args = ?args, "queuesort starting");

    app::run(&args)?;
    Ok(())
}
