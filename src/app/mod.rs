/*!
 * App Module
 * Argument dispatch and the interactive front end
 */

pub mod input;
pub mod menu;

use crate::bench::{run_suite, BenchConfig};
use crate::core::{AppError, AppResult};
use log::warn;

const USAGE: &str = "usage: queuesort [--file <path> | --benchmark-auto]";

/// Run the automated benchmark suite with the default configuration,
/// save the reports, and print the summary table.
fn benchmark_auto() -> AppResult<()> {
    println!("Automated sorting benchmark");
    println!("{}", "=".repeat(48));

    let config = BenchConfig::default();
    let report = run_suite(&config)?;
    print!("{}", report.summary());

    match report.save(&config.results_dir) {
        Ok(paths) => {
            println!("\nBenchmark finished.");
            println!("CSV report: {}", paths.csv.display());
            println!("JSON report: {}", paths.json.display());
        }
        Err(err) => warn!("Could not save the benchmark report: {err}"),
    }
    Ok(())
}

/// Dispatch on the command line: `--file <path>` runs file mode once,
/// `--benchmark-auto` runs the suite, no arguments opens the menu.
///
/// # Errors
/// `Usage` for unrecognized arguments; otherwise whatever the selected
/// mode returns.
pub fn run(args: &[String]) -> AppResult<()> {
    match args {
        [] => menu::run_menu(),
        [flag, path] if flag == "--file" => menu::file_mode(path),
        [flag] if flag == "--benchmark-auto" => benchmark_auto(),
        _ => {
            eprintln!("{USAGE}");
            Err(AppError::Usage(args.join(" ")))
        }
    }
}
