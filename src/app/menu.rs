/*!
 * Interactive Menu
 * Text menu loop, queue operations submenu, and file mode
 */

use super::input::{confirm, prompt_line, prompt_usize, prompt_value};
use crate::bench::{now_timestamp, run_once, BenchConfig, BenchReport};
use crate::core::AppResult;
use crate::queue::Queue;
use crate::sort::selection_sort;
use crate::store::{format_values, load_rows, parse_values, save_rows};
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

/// Queue contents for display, with an explicit empty marker.
fn render(queue: &Queue) -> String {
    if queue.is_empty() {
        String::from("(empty)")
    } else {
        format_values(&queue.to_vec())
    }
}

fn print_stats(queue: &Queue) {
    println!("\nQueue statistics:");
    println!("Element count: {}", queue.len());
    println!(
        "State: {}",
        if queue.is_empty() { "empty" } else { "non-empty" }
    );
    if let (Some(first), Some(last)) = (queue.front(), queue.back()) {
        println!("First element: {first}");
        println!("Last element: {last}");
        println!("Contents: {}", render(queue));
    }
}

/// Read one line of whitespace-separated values into a fresh queue.
/// `Ok(None)` means the line was empty or had a bad token; the message is
/// already printed.
fn read_queue() -> AppResult<Option<Queue>> {
    let line = prompt_line("Enter a sequence of integers separated by spaces:\n> ")?;
    let values = match parse_values(&line) {
        Ok(values) => values,
        Err(err) => {
            println!("Could not read the numbers: {err}");
            return Ok(None);
        }
    };
    if values.is_empty() {
        println!("No numbers entered.");
        return Ok(None);
    }
    Ok(Some(Queue::from_values(&values)?))
}

/// Menu item 1: build a queue and selection-sort it once.
fn sort_once() -> AppResult<()> {
    let Some(mut queue) = read_queue()? else {
        return Ok(());
    };

    println!("\nOriginal queue:\n{}", render(&queue));
    selection_sort(&mut queue);
    println!("Sorted queue (selection sort):\n{}", render(&queue));
    Ok(())
}

/// Menu item 2: time both sorts on one generated queue and save a report.
fn compare_speeds() -> AppResult<()> {
    let Some(size) = prompt_usize("Enter the test queue size (e.g. 10000): ")? else {
        println!("Invalid size.");
        return Ok(());
    };
    if size == 0 {
        println!("Invalid size.");
        return Ok(());
    }

    let config = BenchConfig::default();
    println!("Generating {size} random numbers...");
    let mut rng = StdRng::from_entropy();
    let sample = run_once(size, config.value_bound, &mut rng)?;

    println!("\nResults for a queue of {size} elements:");
    println!("Selection sort: {:.6} sec", sample.selection_secs);
    println!("Quicksort (Hoare): {:.6} sec", sample.quick_secs);
    println!(
        "Speed ratio: {:.2}:1 (quicksort is {:.2}x faster)",
        sample.ratio, sample.ratio
    );

    let report = BenchReport::from_samples(now_timestamp(), &[sample]);
    match report.save(&config.results_dir) {
        Ok(paths) => println!("\nReport saved: {}", paths.csv.display()),
        Err(err) => warn!("Could not save the benchmark report: {err}"),
    }
    Ok(())
}

/// Menu item 3: build a queue, then overwrite one element by index.
fn edit_element() -> AppResult<()> {
    let Some(mut queue) = read_queue()? else {
        return Ok(());
    };

    println!("\nCurrent queue ({} elements):\n{}", queue.len(), render(&queue));

    let prompt = format!("Enter the index to edit (0-{}): ", queue.len() - 1);
    let Some(index) = prompt_usize(&prompt)? else {
        println!("Invalid index input.");
        return Ok(());
    };
    let Some(value) = prompt_value("Enter the new value: ")? else {
        println!("Invalid value input.");
        return Ok(());
    };

    match queue.edit_at(index, value) {
        Ok(()) => println!("Element changed. New queue:\n{}", render(&queue)),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

/// Menu item 4: submenu driving a single queue directly.
fn queue_operations() -> AppResult<()> {
    let mut queue = Queue::new();

    loop {
        println!("\nQueue operations:");
        println!("1 - Push an element");
        println!("2 - Pop an element (from the head)");
        println!("3 - Print the queue");
        println!("4 - Edit an element");
        println!("5 - Clear the queue");
        println!("6 - Show statistics");
        println!("0 - Back");

        let Some(choice) = prompt_usize("> ")? else {
            println!("Invalid input, try again.");
            continue;
        };

        match choice {
            1 => {
                let Some(value) = prompt_value("Enter a value: ")? else {
                    println!("Invalid value input.");
                    continue;
                };
                queue.push(value)?;
                println!("Element {value} added.");
            }
            2 => match queue.pop() {
                Ok(value) => println!("Removed element: {value}"),
                Err(err) => println!("{err}"),
            },
            3 => println!("Queue contents:\n{}", render(&queue)),
            4 => {
                if queue.is_empty() {
                    println!("Queue is empty.");
                    continue;
                }
                let prompt = format!("Enter an index (0-{}): ", queue.len() - 1);
                let Some(index) = prompt_usize(&prompt)? else {
                    println!("Invalid index input.");
                    continue;
                };
                let Some(value) = prompt_value("Enter the new value: ")? else {
                    println!("Invalid value input.");
                    continue;
                };
                match queue.edit_at(index, value) {
                    Ok(()) => println!("Element changed."),
                    Err(err) => println!("{err}"),
                }
            }
            5 => {
                queue.clear();
                println!("Queue cleared.");
            }
            6 => print_stats(&queue),
            0 => return Ok(()),
            _ => println!("Unknown operation."),
        }
    }
}

/// File mode: show previously saved rows, read a new sequence, sort a
/// copy, display both, and persist the two rows.
pub fn file_mode(path: impl AsRef<Path>) -> AppResult<()> {
    let path = path.as_ref();

    match load_rows(path)? {
        Some(rows) if !rows.original.is_empty() => {
            println!("\nPreviously saved data from \"{}\":", path.display());
            println!("Previous entered row:\n{}", format_values(&rows.original));
            if !rows.sorted.is_empty() {
                println!("Previous sorted row:\n{}", format_values(&rows.sorted));
            }
        }
        _ => println!(
            "File \"{}\" not found or empty. A new file will be created.",
            path.display()
        ),
    }

    let Some(queue) = read_queue()? else {
        return Ok(());
    };

    println!("\nQueue built:\n{}", render(&queue));

    let mut sorted = queue.copy()?;
    println!("\nSorting the queue with selection sort...");
    selection_sort(&mut sorted);

    println!("\nOriginal queue:\n{}", render(&queue));
    println!("Sorted queue:\n{}", render(&sorted));

    save_rows(path, &queue.to_vec(), &sorted.to_vec())?;
    println!("Data saved to \"{}\".", path.display());
    Ok(())
}

/// Run the interactive menu until the user exits.
pub fn run_menu() -> AppResult<()> {
    println!("Queue and sorting workbench");
    println!("{}", "=".repeat(45));

    loop {
        println!("\nMenu:");
        println!("1 - Build a queue and sort it (selection sort)");
        println!("2 - Compare sorting speeds");
        println!("3 - Edit a queue element");
        println!("4 - Basic queue operations");
        println!("5 - File mode");
        println!("0 - Exit");

        let Some(choice) = prompt_usize("> ")? else {
            println!("Invalid input, try again.");
            continue;
        };

        match choice {
            1 => sort_once()?,
            2 => compare_speeds()?,
            3 => edit_element()?,
            4 => queue_operations()?,
            5 => {
                let filename = prompt_line("Enter the file name: ")?;
                if filename.is_empty() {
                    println!("The file name cannot be empty.");
                } else {
                    file_mode(&filename)?;
                }
            }
            0 => {
                println!("Exiting.");
                return Ok(());
            }
            _ => println!("Unknown menu item."),
        }

        if !confirm("\nBack to the menu? (y/n): ")? {
            return Ok(());
        }
    }
}
