/*!
 * Store Module
 * Text parsing and two-line persistence for value rows
 */

pub mod parse;
pub mod rows;

// Re-export public API
pub use parse::{format_values, parse_values};
pub use rows::{load_rows, save_rows, SavedRows};
