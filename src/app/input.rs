/*!
 * Console Input
 * Line-based prompt helpers for the interactive menu
 */

use crate::core::types::Value;
use crate::core::{AppError, AppResult};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Print `prompt`, flush, and read one trimmed line from stdin.
///
/// # Errors
/// `Io` if stdin is closed (end of input) or reading fails; the
/// interactive loops treat that as a signal to stop rather than re-prompt.
pub fn prompt_line(prompt: &str) -> AppResult<String> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::from)?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(AppError::Io("end of input".into()));
    }
    Ok(line.trim().to_string())
}

/// Prompt for a value of type `T`. `Ok(None)` means the line did not
/// parse; callers re-prompt on that instead of bailing out.
fn prompt_parsed<T: FromStr>(prompt: &str) -> AppResult<Option<T>> {
    Ok(prompt_line(prompt)?.parse().ok())
}

/// Prompt for a menu choice or index.
pub fn prompt_usize(prompt: &str) -> AppResult<Option<usize>> {
    prompt_parsed(prompt)
}

/// Prompt for a queue element.
pub fn prompt_value(prompt: &str) -> AppResult<Option<Value>> {
    prompt_parsed(prompt)
}

/// Yes/no confirmation; anything but `y`/`Y` counts as no.
pub fn confirm(prompt: &str) -> AppResult<bool> {
    let answer = prompt_line(prompt)?;
    Ok(answer.eq_ignore_ascii_case("y"))
}
