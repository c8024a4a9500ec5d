/*!
 * Number Parsing
 * Whitespace-separated integer rows as text
 */

use crate::core::types::Value;
use crate::core::{StoreError, StoreResult};

/// Parse a whitespace-separated row of integers.
///
/// Splitting follows ASCII whitespace, so tabs and repeated spaces are
/// harmless separators and the empty string parses to an empty row.
///
/// # Errors
/// `Parse` naming the first token that is not a decimal integer. A bad
/// token is reported, never coerced to a value.
pub fn parse_values(text: &str) -> StoreResult<Vec<Value>> {
    text.split_ascii_whitespace()
        .map(|token| {
            token.parse::<Value>().map_err(|_| StoreError::Parse {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Render a row of integers separated by single spaces. An empty slice
/// renders as the empty string.
pub fn format_values(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
