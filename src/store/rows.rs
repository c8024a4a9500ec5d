/*!
 * Saved Rows
 * Two-line persistence file: original row, then sorted row
 */

use super::parse::{format_values, parse_values};
use crate::core::types::Value;
use crate::core::{StoreError, StoreResult};
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// The two rows a session persists: the values as entered and the values
/// after sorting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SavedRows {
    pub original: Vec<Value>,
    pub sorted: Vec<Value>,
}

/// Load previously saved rows.
///
/// A missing file is `Ok(None)`: first runs are expected. Line 1 parses
/// to `original`; line 2 is optional and parses to `sorted`, so a
/// one-line file loads with an empty sorted row.
///
/// # Errors
/// `Io` for filesystem failures other than a missing file, `Parse` if
/// either line holds a bad token.
pub fn load_rows(path: impl AsRef<Path>) -> StoreResult<Option<SavedRows>> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("No saved rows at {}", path.display());
            return Ok(None);
        }
        Err(err) => return Err(StoreError::io(format!("read {}", path.display()), &err)),
    };

    let mut lines = text.lines();
    let original = parse_values(lines.next().unwrap_or(""))?;
    let sorted = parse_values(lines.next().unwrap_or(""))?;

    Ok(Some(SavedRows { original, sorted }))
}

/// Overwrite the file with exactly two `\n`-terminated lines: `original`
/// first, `sorted` second.
///
/// # Errors
/// `Io` if the file cannot be written.
pub fn save_rows(path: impl AsRef<Path>, original: &[Value], sorted: &[Value]) -> StoreResult<()> {
    let path = path.as_ref();
    let payload = format!("{}\n{}\n", format_values(original), format_values(sorted));
    fs::write(path, payload)
        .map_err(|err| StoreError::io(format!("write {}", path.display()), &err))?;

    info!(
        "Saved {} original and {} sorted values to {}",
        original.len(),
        sorted.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.txt");

        save_rows(&path, &[5, 1, 9], &[1, 5, 9]).unwrap();
        let rows = load_rows(&path).unwrap().unwrap();

        assert_eq!(rows.original, vec![5, 1, 9]);
        assert_eq!(rows.sorted, vec![1, 5, 9]);
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let rows = load_rows(dir.path().join("absent.txt")).unwrap();
        assert_eq!(rows, None);
    }

    #[test]
    fn one_line_file_has_empty_sorted_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.txt");
        fs::write(&path, "3 1 2\n").unwrap();

        let rows = load_rows(&path).unwrap().unwrap();
        assert_eq!(rows.original, vec![3, 1, 2]);
        assert_eq!(rows.sorted, Vec::<Value>::new());
    }

    #[test]
    fn file_layout_is_two_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.txt");

        save_rows(&path, &[7, 2], &[2, 7]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "7 2\n2 7\n");
    }

    #[test]
    fn empty_rows_save_as_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.txt");

        save_rows(&path, &[], &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "\n\n");

        let rows = load_rows(&path).unwrap().unwrap();
        assert_eq!(rows, SavedRows::default());
    }

    #[test]
    fn corrupt_line_reports_the_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.txt");
        fs::write(&path, "1 2 three\n").unwrap();

        let err = load_rows(&path).unwrap_err();
        assert_eq!(err, StoreError::Parse { token: "three".into() });
    }
}
