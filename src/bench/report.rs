/*!
 * Benchmark Reports
 * CSV/JSON report rendering and the timestamped results directory
 */

use super::runner::BenchSample;
use crate::core::{StoreError, StoreResult};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const TIMESTAMP_FORMAT: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Current local time as `YYYY-MM-DD HH:MM:SS`, falling back to UTC when
/// the local offset cannot be determined.
pub fn now_timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(&TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| String::from("unknown"))
}

/// Timestamps contain `:` and a space; neither belongs in a file name.
fn sanitize_for_filename(timestamp: &str) -> String {
    timestamp.replace(':', "-").replace(' ', "_")
}

/// Where `BenchReport::save` put its three files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
    pub pointer: PathBuf,
}

/// One benchmark run over a set of queue sizes.
///
/// Field names are the JSON schema consumed by the plotting tooling:
/// parallel arrays indexed by size, times in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchReport {
    pub timestamp: String,
    pub sizes: Vec<usize>,
    pub selection_sort: Vec<f64>,
    pub quick_sort: Vec<f64>,
    pub ratios: Vec<f64>,
}

impl BenchReport {
    pub fn from_samples(timestamp: String, samples: &[BenchSample]) -> Self {
        Self {
            timestamp,
            sizes: samples.iter().map(|s| s.size).collect(),
            selection_sort: samples.iter().map(|s| s.selection_secs).collect(),
            quick_sort: samples.iter().map(|s| s.quick_secs).collect(),
            ratios: samples.iter().map(|s| s.ratio).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Write the report as semicolon-separated CSV: one header line, then
    /// one row per size.
    pub fn write_csv(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(w, "size;selection_secs;quick_secs;ratio;timestamp")?;
        for i in 0..self.len() {
            writeln!(
                w,
                "{};{:.6};{:.6};{:.2};{}",
                self.sizes[i],
                self.selection_sort[i],
                self.quick_sort[i],
                self.ratios[i],
                self.timestamp
            )?;
        }
        Ok(())
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, w: &mut impl Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *w, self).map_err(io::Error::from)?;
        writeln!(w)
    }

    /// Human-readable results table with the average and maximum
    /// selection/quick ratio.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "=".repeat(60));
        let _ = writeln!(out, "BENCHMARK RESULTS ({})", self.timestamp);
        let _ = writeln!(out, "{}", "=".repeat(60));
        let _ = writeln!(
            out,
            "{:<12} | {:<20} | {:<20} | {:<10}",
            "Size", "Selection (sec)", "Quick (sec)", "Ratio"
        );
        let _ = writeln!(out, "{}", "-".repeat(71));

        for i in 0..self.len() {
            let _ = writeln!(
                out,
                "{:<12} | {:<20.6} | {:<20.6} | {:<10.2}",
                self.sizes[i], self.selection_sort[i], self.quick_sort[i], self.ratios[i]
            );
        }

        let valid: Vec<(usize, f64)> = self
            .sizes
            .iter()
            .copied()
            .zip(self.ratios.iter().copied())
            .filter(|&(_, r)| r > 0.0)
            .collect();
        if !valid.is_empty() {
            let avg = valid.iter().map(|&(_, r)| r).sum::<f64>() / valid.len() as f64;
            let (max_size, max_ratio) = valid
                .iter()
                .copied()
                .fold((0, 0.0), |acc, cur| if cur.1 > acc.1 { cur } else { acc });
            let _ = writeln!(out, "\nAverage ratio: {avg:.2}:1");
            let _ = writeln!(
                out,
                "Maximum ratio: {max_ratio:.2}:1 (at {max_size} elements)"
            );
        }

        out
    }

    /// Write `benchmark_<timestamp>.csv`, `benchmark_<timestamp>.json`,
    /// and `last_benchmark.txt` (naming the JSON file) under `dir`,
    /// creating the directory first.
    ///
    /// # Errors
    /// `Io` if the directory or any of the three files cannot be written.
    pub fn save(&self, dir: impl AsRef<Path>) -> StoreResult<SavedPaths> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .map_err(|err| StoreError::io(format!("create {}", dir.display()), &err))?;

        let stem = format!("benchmark_{}", sanitize_for_filename(&self.timestamp));
        let csv_path = dir.join(format!("{stem}.csv"));
        let json_path = dir.join(format!("{stem}.json"));
        let pointer_path = dir.join("last_benchmark.txt");

        let mut csv = Vec::new();
        self.write_csv(&mut csv)
            .map_err(|err| StoreError::io(format!("render {}", csv_path.display()), &err))?;
        fs::write(&csv_path, csv)
            .map_err(|err| StoreError::io(format!("write {}", csv_path.display()), &err))?;

        let mut json = Vec::new();
        self.write_json(&mut json)
            .map_err(|err| StoreError::io(format!("render {}", json_path.display()), &err))?;
        fs::write(&json_path, json)
            .map_err(|err| StoreError::io(format!("write {}", json_path.display()), &err))?;

        fs::write(&pointer_path, format!("{}\n", json_path.display()))
            .map_err(|err| StoreError::io(format!("write {}", pointer_path.display()), &err))?;

        info!(
            "Benchmark report saved: {} and {}",
            csv_path.display(),
            json_path.display()
        );

        Ok(SavedPaths {
            csv: csv_path,
            json: json_path,
            pointer: pointer_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> BenchReport {
        BenchReport {
            timestamp: "2026-01-02 03:04:05".into(),
            sizes: vec![100, 1000],
            selection_sort: vec![0.001, 0.1],
            quick_sort: vec![0.0005, 0.002],
            ratios: vec![2.0, 50.0],
        }
    }

    #[test]
    fn csv_has_header_and_one_row_per_size() {
        let mut buf = Vec::new();
        sample_report().write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "size;selection_secs;quick_secs;ratio;timestamp");
        assert_eq!(lines[1], "100;0.001000;0.000500;2.00;2026-01-02 03:04:05");
    }

    #[test]
    fn json_round_trips() {
        let report = sample_report();
        let mut buf = Vec::new();
        report.write_json(&mut buf).unwrap();

        let back: BenchReport = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn json_uses_the_plotting_schema() {
        let mut buf = Vec::new();
        sample_report().write_json(&mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        for key in ["timestamp", "sizes", "selection_sort", "quick_sort", "ratios"] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn summary_reports_average_and_maximum() {
        let summary = sample_report().summary();
        assert!(summary.contains("Average ratio: 26.00:1"));
        assert!(summary.contains("Maximum ratio: 50.00:1 (at 1000 elements)"));
    }

    #[test]
    fn summary_of_empty_report_omits_ratios() {
        let report = BenchReport::from_samples("now".into(), &[]);
        assert!(report.is_empty());
        assert!(!report.summary().contains("Average ratio"));
    }

    #[test]
    fn filenames_never_keep_colons_or_spaces() {
        assert_eq!(
            sanitize_for_filename("2026-01-02 03:04:05"),
            "2026-01-02_03-04-05"
        );
    }

    #[test]
    fn timestamp_matches_the_expected_shape() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), 19, "unexpected timestamp {ts:?}");
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
    }
}
