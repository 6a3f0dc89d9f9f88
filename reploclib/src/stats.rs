//! Core data structures for per-extension line statistics

use std::collections::BTreeMap;
use std::ops::AddAssign;
use std::time::Duration;

/// Per-extension accumulators for a single scan.
///
/// Both maps are keyed by the configured extension string (e.g. `.py`). A
/// bucket only exists once at least one file has been recorded into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileCounters {
    /// Extension -> accumulated non-blank lines
    pub lines: BTreeMap<String, u64>,
    /// Extension -> processed file count
    pub files: BTreeMap<String, u64>,
}

/// One row of the per-extension breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionStats {
    pub extension: String,
    pub lines: u64,
    pub files: u64,
    /// Share of all counted lines, 0.0 when nothing was counted
    pub percentage: f64,
    /// Mean lines per processed file, 0.0 for an empty bucket
    pub average: f64,
}

impl FileCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one processed file into its extension bucket.
    pub fn record(&mut self, extension: &str, lines: u64) {
        *self.lines.entry(extension.to_string()).or_insert(0) += lines;
        *self.files.entry(extension.to_string()).or_insert(0) += 1;
    }

    pub fn lines_for(&self, extension: &str) -> u64 {
        self.lines.get(extension).copied().unwrap_or(0)
    }

    pub fn files_for(&self, extension: &str) -> u64 {
        self.files.get(extension).copied().unwrap_or(0)
    }

    pub fn total_lines(&self) -> u64 {
        self.lines.values().sum()
    }

    pub fn total_files(&self) -> u64 {
        self.files.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Per-extension rows sorted by descending line count.
    ///
    /// Ties keep extension order so the output is deterministic.
    pub fn breakdown(&self) -> Vec<ExtensionStats> {
        let total_lines = self.total_lines();

        let mut rows: Vec<ExtensionStats> = self
            .files
            .iter()
            .map(|(ext, &files)| {
                let lines = self.lines_for(ext);
                ExtensionStats {
                    extension: ext.clone(),
                    lines,
                    files,
                    percentage: ratio(lines, total_lines) * 100.0,
                    average: ratio(lines, files),
                }
            })
            .collect();

        rows.sort_by(|a, b| b.lines.cmp(&a.lines));
        rows
    }
}

impl AddAssign for FileCounters {
    fn add_assign(&mut self, other: Self) {
        for (ext, lines) in other.lines {
            *self.lines.entry(ext).or_insert(0) += lines;
        }
        for (ext, files) in other.files {
            *self.files.entry(ext).or_insert(0) += files;
        }
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Outcome of a complete scan.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub counters: FileCounters,
    /// Processed files that were not valid UTF-8 (counted as 0 lines)
    pub undecodable_files: u64,
    /// Processed files that could not be opened or read (counted as 0 lines)
    pub unreadable_files: u64,
    /// Wall-clock time spent counting
    pub duration: Duration,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files that contributed a zero count without being text.
    pub fn skipped_files(&self) -> u64 {
        self.undecodable_files + self.unreadable_files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accumulates_per_bucket() {
        let mut counters = FileCounters::new();
        counters.record(".py", 3);
        counters.record(".py", 0);
        counters.record(".js", 10);

        assert_eq!(counters.lines_for(".py"), 3);
        assert_eq!(counters.files_for(".py"), 2);
        assert_eq!(counters.lines_for(".js"), 10);
        assert_eq!(counters.files_for(".rs"), 0);
        assert_eq!(counters.total_lines(), 13);
        assert_eq!(counters.total_files(), 3);
    }

    #[test]
    fn test_breakdown_sorted_descending() {
        let mut counters = FileCounters::new();
        counters.record(".css", 5);
        counters.record(".ts", 50);
        counters.record(".py", 20);

        let order: Vec<_> = counters
            .breakdown()
            .into_iter()
            .map(|r| r.extension)
            .collect();
        assert_eq!(order, vec![".ts", ".py", ".css"]);
    }

    #[test]
    fn test_breakdown_percentages_and_average() {
        let mut counters = FileCounters::new();
        counters.record(".py", 3);
        counters.record(".py", 0);

        let rows = counters.breakdown();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].percentage, 100.0);
        assert_eq!(rows[0].average, 1.5);
    }

    #[test]
    fn test_breakdown_zero_lines() {
        let mut counters = FileCounters::new();
        counters.record(".py", 0);

        let rows = counters.breakdown();
        assert_eq!(rows[0].percentage, 0.0);
        assert_eq!(rows[0].average, 0.0);
    }

    #[test]
    fn test_add_assign_merges_buckets() {
        let mut a = FileCounters::new();
        a.record(".py", 4);
        let mut b = FileCounters::new();
        b.record(".py", 1);
        b.record(".h", 2);

        a += b;

        assert_eq!(a.lines_for(".py"), 5);
        assert_eq!(a.files_for(".py"), 2);
        assert_eq!(a.lines_for(".h"), 2);
        assert_eq!(a.total_files(), 3);
    }

    #[test]
    fn test_empty_counters() {
        let counters = FileCounters::new();
        assert!(counters.is_empty());
        assert_eq!(counters.total_lines(), 0);
        assert!(counters.breakdown().is_empty());
    }
}
