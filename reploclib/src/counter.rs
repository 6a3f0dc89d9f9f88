//! Line counting and repository analysis.
//!
//! [`count_lines`] is best-effort: it never fails, so one unreadable file
//! cannot abort a scan. [`analyze`] and [`analyze_with`] drive a full scan and
//! return the per-extension counters by value.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::config::ScanConfig;
use crate::error::ReplocError;
use crate::source::{count_candidates, included_candidates, Candidate};
use crate::stats::ScanResult;
use crate::Result;

/// What reading a single file produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileLines {
    /// Valid UTF-8 text with this many non-blank lines
    Text(u64),
    /// Contents are not valid UTF-8 (treated as binary)
    Undecodable,
    /// The file could not be opened or read
    Unreadable,
}

impl FileLines {
    /// Line count contributed to the totals.
    pub fn lines(self) -> u64 {
        match self {
            FileLines::Text(n) => n,
            FileLines::Undecodable | FileLines::Unreadable => 0,
        }
    }
}

/// Count lines whose trimmed content is non-empty.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn count_non_blank(text: &str) -> u64 {
    text.split(['\n', '\r'])
        .filter(|line| !line.trim().is_empty())
        .count() as u64
}

/// Read a file and classify the result.
///
/// Read failures other than decoding are logged as warnings.
pub fn inspect_file(path: impl AsRef<Path>) -> FileLines {
    let path = path.as_ref();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::warn!("error reading {}: {err}", path.display());
            return FileLines::Unreadable;
        }
    };

    match std::str::from_utf8(&bytes) {
        Ok(text) => FileLines::Text(count_non_blank(text)),
        Err(_) => {
            log::debug!("skipping non-UTF-8 file {}", path.display());
            FileLines::Undecodable
        }
    }
}

/// Count the non-blank lines of a file.
///
/// Binary (non-UTF-8) and unreadable files count as zero.
///
/// # Example
///
/// ```rust,ignore
/// use reploclib::count_lines;
///
/// let lines = count_lines("src/main.py");
/// ```
pub fn count_lines(path: impl AsRef<Path>) -> u64 {
    inspect_file(path).lines()
}

/// Hooks invoked while a scan runs.
///
/// All methods default to no-ops. Observers only watch; they cannot change
/// what is counted.
pub trait ScanObserver {
    /// Called once with the number of files that will be processed.
    fn on_start(&mut self, _total: u64) {}

    /// Called before each file is counted.
    fn on_file(&mut self, _candidate: &Candidate) {}

    /// Called after each file with the running number of processed files.
    fn on_progress(&mut self, _processed: u64) {}

    /// Called once the scan is complete.
    fn on_finish(&mut self, _result: &ScanResult) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// Scan a repository without progress reporting.
pub fn analyze(config: &ScanConfig) -> Result<ScanResult> {
    analyze_with(config, &mut NoopObserver)
}

/// Scan a repository, reporting progress to `observer`.
///
/// The tree is walked twice: once to size the progress total and once to
/// count. Every included file is recorded into exactly one extension bucket,
/// including files that fail to decode or read (they add zero lines but
/// still bump the bucket's file count).
///
/// # Example
///
/// ```rust,ignore
/// use reploclib::{analyze, ScanConfig};
///
/// let result = analyze(&ScanConfig::new("."))?;
/// println!("{} lines", result.counters.total_lines());
/// ```
pub fn analyze_with<O: ScanObserver + ?Sized>(
    config: &ScanConfig,
    observer: &mut O,
) -> Result<ScanResult> {
    let root = &config.root;
    if !root.exists() {
        return Err(ReplocError::PathNotFound(root.clone()));
    }
    if !root.is_dir() {
        return Err(ReplocError::NotADirectory(root.clone()));
    }

    observer.on_start(count_candidates(config));

    let start = Instant::now();
    let mut result = ScanResult::new();
    let mut processed = 0u64;

    for candidate in included_candidates(config) {
        observer.on_file(&candidate);

        let outcome = inspect_file(&candidate.path);
        match outcome {
            FileLines::Undecodable => result.undecodable_files += 1,
            FileLines::Unreadable => result.unreadable_files += 1,
            FileLines::Text(_) => {}
        }
        result.counters.record(&candidate.extension, outcome.lines());

        processed += 1;
        observer.on_progress(processed);
    }

    result.duration = start.elapsed();
    observer.on_finish(&result);

    Ok(result)
}
