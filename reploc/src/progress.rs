//! Console narration of a running scan.

use std::path::PathBuf;

use reploclib::{Candidate, ScanObserver, ScanProgress, ScanResult};

/// Scan observer that prints progress to stdout.
///
/// The live bar is only drawn when enabled (stdout is a terminal and
/// `--no-progress` was not given). Verbose mode narrates each file.
pub struct ConsoleObserver {
    root: PathBuf,
    verbose: bool,
    show_progress: bool,
    progress: Option<ScanProgress>,
}

impl ConsoleObserver {
    pub fn new(root: impl Into<PathBuf>, verbose: bool, show_progress: bool) -> Self {
        Self {
            root: root.into(),
            verbose,
            show_progress,
            progress: None,
        }
    }

    /// Verbose line for one file: its root-relative path and its bucket.
    fn processing_line(&self, candidate: &Candidate) -> String {
        format!(
            "Processing: {} ({})",
            candidate.relative_to(&self.root).display(),
            candidate.extension
        )
    }
}

impl ScanObserver for ConsoleObserver {
    fn on_start(&mut self, total: u64) {
        println!("\nFound {} files to analyze", reploclib::output::group_thousands(total));
        if self.show_progress {
            self.progress = Some(ScanProgress::new(Some(total), true));
        }
    }

    fn on_file(&mut self, candidate: &Candidate) {
        if !self.verbose {
            return;
        }
        let line = self.processing_line(candidate);
        match &self.progress {
            Some(progress) => progress.println(line),
            None => println!("{line}"),
        }
    }

    fn on_progress(&mut self, processed: u64) {
        if let Some(progress) = &self.progress {
            progress.set(processed);
        }
    }

    fn on_finish(&mut self, result: &ScanResult) {
        let duration = match self.progress.take() {
            Some(progress) => progress.finish(),
            None => result.duration,
        };
        println!("\nAnalysis completed in {:.2} seconds", duration.as_secs_f64());
    }
}
