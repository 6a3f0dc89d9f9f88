//! # reploclib
//!
//! A repository line-of-code scanner that reports non-blank lines per file
//! extension.
//!
//! ## Overview
//!
//! A scan walks a directory tree, keeps files whose names end with one of the
//! configured extensions, drops anything excluded by directory substring or
//! file-name glob, and counts the non-blank lines of what remains. Results
//! are grouped into one bucket per extension.
//!
//! ## Features
//!
//! - **Best-effort counting**: binary and unreadable files count as zero
//!   lines instead of aborting the scan
//! - **Exclusion filters**: directory substrings and shell-style file globs
//! - **Progress hooks**: observe a scan through [`ScanObserver`]
//! - **Pure data types**: scanning returns structured counters; only
//!   [`ScanProgress`] draws, and only when asked to
//!
//! ## Example
//!
//! ```rust
//! use reploclib::{analyze, count_lines, format_report, ScanConfig};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("a.py"), "import os\n\nprint(os.name)\n").unwrap();
//! fs::create_dir(dir.path().join("node_modules")).unwrap();
//! fs::write(dir.path().join("node_modules/dep.js"), "x;\n").unwrap();
//!
//! // Count a single file
//! assert_eq!(count_lines(dir.path().join("a.py")), 2);
//!
//! // Scan the tree with the default configuration
//! let result = analyze(&ScanConfig::new(dir.path())).unwrap();
//! assert_eq!(result.counters.lines_for(".py"), 2);
//! assert_eq!(result.counters.files_for(".js"), 0);
//!
//! let report = format_report(&result.counters);
//! assert!(report.contains("Total Lines: 2"));
//! ```

pub mod config;
pub mod counter;
pub mod error;
pub mod output;
pub mod progress;
pub mod source;
pub mod stats;

pub use config::{
    ScanConfig, DEFAULT_EXCLUDE_DIRS, DEFAULT_EXCLUDE_FILES, DEFAULT_INCLUDE_EXTENSIONS,
};
pub use counter::{
    analyze, analyze_with, count_lines, count_non_blank, inspect_file, FileLines, NoopObserver,
    ScanObserver,
};
pub use error::ReplocError;
pub use output::{format_configuration, format_report};
pub use progress::ScanProgress;
pub use source::{count_candidates, enumerate_candidates, is_excluded, Candidate};
pub use stats::{ExtensionStats, FileCounters, ScanResult};

/// Result type for reploclib operations
pub type Result<T> = std::result::Result<T, ReplocError>;
