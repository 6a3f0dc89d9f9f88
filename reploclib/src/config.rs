//! Scan configuration.
//!
//! A [`ScanConfig`] is built once, before the scan starts, and only borrowed
//! afterwards. Every list setter replaces the corresponding default list
//! wholesale, so an empty slice really means "none".

use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::ReplocError;
use crate::Result;

/// Directory-name substrings excluded by default.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    "venv",
    ".git",
    "__pycache__",
    "generated",
];

/// File-name globs excluded by default.
pub const DEFAULT_EXCLUDE_FILES: &[&str] = &["*.min.js", "*.min.css", "*.map", "*.pyc", "*.g.dart"];

/// File extensions scanned by default.
pub const DEFAULT_INCLUDE_EXTENSIONS: &[&str] = &[
    ".dart", ".py", ".js", ".jsx", ".ts", ".tsx", ".java", ".cpp", ".h", ".css", ".scss",
];

/// Configuration for a repository scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Repository root to walk
    pub root: PathBuf,
    /// Substrings that exclude any path containing them
    pub exclude_dirs: Vec<String>,
    /// Globs matched against a file's base name
    pub exclude_files: Vec<Pattern>,
    /// File-name suffixes to include, in priority order
    pub include_extensions: Vec<String>,
}

impl ScanConfig {
    /// Create a configuration for `root` using the default lists.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let exclude_files = DEFAULT_EXCLUDE_FILES
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect();

        Self {
            root: root.as_ref().to_path_buf(),
            exclude_dirs: to_strings(DEFAULT_EXCLUDE_DIRS),
            exclude_files,
            include_extensions: to_strings(DEFAULT_INCLUDE_EXTENSIONS),
        }
    }

    /// Replace the excluded directory substrings.
    pub fn exclude_dirs<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.exclude_dirs = to_strings(words);
        self
    }

    /// Replace the excluded file globs.
    pub fn exclude_files<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self> {
        self.exclude_files = patterns
            .iter()
            .map(|p| compile_glob(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// Replace the included extensions.
    pub fn include_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.include_extensions = to_strings(extensions);
        self
    }

    /// Raw glob strings, for display.
    pub fn exclude_file_patterns(&self) -> Vec<&str> {
        self.exclude_files.iter().map(Pattern::as_str).collect()
    }
}

fn compile_glob(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| ReplocError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

fn to_strings<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items.iter().map(|s| s.as_ref().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::new("repo");

        assert_eq!(config.root, PathBuf::from("repo"));
        assert!(config.exclude_dirs.contains(&"node_modules".to_string()));
        assert_eq!(config.exclude_files.len(), DEFAULT_EXCLUDE_FILES.len());
        assert_eq!(config.exclude_file_patterns(), DEFAULT_EXCLUDE_FILES);
        assert!(config.include_extensions.contains(&".py".to_string()));
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let config = ScanConfig::new(".")
            .exclude_dirs(&["vendor"])
            .exclude_files(&["*.lock"])
            .unwrap()
            .include_extensions(&[".rs"]);

        assert_eq!(config.exclude_dirs, vec!["vendor"]);
        assert_eq!(config.exclude_file_patterns(), vec!["*.lock"]);
        assert_eq!(config.include_extensions, vec![".rs"]);
    }

    #[test]
    fn test_empty_overrides() {
        let empty: [&str; 0] = [];
        let config = ScanConfig::new(".")
            .exclude_dirs(&empty)
            .exclude_files(&empty)
            .unwrap();

        assert!(config.exclude_dirs.is_empty());
        assert!(config.exclude_files.is_empty());
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let result = ScanConfig::new(".").exclude_files(&["[invalid"]);

        if let Err(ReplocError::InvalidGlob { pattern, .. }) = result {
            assert_eq!(pattern, "[invalid");
        } else {
            panic!("Expected InvalidGlob error");
        }
    }
}
