//! Source discovery: find files to count.
//!
//! This module handles the first stage of the pipeline - deciding which
//! files take part in a scan:
//!
//! - **Enumeration**: walk the tree and tag files with their extension bucket
//! - **Exclusion**: drop paths by directory substring or file-name glob
//!
//! ## Example
//!
//! ```rust,ignore
//! use reploclib::source::{included_candidates, is_excluded};
//! use reploclib::ScanConfig;
//!
//! let config = ScanConfig::new(".");
//! for candidate in included_candidates(&config) {
//!     println!("{} {}", candidate.extension, candidate.path.display());
//! }
//! ```

pub mod filter;

pub use filter::{
    count_candidates, enumerate_candidates, included_candidates, is_excluded, match_extension,
    Candidate,
};
