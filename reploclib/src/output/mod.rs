//! Output formatting: present scan data as text.
//!
//! This module handles the final stage of the pipeline. It is a pure
//! presentation layer: it only turns configuration and counters into
//! strings, and never touches the filesystem or the terminal.
//!
//! ## Example
//!
//! ```rust,ignore
//! use reploclib::output::format_report;
//!
//! let result = reploclib::analyze(&config)?;
//! println!("{}", format_report(&result.counters));
//! ```

pub mod report;

pub use report::{format_configuration, format_report, group_thousands, REPORT_TITLE};
