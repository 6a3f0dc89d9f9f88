//! # reploc
//!
//! A CLI tool for counting non-blank lines of code in a repository, broken
//! down by file extension.
//!
//! ## Overview
//!
//! reploc is built on top of reploclib. It walks a repository, skips
//! dependency and build directories plus minified or generated files, and
//! prints a per-extension summary with percentages and per-file averages.
//!
//! ## Usage
//!
//! ```bash
//! # Count with the default configuration
//! reploc path/to/repo
//!
//! # Only count Rust and TOML files
//! reploc path/to/repo --include-extensions .rs .toml
//!
//! # Disable every directory exclusion
//! reploc path/to/repo --exclude-dirs
//!
//! # Narrate each file as it is counted
//! reploc path/to/repo -v
//! ```

mod logging;
mod progress;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::parser::ValueSource;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::{style, Term};
use reploclib::output::REPORT_TITLE;
use reploclib::{analyze_with, format_configuration, format_report, ScanConfig, ScanResult};

use crate::logging::init_logging;
use crate::progress::ConsoleObserver;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("reploc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count lines of code in a repository")
        .arg(
            Arg::new("repo_path")
                .help("Path to the repository root")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("exclude-dirs")
                .long("exclude-dirs")
                .num_args(0..)
                .value_name("WORD")
                .action(ArgAction::Append)
                .help("Directories to exclude (substring match; replaces the defaults)"),
        )
        .arg(
            Arg::new("exclude-files")
                .long("exclude-files")
                .num_args(0..)
                .value_name("PATTERN")
                .action(ArgAction::Append)
                .help("File patterns to exclude (glob on file name; replaces the defaults)"),
        )
        .arg(
            Arg::new("include-extensions")
                .long("include-extensions")
                .num_args(0..)
                .value_name("EXT")
                .action(ArgAction::Append)
                .help("File extensions to include (replaces the defaults)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Show detailed progress"),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .action(ArgAction::SetTrue)
                .help("Do not draw the live progress bar"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level spec (defaults to RUST_LOG, then warn)"),
        )
}

/// Values of a list flag, if it was given on the command line.
///
/// A flag given with no values yields an empty list, which overrides the
/// default; an absent flag yields `None`.
fn list_override(matches: &ArgMatches, id: &str) -> Option<Vec<String>> {
    if matches.value_source(id) != Some(ValueSource::CommandLine) {
        return None;
    }
    Some(
        matches
            .get_many::<String>(id)
            .map(|v| v.cloned().collect())
            .unwrap_or_default(),
    )
}

/// Build scan configuration from matches
fn build_config(matches: &ArgMatches) -> Result<ScanConfig, anyhow::Error> {
    let root = matches
        .get_one::<PathBuf>("repo_path")
        .ok_or_else(|| anyhow::anyhow!("missing repository path"))?;

    let mut config = ScanConfig::new(root);

    if let Some(words) = list_override(matches, "exclude-dirs") {
        config = config.exclude_dirs(&words);
    }
    if let Some(patterns) = list_override(matches, "exclude-files") {
        config = config.exclude_files(&patterns)?;
    }
    if let Some(extensions) = list_override(matches, "include-extensions") {
        config = config.include_extensions(&extensions);
    }

    Ok(config)
}

/// Report text with a bold title when the terminal supports it
fn styled_report(result: &ScanResult) -> String {
    let title = style(REPORT_TITLE).bold().to_string();
    format_report(&result.counters).replacen(REPORT_TITLE, &title, 1)
}

fn skipped_note(result: &ScanResult) -> Option<String> {
    let mut parts = Vec::new();
    if result.undecodable_files > 0 {
        parts.push(format!(
            "{} files could not be decoded as UTF-8",
            result.undecodable_files
        ));
    }
    if result.unreadable_files > 0 {
        parts.push(format!("{} files could not be read", result.unreadable_files));
    }
    if parts.is_empty() {
        None
    } else {
        Some(format!("Note: {} (counted as 0 lines)", parts.join(", ")))
    }
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let config = build_config(matches)?;
    let verbose = matches.get_flag("verbose");
    let show_progress = !matches.get_flag("no-progress") && Term::stdout().is_term();

    println!(
        "\nStarting analysis at {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("{}", format_configuration(&config));

    let mut observer = ConsoleObserver::new(&config.root, verbose, show_progress);
    let result = analyze_with(&config, &mut observer)?;
    log::debug!(
        "scanned {} files in {:?}",
        result.counters.total_files(),
        result.duration
    );

    println!("{}", styled_report(&result));
    if let Some(note) = skipped_note(&result) {
        println!("\n{note}");
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    // Keep the handle alive until exit.
    let _logger = match init_logging(matches.get_one::<String>("log-level").map(String::as_str)) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Error: invalid log configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
