//! Plain-text rendering of scan configuration and results.

use crate::config::ScanConfig;
use crate::stats::FileCounters;

/// Report title line.
pub const REPORT_TITLE: &str = "Lines of Code Analysis Results";

/// Format an integer with `,` thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render the final summary report.
///
/// The header carries the totals; the breakdown lists one line per
/// extension, sorted by descending line count. Empty counters render the
/// header with zero totals and an empty breakdown.
///
/// ```text
/// Lines of Code Analysis Results
/// ==============================
/// Total Lines: 3
/// Total Files: 2
///
/// Breakdown by Language:
/// --------------------
/// .py             3 lines (100.0%) in     2 files (avg: 1.5 lines/file)
/// ```
pub fn format_report(counters: &FileCounters) -> String {
    let mut lines = vec![
        String::new(),
        REPORT_TITLE.to_string(),
        "=".repeat(REPORT_TITLE.len()),
        format!("Total Lines: {}", group_thousands(counters.total_lines())),
        format!("Total Files: {}", group_thousands(counters.total_files())),
        String::new(),
        "Breakdown by Language:".to_string(),
        "-".repeat(20),
    ];

    for row in counters.breakdown() {
        lines.push(format!(
            "{:<8} {:>8} lines ({:>5.1}%) in {:>5} files (avg: {:.1} lines/file)",
            row.extension,
            group_thousands(row.lines),
            row.percentage,
            group_thousands(row.files),
            row.average
        ));
    }

    lines.join("\n")
}

/// Render the configuration echo printed before a scan.
pub fn format_configuration(config: &ScanConfig) -> String {
    [
        format!("Repository path: {}", config.root.display()),
        String::new(),
        "Configuration:".to_string(),
        format!("- Excluded directories: {}", config.exclude_dirs.join(", ")),
        format!(
            "- Excluded file patterns: {}",
            config.exclude_file_patterns().join(", ")
        ),
        format!(
            "- Included extensions: {}",
            config.include_extensions.join(", ")
        ),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(100000), "100,000");
    }

    #[test]
    fn test_format_report_empty() {
        let report = format_report(&FileCounters::new());

        assert!(report.contains("Total Lines: 0"));
        assert!(report.contains("Total Files: 0"));
        assert!(report.ends_with("--------------------"));
    }

    #[test]
    fn test_format_report_scenario() {
        let mut counters = FileCounters::new();
        counters.record(".py", 3);
        counters.record(".py", 0);

        let report = format_report(&counters);

        assert!(report.contains("Total Lines: 3"));
        assert!(report.contains("Total Files: 2"));
        assert!(report.contains(
            ".py             3 lines (100.0%) in     2 files (avg: 1.5 lines/file)"
        ));
    }

    #[test]
    fn test_format_report_zero_line_bucket() {
        let mut counters = FileCounters::new();
        counters.record(".css", 0);

        let report = format_report(&counters);

        assert!(report.contains("(  0.0%)"));
        assert!(report.contains("(avg: 0.0 lines/file)"));
    }

    #[test]
    fn test_format_report_ordering_and_separators() {
        let mut counters = FileCounters::new();
        counters.record(".css", 250);
        counters.record(".ts", 12_000);
        counters.record(".ts", 750);

        let report = format_report(&counters);
        let ts = report.find(".ts").unwrap();
        let css = report.find(".css").unwrap();

        assert!(ts < css);
        assert!(report.contains("Total Lines: 13,000"));
        assert!(report.contains("  12,750 lines ( 98.1%)"));
        assert!(report.contains("(avg: 6375.0 lines/file)"));
    }

    #[test]
    fn test_format_configuration() {
        let config = ScanConfig::new("repo").include_extensions(&[".py", ".js"]);
        let text = format_configuration(&config);

        assert!(text.starts_with("Repository path: repo"));
        assert!(text.contains("- Excluded directories: node_modules, dist, build"));
        assert!(text.contains("- Excluded file patterns: *.min.js, *.min.css"));
        assert!(text.contains("- Included extensions: .py, .js"));
    }
}
