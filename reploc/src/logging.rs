//! Logger setup for the CLI.
//!
//! Library code only talks to the `log` facade; this module wires it to
//! flexi_logger on stderr so warnings never interleave with the report on
//! stdout.

use console::style;
use flexi_logger::{DeferredNow, FlexiLoggerError, Logger, LoggerHandle};

/// Level spec used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_SPEC: &str = "warn";

/// Start the global logger.
///
/// An explicit `level` wins over `RUST_LOG`, which wins over
/// [`DEFAULT_LOG_SPEC`]. The returned handle must be kept alive for the
/// lifetime of the program.
pub fn init_logging(level: Option<&str>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = match level {
        Some(spec) => Logger::try_with_str(spec)?,
        None => Logger::try_with_env_or_str(DEFAULT_LOG_SPEC)?,
    };

    logger.log_to_stderr().format(compact_format).start()
}

fn level_abbr(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    }
}

// Format: "WRN error reading src/a.py: permission denied"
fn compact_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    let abbr = level_abbr(record.level());
    let level = match record.level() {
        log::Level::Error => style(abbr).red().bold(),
        log::Level::Warn => style(abbr).yellow(),
        log::Level::Info => style(abbr).green(),
        log::Level::Debug => style(abbr).blue(),
        log::Level::Trace => style(abbr).magenta(),
    };

    write!(w, "{} {}", level.for_stderr(), record.args())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_abbr() {
        assert_eq!(level_abbr(log::Level::Error), "ERR");
        assert_eq!(level_abbr(log::Level::Warn), "WRN");
        assert_eq!(level_abbr(log::Level::Trace), "TRC");
    }
}
