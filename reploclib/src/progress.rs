//! Progress bar for terminal output during a scan.
//!
//! Built on indicatif. Redraws are rate-limited by the draw target, so a scan
//! over many small files is not slowed down by terminal writes. Progress is
//! purely cosmetic: nothing here feeds back into the scan results.

use std::fmt::Write as _;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};

/// Maximum redraws per second (one every 100 ms).
pub const DRAW_RATE_HZ: u8 = 10;

/// Template used when the number of files is known.
pub const TEMPLATE_BAR: &str = "[{bar:30}] {pct}% ({pos}/{len})";

/// Template used when the number of files is unknown.
pub const TEMPLATE_COUNTER: &str = "Processed {pos} files...";

/// Progress bar manager for scan operations.
pub struct ScanProgress {
    bar: ProgressBar,
}

impl ScanProgress {
    /// Create a progress display on stdout.
    ///
    /// A total of `None` or `Some(0)` renders a bare running count. When
    /// `visible` is false, or stdout is not a terminal, nothing is drawn but
    /// the position is still tracked.
    pub fn new(total: Option<u64>, visible: bool) -> Self {
        let target = if visible {
            ProgressDrawTarget::stdout_with_hz(DRAW_RATE_HZ)
        } else {
            ProgressDrawTarget::hidden()
        };
        Self::with_draw_target(total, target)
    }

    /// Create a progress display drawing to an explicit target.
    pub fn with_draw_target(total: Option<u64>, target: ProgressDrawTarget) -> Self {
        let bar = match total.filter(|&len| len > 0) {
            Some(len) => {
                let pb = ProgressBar::with_draw_target(Some(len), target);
                pb.set_style(bar_style());
                pb
            }
            None => {
                let pb = ProgressBar::with_draw_target(None, target);
                pb.set_style(counter_style());
                pb
            }
        };

        Self { bar }
    }

    /// Jump to an absolute number of processed files.
    pub fn set(&self, processed: u64) {
        self.bar.set_position(processed);
    }

    /// Print a line without tearing the bar.
    pub fn println(&self, line: impl AsRef<str>) {
        if self.bar.is_hidden() {
            println!("{}", line.as_ref());
        } else {
            self.bar.println(line.as_ref());
        }
    }

    /// Draw the final state, leave it on screen and return the elapsed time.
    pub fn finish(&self) -> Duration {
        self.bar.abandon();
        self.bar.elapsed()
    }
}

/// Percentage with one decimal, `0.0` when there is no usable length.
fn percent(state: &ProgressState) -> f64 {
    match state.len() {
        Some(len) if len > 0 => state.pos() as f64 / len as f64 * 100.0,
        _ => 0.0,
    }
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(TEMPLATE_BAR)
        .map(|style| {
            style
                .with_key("pct", |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let _ = write!(w, "{:.1}", percent(state));
                })
                .progress_chars("= ")
        })
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

fn counter_style() -> ProgressStyle {
    ProgressStyle::with_template(TEMPLATE_COUNTER)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}
