//! Spinner reporting how many solutions have been enumerated

use crate::io::configuration::{PROGRESS_TICK_MS, PROGRESS_UPDATE_EVERY};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Live solution counter for one enumeration
///
/// Hidden when progress is disabled, so callers can report unconditionally.
pub struct SolutionProgress {
    bar: ProgressBar,
    found: usize,
}

impl SolutionProgress {
    /// Create a spinner, drawn only if `enabled`
    pub fn new(enabled: bool, label: &str) -> Self {
        let bar = if enabled {
            let bar = ProgressBar::new_spinner();
            bar.set_style(SPINNER_STYLE.clone());
            bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
            bar
        } else {
            ProgressBar::hidden()
        };
        bar.set_prefix(label.to_string());
        bar.set_message(format!("{label}: 0 solutions"));

        Self { bar, found: 0 }
    }

    /// Record one more solution
    pub fn record(&mut self) {
        self.found += 1;
        if self.found.is_multiple_of(PROGRESS_UPDATE_EVERY) {
            self.refresh();
        }
    }

    /// Solutions recorded so far
    pub const fn found(&self) -> usize {
        self.found
    }

    /// Stop the spinner and leave the final count on screen
    pub fn finish(&self) {
        self.refresh();
        self.bar.finish();
    }

    fn refresh(&self) {
        let noun = if self.found == 1 {
            "solution"
        } else {
            "solutions"
        };
        self.bar
            .set_message(format!("{}: {} {noun}", self.bar.prefix(), self.found));
    }
}
