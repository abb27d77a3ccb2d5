//! Iteration progress reporting for assembly runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static RUN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len} {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for a single assembly run
///
/// Tracks the iteration count against the caller's ceiling and shows the
/// current number of placed tiles alongside.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar for a run of at most `max_iterations` steps
    pub fn new(label: &str, max_iterations: usize) -> Self {
        let bar = ProgressBar::new(max_iterations as u64);
        bar.set_style(RUN_STYLE.clone());
        bar.set_message(label.to_string());
        Self { bar }
    }

    /// Report the current iteration and placed-tile count
    pub fn update(&self, iteration: usize, placed: usize) {
        self.bar.set_position(iteration as u64);
        self.bar.set_prefix(format!("{placed} tiles"));
    }

    /// Finish the display, noting whether the run stalled
    pub fn finish(&self, stuck: bool) {
        if stuck {
            self.bar.abandon_with_message("stuck".to_string());
        } else {
            self.bar.finish();
        }
    }
}
