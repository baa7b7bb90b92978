//! Cell-level progress display for mosaic assembly

use crate::io::configuration::{PROGRESS_CHARS, PROGRESS_TEMPLATE};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(PROGRESS_CHARS)
});

/// Tracks how many mosaic cells have been filled
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress display drawing to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(CELL_STYLE.clone());
        Self { bar }
    }

    /// Create a progress tracker that never draws
    pub fn hidden() -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::hidden());
        Self { bar }
    }

    /// Reset the display for a mosaic of `cells` cells
    pub fn initialize(&self, cells: usize) {
        self.bar.set_length(cells as u64);
        self.bar.set_position(0);
    }

    /// Record one filled cell
    pub fn cell_done(&self) {
        self.bar.inc(1);
    }

    /// Number of cells recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total number of cells expected
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Clear the display once assembly has finished
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
