//! Progress display for spanning tree construction

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_REFRESH_CELLS};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many cells have joined the maze
///
/// Redraws are throttled to every [`PROGRESS_REFRESH_CELLS`] cells so the
/// bar stays cheap on large grids.
pub struct ProgressManager {
    bar: ProgressBar,
    last_reported: usize,
}

impl ProgressManager {
    /// Create a bar for `total_cells` cells drawn to standard error
    pub fn new(total_cells: usize, label: &str) -> Self {
        Self::with_target(total_cells, label, ProgressDrawTarget::stderr())
    }

    /// Create a bar that never draws
    pub fn hidden(total_cells: usize) -> Self {
        Self::with_target(total_cells, "", ProgressDrawTarget::hidden())
    }

    fn with_target(total_cells: usize, label: &str, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total_cells as u64), target);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_message(label.to_string());
        Self {
            bar,
            last_reported: 0,
        }
    }

    /// Report the current number of connected cells
    pub fn update(&mut self, members: usize) {
        if members >= self.last_reported + PROGRESS_REFRESH_CELLS
            || members as u64 >= self.bar.length().unwrap_or(0)
        {
            self.bar.set_position(members as u64);
            self.last_reported = members;
        }
    }

    /// Last position pushed to the bar
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
