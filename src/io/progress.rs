//! Terminal progress display for a running solve

use crate::algorithm::executor::GridTally;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SOLVE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar counting resolved cells against the grid size
pub struct SolveProgress {
    bar: ProgressBar,
}

impl SolveProgress {
    /// Create a visible progress bar for `total_cells` cells
    pub fn new(total_cells: usize) -> Self {
        let bar = ProgressBar::new(total_cells as u64);
        bar.set_style(SOLVE_STYLE.clone());
        Self { bar }
    }

    /// Create a progress tracker that never draws
    pub fn hidden(total_cells: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total_cells as u64);
        Self { bar }
    }

    /// Show the resolved cell count and the current iteration
    pub fn update(&self, resolved: usize, iteration: usize, contradictions: usize) {
        self.bar.set_position(resolved as u64);
        self.bar.set_message(format!(
            "Iteration {iteration:>6} | contradictions {contradictions}"
        ));
    }

    /// Finalize the bar with the closing tally
    ///
    /// A run stopped with unresolved cells leaves the bar at the resolved count.
    pub fn finish(&self, tally: &GridTally, iterations: usize) {
        let message = format!(
            "Done in {iterations} iterations | solved {} | contradictions {} | unresolved {}",
            tally.solved, tally.contradictions, tally.unresolved
        );
        if tally.unresolved == 0 {
            self.bar.finish_with_message(message);
        } else {
            self.bar
                .set_position((tally.solved + tally.contradictions) as u64);
            self.bar.abandon_with_message(message);
        }
    }

    /// Cells reported as resolved so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total cells the bar was created for
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Whether `finish` has been called
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}
