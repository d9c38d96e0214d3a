//! Terminal progress display for the similarity scan

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static SCAN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress bars for the stages of one reassembly run
///
/// A hidden manager keeps the same bookkeeping without drawing anything.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    stage_bar: Option<ProgressBar>,
    completed_stages: Vec<String>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager drawing to stderr
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            stage_bar: None,
            completed_stages: Vec::new(),
        }
    }

    /// Create a manager that never draws
    pub fn hidden() -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            stage_bar: None,
            completed_stages: Vec::new(),
        }
    }

    /// Start a stage with a known number of steps, finishing any running one
    pub fn start_stage(&mut self, name: &str, steps: usize) {
        self.finish_stage();
        let bar = ProgressBar::new(steps as u64);
        bar.set_style(SCAN_STYLE.clone());
        bar.set_prefix(name.to_string());
        self.stage_bar = Some(self.multi_progress.add(bar));
    }

    /// Advance the running stage by one step
    pub fn advance(&self) {
        if let Some(ref bar) = self.stage_bar {
            bar.inc(1);
        }
    }

    /// Steps completed in the running stage
    pub fn position(&self) -> u64 {
        self.stage_bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Complete the running stage, if any
    pub fn finish_stage(&mut self) {
        if let Some(bar) = self.stage_bar.take() {
            bar.finish_with_message("done");
            self.completed_stages.push(bar.prefix());
        }
    }

    /// Names of completed stages, in order
    pub fn completed_stages(&self) -> &[String] {
        &self.completed_stages
    }

    /// Finish and clear all progress displays
    pub fn finish(&mut self) {
        self.finish_stage();
        let _ = self.multi_progress.clear();
    }
}
