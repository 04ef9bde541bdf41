//! Terminal progress display for photo export

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::placement::Point;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static EXPORT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Photos: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar advanced once per saved photo
pub struct ProgressManager {
    bar: ProgressBar,
    total: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create an idle progress manager
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            total: 0,
        }
    }

    /// Show a bar sized for `photo_count` photos
    pub fn initialize(&mut self, photo_count: usize) {
        self.total = photo_count;
        let bar = ProgressBar::new(photo_count as u64);
        bar.set_style(EXPORT_STYLE.clone());
        self.bar = bar;
    }

    /// Photos announced by the last [`Self::initialize`]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Photos saved so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Hide the bar while `f` writes to the terminal, then redraw it
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Record that the photo at `index` was written
    pub fn photo_saved(&self, index: usize, origin: Point) {
        self.bar.set_message(format!("#{index} at {origin}"));
        self.bar.inc(1);
    }

    /// Close the bar
    pub fn finish(&self) {
        self.bar.finish_with_message("All photos saved");
    }
}
