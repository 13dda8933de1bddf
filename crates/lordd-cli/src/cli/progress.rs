//! Console progress bar for downloads.

use indicatif::{ProgressBar, ProgressStyle};
use lordd_core::fetch::{Progress, ProgressSink};

const BAR_TEMPLATE: &str = "{msg} [{wide_bar}] {bytes}/{total_bytes} {bytes_per_sec} ETA {eta}";
const SPINNER_TEMPLATE: &str = "{spinner} {msg} {bytes} {bytes_per_sec}";

/// Spinner with a byte counter until the server's size is known, then a sized bar.
pub struct DownloadBar {
    bar: ProgressBar,
    sized: bool,
}

impl DownloadBar {
    pub fn new(label: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(style(SPINNER_TEMPLATE));
        bar.set_message(label.to_string());
        Self { bar, sized: false }
    }
}

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template)
        .map(|s| s.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

impl ProgressSink for DownloadBar {
    fn on_progress(&mut self, progress: Progress) {
        if let (Some(total), false) = (progress.total, self.sized) {
            self.bar.set_length(total);
            self.bar.set_style(style(BAR_TEMPLATE));
            self.sized = true;
        }
        self.bar.set_position(progress.bytes_so_far);
    }

    fn on_finish(&mut self, last: Progress) {
        self.bar.set_position(last.bytes_so_far);
        self.bar.finish();
    }
}

impl Drop for DownloadBar {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.abandon();
        }
    }
}
