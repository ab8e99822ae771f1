//! Terminal progress for dictionary dumps.

use std::cell::RefCell;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use prakriya_core::application::ports::Progress;

const BAR_TEMPLATE: &str = "{msg} [{bar:40}] {pos}/{len} ({eta})";
const SPINNER_TEMPLATE: &str = "{spinner} {msg} ({pos})";

/// [`Progress`] backed by `indicatif`; one bar per dictionary.
pub struct TerminalProgress {
    visible: bool,
    bar: RefCell<Option<ProgressBar>>,
}

impl TerminalProgress {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            bar: RefCell::new(None),
        }
    }

    fn make_bar(&self, total: Option<u64>) -> ProgressBar {
        if !self.visible {
            return ProgressBar::hidden();
        }
        match total {
            Some(len) => {
                let bar = ProgressBar::new(len);
                if let Ok(style) = ProgressStyle::with_template(BAR_TEMPLATE) {
                    bar.set_style(style.progress_chars("=> "));
                }
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::with_template(SPINNER_TEMPLATE) {
                    bar.set_style(style);
                }
                bar.enable_steady_tick(Duration::from_millis(120));
                bar
            }
        }
    }
}

impl Progress for TerminalProgress {
    fn start(&self, label: &str, total: Option<u64>) {
        let bar = self.make_bar(total);
        bar.set_message(label.to_string());
        if let Some(previous) = self.bar.replace(Some(bar)) {
            previous.abandon();
        }
    }

    fn advance(&self) {
        if let Some(bar) = self.bar.borrow().as_ref() {
            bar.inc(1);
        }
    }

    fn finish(&self, message: &str) {
        if let Some(bar) = self.bar.take() {
            bar.finish_with_message(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_bar_tracks_position() {
        let progress = TerminalProgress::new(false);
        progress.start("vidyut-tiN", Some(3));
        progress.advance();
        progress.advance();
        assert_eq!(progress.bar.borrow().as_ref().map(|b| b.position()), Some(2));

        progress.finish("done");
        assert!(progress.bar.borrow().is_none());
    }

    #[test]
    fn advance_without_start_is_a_no_op() {
        let progress = TerminalProgress::new(false);
        progress.advance();
        progress.finish("nothing");
    }
}
