use granska_core::{ProgressNotifier, SilentNotifier};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner-backed notifier for interactive runs. The spinner is created
/// lazily on the first message and torn down on `clear_all`.
pub struct SpinnerNotifier {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerNotifier {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }
}

impl ProgressNotifier for SpinnerNotifier {
    fn notify(&self, message: &str) {
        let Ok(mut guard) = self.bar.lock() else {
            return;
        };
        let bar = guard.get_or_insert_with(|| {
            let bar = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
                bar.set_style(style);
            }
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        });
        bar.set_message(message.to_string());
    }

    fn clear_all(&self) {
        let Ok(mut guard) = self.bar.lock() else {
            return;
        };
        if let Some(bar) = guard.take() {
            bar.finish_and_clear();
        }
    }
}

/// JSON runs stay silent so stdout carries only the payload.
pub fn notifier(json: bool) -> Box<dyn ProgressNotifier> {
    if json {
        Box::new(SilentNotifier)
    } else {
        Box::new(SpinnerNotifier::new())
    }
}
