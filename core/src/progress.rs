/// Progress sink for the scan and test passes.
///
/// Fire-and-forget: the pipeline never reads anything back, so any
/// implementation (terminal spinner, log line, nothing) will do.
pub trait ProgressNotifier: Send + Sync {
    fn notify(&self, message: &str);

    fn clear_all(&self);
}

/// Notifier that discards everything. Used for JSON runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl ProgressNotifier for SilentNotifier {
    fn notify(&self, _message: &str) {}

    fn clear_all(&self) {}
}
