use crate::host::Presenter;
use std::sync::Mutex;

/// Presenter that records every host-side effect for assertions.
#[derive(Default)]
pub(crate) struct RecordingPresenter {
    pub flashes: Mutex<Vec<String>>,
}

impl Presenter for RecordingPresenter {
    fn render_landing(&self, target_url: &str) -> String {
        format!("<html><body>This page has moved to {target_url}</body></html>")
    }

    fn register_flash(&self, message: &str) {
        self.flashes.lock().unwrap().push(message.to_string());
    }

    fn localize(&self, key: &str) -> String {
        format!("[{key}]")
    }
}
