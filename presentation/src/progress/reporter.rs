//! Progress reporting while requests are in flight

use indicatif::{ProgressBar, ProgressStyle};
use sentiment_application::{ProgressNotifier, RequestKind};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner for the request currently in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_request_start(&self, kind: RequestKind) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(kind.activity());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_request_complete(&self, _kind: RequestKind, _success: bool) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_request_start(RequestKind::Login);
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_request_complete(RequestKind::Login, true);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_complete_without_start_is_harmless() {
        let reporter = ProgressReporter::new();
        reporter.on_request_complete(RequestKind::Predict, false);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
