//! Mock UI for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::engine::PullProgress;
use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Recording UI for tests.
///
/// Every call is recorded; confirmations are answered from a queue of
/// canned answers, falling back to the question's default.
#[derive(Default)]
pub struct MockUI {
    /// Messages shown via `message`.
    pub messages: Vec<String>,
    /// Messages shown via `success`.
    pub successes: Vec<String>,
    /// Messages shown via `warning`.
    pub warnings: Vec<String>,
    /// Messages shown via `error`.
    pub errors: Vec<String>,
    /// Headers shown via `show_header`.
    pub headers: Vec<String>,
    /// Questions asked via `confirm`, with their defaults.
    pub confirms_asked: Vec<(String, bool)>,
    /// Recorded pull progress events.
    pub pull_events: Vec<PullProgress>,
    /// Number of `pull_complete` calls.
    pub pull_completes: usize,

    confirm_answers: VecDeque<bool>,
    spinner_log: Arc<Mutex<Vec<String>>>,
    mode: OutputMode,
}

impl MockUI {
    /// Create a mock UI in normal mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next `confirm` call.
    pub fn answer_confirm(&mut self, answer: bool) {
        self.confirm_answers.push_back(answer);
    }

    /// All spinner messages recorded so far, including finish lines.
    pub fn spinner_log(&self) -> Vec<String> {
        self.spinner_log.lock().unwrap().clone()
    }

    /// Every `message`/`success`/`warning` line joined for assertions.
    pub fn all_output(&self) -> String {
        let mut lines = Vec::new();
        lines.extend(self.messages.iter().cloned());
        lines.extend(self.successes.iter().cloned());
        lines.extend(self.warnings.iter().cloned());
        lines.extend(self.errors.iter().cloned());
        lines.join("\n")
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        self.confirms_asked.push((question.to_string(), default));
        Ok(self.confirm_answers.pop_front().unwrap_or(default))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinner_log
            .lock()
            .unwrap()
            .push(format!("start: {}", message));
        Box::new(MockSpinner {
            log: Arc::clone(&self.spinner_log),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn pull_progress(&mut self, event: &PullProgress) {
        self.pull_events.push(event.clone());
    }

    fn pull_complete(&mut self) {
        self.pull_completes += 1;
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner handle that records into the owning [`MockUI`]'s log.
pub struct MockSpinner {
    log: Arc<Mutex<Vec<String>>>,
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.log.lock().unwrap().push(format!("message: {}", msg));
    }

    fn finish_success(&mut self, msg: &str) {
        self.log.lock().unwrap().push(format!("success: {}", msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.log.lock().unwrap().push(format!("error: {}", msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_messages() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.success("done");
        ui.warning("careful");
        ui.error("broken");

        assert_eq!(ui.messages, vec!["hello"]);
        assert_eq!(ui.successes, vec!["done"]);
        assert_eq!(ui.warnings, vec!["careful"]);
        assert_eq!(ui.errors, vec!["broken"]);
    }

    #[test]
    fn confirm_uses_queued_answer_then_default() {
        let mut ui = MockUI::new();
        ui.answer_confirm(false);

        assert!(!ui.confirm("Delete it?", true).unwrap());
        // Queue exhausted, falls back to the default.
        assert!(ui.confirm("Delete it?", true).unwrap());
        assert_eq!(ui.confirms_asked.len(), 2);
    }

    #[test]
    fn spinner_calls_are_logged() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Working...");
        spinner.set_message("Still working...");
        spinner.finish_success("Done");

        let log = ui.spinner_log();
        assert_eq!(
            log,
            vec![
                "start: Working...",
                "message: Still working...",
                "success: Done"
            ]
        );
    }

    #[test]
    fn records_pull_events() {
        let mut ui = MockUI::new();
        ui.pull_progress(&PullProgress {
            status: "Downloading".into(),
            id: Some("a3f9".into()),
            progress: None,
        });
        ui.pull_complete();

        assert_eq!(ui.pull_events.len(), 1);
        assert_eq!(ui.pull_completes, 1);
    }
}
