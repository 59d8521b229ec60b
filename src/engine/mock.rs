//! Mock container engine for testing.
//!
//! `MockEngine` implements [`ContainerEngine`] with canned responses and
//! records every call for later assertion, mirroring the `MockUI` pattern.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{DemError, Result};

use super::{ContainerEngine, LogCallback, ProgressCallback, PullProgress};

/// Recording mock engine with configurable canned responses.
#[derive(Debug, Default)]
pub struct MockEngine {
    local_images: Vec<String>,
    search_results: HashMap<String, Vec<String>>,
    pull_events: Vec<PullProgress>,
    run_logs: Vec<String>,
    failing_pulls: Vec<String>,
    pulled: RefCell<Vec<String>>,
    removed: RefCell<Vec<String>>,
    runs: RefCell<Vec<(String, String)>>,
}

impl MockEngine {
    /// Create a mock engine with no local images and empty search results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the local image list returned by `local_images`.
    pub fn set_local_images(&mut self, images: &[&str]) {
        self.local_images = images.iter().map(|s| s.to_string()).collect();
    }

    /// Set the repositories returned when searching for `term`.
    pub fn set_search_result(&mut self, term: &str, repos: &[&str]) {
        self.search_results.insert(
            term.to_string(),
            repos.iter().map(|s| s.to_string()).collect(),
        );
    }

    /// Set the progress events every successful pull emits.
    pub fn set_pull_events(&mut self, events: Vec<PullProgress>) {
        self.pull_events = events;
    }

    /// Set the log lines every run emits.
    pub fn set_run_logs(&mut self, lines: &[&str]) {
        self.run_logs = lines.iter().map(|s| s.to_string()).collect();
    }

    /// Make pulls of the given image fail with an engine error.
    pub fn fail_pull_of(&mut self, name: &str) {
        self.failing_pulls.push(name.to_string());
    }

    /// Image names pulled so far, in call order.
    pub fn pulled(&self) -> Vec<String> {
        self.pulled.borrow().clone()
    }

    /// Image names removed so far, in call order.
    pub fn removed(&self) -> Vec<String> {
        self.removed.borrow().clone()
    }

    /// (image, command) pairs run so far, in call order.
    pub fn runs(&self) -> Vec<(String, String)> {
        self.runs.borrow().clone()
    }
}

impl ContainerEngine for MockEngine {
    fn local_images(&self) -> Result<Vec<String>> {
        Ok(self.local_images.clone())
    }

    fn search(&self, term: &str) -> Result<Vec<String>> {
        Ok(self.search_results.get(term).cloned().unwrap_or_default())
    }

    fn pull(&self, name: &str, on_progress: ProgressCallback) -> Result<()> {
        if self.failing_pulls.iter().any(|failing| failing == name) {
            return Err(DemError::Engine {
                message: format!("manifest for {} not found", name),
            });
        }

        self.pulled.borrow_mut().push(name.to_string());
        for event in &self.pull_events {
            on_progress(event.clone());
        }
        Ok(())
    }

    fn run(
        &self,
        image: &str,
        _workspace: &Path,
        command: &str,
        _privileged: bool,
        on_log: LogCallback,
    ) -> Result<()> {
        self.runs
            .borrow_mut()
            .push((image.to_string(), command.to_string()));
        for line in &self.run_logs {
            on_log(line);
        }
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<()> {
        self.removed.borrow_mut().push(name.to_string());
        Ok(())
    }
}
