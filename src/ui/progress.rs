//! Live rendering of image pull progress.

use std::collections::HashMap;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::engine::PullProgress;

use super::theme::DemTheme;

/// Renders a streaming image pull, one line per layer.
///
/// Layer events update the bar keyed by their layer id; events without a
/// layer id (digest lines, final status) are printed above the bars. The
/// display holds its lines until [`finish`](Self::finish) clears them.
pub struct PullProgressDisplay {
    multi: MultiProgress,
    layers: HashMap<String, ProgressBar>,
    theme: DemTheme,
}

impl PullProgressDisplay {
    /// Create an empty display.
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            layers: HashMap::new(),
            theme: DemTheme::new(),
        }
    }

    /// Render one progress event.
    pub fn handle(&mut self, event: &PullProgress) {
        match &event.id {
            Some(id) => {
                let bar = self.layers.entry(id.clone()).or_insert_with(|| {
                    let bar = self.multi.add(ProgressBar::new_spinner());
                    bar.set_style(
                        ProgressStyle::default_spinner()
                            .template("{msg}")
                            .unwrap(),
                    );
                    bar
                });

                let mut line = format!(
                    "{} {}",
                    self.theme.dim.apply_to(format!("{}:", id)),
                    event.status
                );
                if let Some(progress) = &event.progress {
                    line.push(' ');
                    line.push_str(&self.theme.dim.apply_to(progress).to_string());
                }
                bar.set_message(line);
            }
            None => {
                let _ = self.multi.println(&event.status);
            }
        }
    }

    /// Number of layers currently tracked.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Clear the layer bars once the pull has finished.
    pub fn finish(&mut self) {
        for bar in self.layers.values() {
            bar.finish_and_clear();
        }
        self.layers.clear();
        let _ = self.multi.clear();
    }
}

impl Default for PullProgressDisplay {
    fn default() -> Self {
        Self::new()
    }
}
