//! Progress bar display for updates
//!
//! Runs on the main thread and only reads [`InstallEvent`]s from the worker.
//! The bar appears with the first install step, so a launch that finds the
//! checkout current shows nothing.

use std::sync::mpsc::Receiver;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::events::InstallEvent;
use crate::i18n::Labels;

/// How the event stream ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainResult {
    /// The worker reported `Finished`
    Finished,
    /// The worker hung up without finishing (it failed)
    Disconnected,
}

/// Percentage bar with a translated title and step label
pub struct ProgressDisplay {
    labels: Labels,
    bar: Option<ProgressBar>,
    hidden: bool,
}

impl ProgressDisplay {
    pub fn new(labels: Labels) -> Self {
        Self {
            labels,
            bar: None,
            hidden: false,
        }
    }

    fn bar(&mut self) -> &ProgressBar {
        let labels = &self.labels;
        let hidden = self.hidden;
        self.bar.get_or_insert_with(|| {
            let style = ProgressStyle::with_template("{prefix:.bold} [{bar:40.cyan/blue}] {pos:>3}% {msg}")
                .map(|style| style.progress_chars("#>-"))
                .unwrap_or_else(|_| ProgressStyle::default_bar());

            let bar = ProgressBar::with_draw_target(
                Some(100),
                if hidden {
                    ProgressDrawTarget::hidden()
                } else {
                    ProgressDrawTarget::stderr()
                },
            );
            bar.set_style(style);
            bar.set_prefix(labels.title.clone());
            bar
        })
    }

    /// Apply one event; returns true once the cycle has finished
    pub fn handle(&mut self, event: &InstallEvent) -> bool {
        match event {
            InstallEvent::Step { is_bulk_dependency } => {
                let label = self.labels.for_step(*is_bulk_dependency).to_string();
                self.bar().set_message(label);
                false
            }
            InstallEvent::Progress(progress) => {
                let percent = u64::from(progress.percent());
                self.bar().set_position(percent);
                false
            }
            InstallEvent::Finished => {
                if let Some(bar) = &self.bar {
                    bar.finish_and_clear();
                }
                true
            }
        }
    }

    /// Consume events until the worker finishes or hangs up
    pub fn drain(&mut self, events: &Receiver<InstallEvent>) -> DrainResult {
        for event in events {
            if self.handle(&event) {
                return DrainResult::Finished;
            }
        }
        self.abandon();
        DrainResult::Disconnected
    }

    /// Leave the bar where it stopped (on error)
    pub fn abandon(&self) {
        if let Some(bar) = &self.bar {
            bar.abandon();
        }
    }
}

#[cfg(test)]
impl ProgressDisplay {
    /// Display that tracks state without drawing
    fn hidden(labels: Labels) -> Self {
        Self {
            hidden: true,
            ..Self::new(labels)
        }
    }

    /// Current percentage, 0 before the first step
    fn percent(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    fn label(&self) -> Option<String> {
        self.bar.as_ref().map(ProgressBar::message)
    }

    fn is_visible(&self) -> bool {
        self.bar.is_some()
    }
}
