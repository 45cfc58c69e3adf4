//! Progress events from the update worker to the UI
//!
//! The worker only ever talks to a [`Notifier`]. The production notifier is
//! the sending half of a bounded channel; the UI thread drains the receiving
//! half on its own schedule and never touches installer state.

use std::sync::mpsc::{Receiver, SyncSender, sync_channel};

/// Capacity of the worker -> UI channel
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Emitted after each successful install step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    pub completed: usize,
    pub total: usize,
    pub is_bulk_dependency: bool,
}

impl ProgressEvent {
    /// Completion percentage, rounded down
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let pct = (self.completed.min(self.total) * 100) / self.total;
        u8::try_from(pct).unwrap_or(100)
    }
}

/// Everything the worker reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallEvent {
    /// An install step is about to start; selects the label wording
    Step { is_bulk_dependency: bool },
    Progress(ProgressEvent),
    /// The update cycle finished successfully
    Finished,
}

/// Receiver of worker events
///
/// Implementations must tolerate repeated calls and calls after completion.
pub trait Notifier: Send {
    fn notify(&self, event: InstallEvent);
}

/// Sending half of the worker -> UI channel
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: SyncSender<InstallEvent>,
}

impl Notifier for ChannelNotifier {
    fn notify(&self, event: InstallEvent) {
        // The UI may already be gone; late events are dropped.
        let _ = self.sender.send(event);
    }
}

/// Create a connected notifier / receiver pair
pub fn channel() -> (ChannelNotifier, Receiver<InstallEvent>) {
    let (sender, receiver) = sync_channel(EVENT_CHANNEL_CAPACITY);
    (ChannelNotifier { sender }, receiver)
}
