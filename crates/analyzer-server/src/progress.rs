//! Broadcast-backed progress sink
//!
//! Fans pipeline progress events out to every connected realtime client
//! through a tokio broadcast channel. Emission never blocks and never
//! fails: with no listeners connected the event is simply dropped.

use analyzer_core::{ProgressEvent, ProgressSink};
use tokio::sync::broadcast;

/// Default capacity of the progress channel
const DEFAULT_CAPACITY: usize = 256;

/// Publishes progress events to all subscribed realtime listeners
#[derive(Debug, Clone)]
pub struct BroadcastProgress {
    sender: broadcast::Sender<ProgressEvent>,
}

impl BroadcastProgress {
    /// Create a hub with the default channel capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a hub with a specific channel capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe a new listener
    pub fn subscribe(&self) -> broadcast::Receiver<ProgressEvent> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for BroadcastProgress {
    fn emit(&self, label: &str) {
        // send errors only when no receiver is connected; fire-and-forget
        let _ = self.sender.send(ProgressEvent::new(label));
    }
}
