//! Progress event emission
//!
//! The pipeline announces each stage through a [`ProgressSink`]. Emission is
//! fire-and-forget: no delivery confirmation, no ordering guarantee across
//! separate listeners, and no blocking when nobody is listening.

use serde::{Deserialize, Serialize};

/// A pipeline progress event delivered to realtime listeners
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub label: String,
}

impl ProgressEvent {
    /// Create a new progress event
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Fire-and-forget sink for pipeline progress events
pub trait ProgressSink: Send + Sync {
    /// Emit a progress label; delivery is best-effort
    fn emit(&self, label: &str);
}

/// Sink that drops every event
///
/// The default for deployments without a realtime channel (serverless).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn emit(&self, _label: &str) {}
}
