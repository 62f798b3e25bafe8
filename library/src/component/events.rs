//! Events a running solve streams back to the foreground.

use std::sync::mpsc;

/// Severity of a runtime message shown on the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageLevel {
    Remark,
    Warning,
    Error,
}

/// One event emitted during a background solve.
///
/// `Done` carries no payload: results travel back through the worker's
/// return value and are read by the façade after completion.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveEvent {
    /// Coarse progress; `fraction` is in `[0, 1]`.
    Progress { label: String, fraction: f64 },
    /// A user-visible runtime message.
    Message { level: MessageLevel, text: String },
    /// The run completed and outputs are available.
    Done,
}

/// Handle a worker publishes progress and messages through.
///
/// Sends are fire-and-forget; a disconnected receiver (an abandoned run)
/// silently drops events.
#[derive(Clone)]
pub struct Reporter {
    tx: mpsc::Sender<SolveEvent>,
}

impl Reporter {
    pub fn new(tx: mpsc::Sender<SolveEvent>) -> Self {
        Self { tx }
    }

    pub fn progress(&self, label: &str, fraction: f64) {
        let _ = self.tx.send(SolveEvent::Progress {
            label: label.to_string(),
            fraction,
        });
    }

    pub fn message(&self, level: MessageLevel, text: &str) {
        let _ = self.tx.send(SolveEvent::Message {
            level,
            text: text.to_string(),
        });
    }

    pub fn error(&self, text: &str) {
        self.message(MessageLevel::Error, text);
    }
}
