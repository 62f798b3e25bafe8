//! The background-worker contract.

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::automation::{ApiError, AttachError};
use crate::component::events::Reporter;
use crate::component::node::{InputData, OutputData};

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("missing input '{0}'")]
    MissingInput(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Attach(#[from] AttachError),
    #[error("area object '{area}' references joint '{joint}' not present in the model")]
    UnknownJointReference { area: String, joint: String },
    #[error("solve worker panicked")]
    WorkerPanicked,
}

/// How a finished `work` call left the run.
#[derive(Debug)]
pub enum WorkStatus {
    /// The run completed; publish these outputs.
    Completed(OutputData),
    /// Nothing to do (e.g. the trigger input was false); keep prior outputs.
    Skipped,
    /// Cancellation was observed at a checkpoint; keep prior outputs.
    Cancelled,
}

/// Capabilities handed to a worker for the duration of one run: cancellation
/// checking and progress/message reporting.
pub struct WorkContext {
    cancel: CancellationToken,
    reporter: Reporter,
}

impl WorkContext {
    pub fn new(cancel: CancellationToken, reporter: Reporter) -> Self {
        Self { cancel, reporter }
    }

    /// Cooperative cancellation check. Polled between steps and inside long
    /// per-item loops; an in-flight automation call is never interrupted.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    pub fn progress(&self, label: &str, fraction: f64) {
        self.reporter.progress(label, fraction);
    }

    pub fn error(&self, text: &str) {
        self.reporter.error(text);
    }
}

/// One solve's unit of background work.
///
/// `gather` runs on the dispatching thread and extracts whatever the worker
/// needs from the node's inputs; `work` runs on a background thread and may
/// block. A worker instance is used for exactly one run.
pub trait Worker: Send {
    fn gather(&mut self, inputs: &InputData) -> Result<(), SolveError>;
    fn work(&mut self, ctx: &WorkContext) -> Result<WorkStatus, SolveError>;
}
