//! Background dispatch of component workers.

use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::debug;
use tokio::task;
use tokio_util::sync::CancellationToken;

use crate::component::events::{MessageLevel, Reporter, SolveEvent};
use crate::component::worker::{SolveError, WorkContext, WorkStatus, Worker};

/// A dispatched solve running on its own background thread.
///
/// The handle owns the run's cancellation token and the receiving end of its
/// event stream. Dropping the handle abandons the run: the thread keeps
/// going until its next cancellation checkpoint, but nobody is left to
/// observe it.
pub struct SolveHandle {
    events: mpsc::Receiver<SolveEvent>,
    cancel: CancellationToken,
    handle: JoinHandle<Result<WorkStatus, SolveError>>,
}

impl SolveHandle {
    /// Spawn `worker.work` on a background thread.
    ///
    /// The dispatcher emits [`SolveEvent::Done`] only when the worker
    /// completes; skipped and cancelled runs end silently, and a failed run
    /// ends with an error-severity message.
    pub fn dispatch(mut worker: Box<dyn Worker>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let ctx = WorkContext::new(cancel.clone(), Reporter::new(event_tx.clone()));

        let handle = thread::spawn(move || {
            let status = worker.work(&ctx);
            match &status {
                Ok(WorkStatus::Completed(_)) => {
                    let _ = event_tx.send(SolveEvent::Done);
                }
                Ok(WorkStatus::Skipped) => debug!("solve skipped, nothing to do"),
                Ok(WorkStatus::Cancelled) => debug!("solve cancelled before completion"),
                Err(err) => {
                    let _ = event_tx.send(SolveEvent::Message {
                        level: MessageLevel::Error,
                        text: err.to_string(),
                    });
                }
            }
            status
        });

        Self {
            events: event_rx,
            cancel,
            handle,
        }
    }

    /// Request cooperative cancellation. The worker observes it at its next
    /// checkpoint; an in-flight automation call is not interrupted.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Drain all events currently pending without blocking.
    pub fn drain_events(&self) -> Vec<SolveEvent> {
        self.events.try_iter().collect()
    }

    /// Wait up to `timeout` for the next event.
    pub fn recv_event(&self, timeout: Duration) -> Option<SolveEvent> {
        self.events.recv_timeout(timeout).ok()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the worker thread ends and return how the run finished.
    pub fn join(self) -> Result<WorkStatus, SolveError> {
        self.handle.join().map_err(|_| SolveError::WorkerPanicked)?
    }

    /// Async join, bridging the worker thread into tokio.
    pub async fn finish(self) -> Result<WorkStatus, SolveError> {
        task::spawn_blocking(move || self.join())
            .await
            .map_err(|_| SolveError::WorkerPanicked)?
    }
}
