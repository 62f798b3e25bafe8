//! Node façade: owns a component's published outputs across solves and
//! drives its background runs.

use std::sync::Arc;

use log::{error, warn};

use crate::component::events::{MessageLevel, SolveEvent};
use crate::component::node::{Component, InputData, OutputData};
use crate::component::solver::SolveHandle;
use crate::component::worker::{SolveError, WorkStatus};

/// One placed node instance backed by an async component.
///
/// `solve` gathers the current inputs into a fresh worker and dispatches it;
/// `update` pumps the event stream and, once the run completes, publishes
/// its outputs. Outputs persist unchanged across skipped, cancelled and
/// failed runs — the host sees whatever the previous successful solve
/// produced.
pub struct AsyncNode {
    component: Arc<dyn Component>,
    outputs: OutputData,
    messages: Vec<(MessageLevel, String)>,
    active: Option<SolveHandle>,
}

impl AsyncNode {
    pub fn new(component: Arc<dyn Component>) -> Self {
        Self {
            component,
            outputs: OutputData::new(),
            messages: Vec::new(),
            active: None,
        }
    }

    pub fn component(&self) -> &Arc<dyn Component> {
        &self.component
    }

    /// Outputs of the last completed run.
    pub fn outputs(&self) -> &OutputData {
        &self.outputs
    }

    /// Runtime messages accumulated by the current/last run.
    pub fn messages(&self) -> &[(MessageLevel, String)] {
        &self.messages
    }

    pub fn is_solving(&self) -> bool {
        self.active.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Start a new solve from `inputs`. A still-running previous solve is
    /// cancelled and abandoned; its results are never published.
    pub fn solve(&mut self, inputs: &InputData) -> Result<(), SolveError> {
        if let Some(previous) = self.active.take() {
            warn!(
                "'{}': new solve requested while a run was in flight, cancelling it",
                self.component.descriptor().name
            );
            previous.cancel();
        }
        self.messages.clear();

        let mut worker = self.component.create_worker();
        worker.gather(inputs)?;
        self.active = Some(SolveHandle::dispatch(worker));
        Ok(())
    }

    /// Request cancellation of the in-flight run, if any.
    pub fn cancel(&self) {
        if let Some(handle) = &self.active {
            handle.cancel();
        }
    }

    /// Pump pending events; when the run has ended, join it and publish a
    /// completed run's outputs. Returns the drained events so the host can
    /// render progress.
    pub fn update(&mut self) -> Vec<SolveEvent> {
        let mut events = Vec::new();
        let finished = match &self.active {
            Some(handle) => {
                events.extend(handle.drain_events());
                handle.is_finished()
            }
            None => false,
        };

        if finished {
            if let Some(handle) = self.active.take() {
                events.extend(handle.drain_events());
                match handle.join() {
                    Ok(WorkStatus::Completed(outputs)) => self.outputs = outputs,
                    Ok(WorkStatus::Skipped) | Ok(WorkStatus::Cancelled) => {}
                    Err(err) => {
                        error!(
                            "'{}': solve failed: {}",
                            self.component.descriptor().name,
                            err
                        );
                    }
                }
            }
        }

        for event in &events {
            if let SolveEvent::Message { level, text } = event {
                self.messages.push((*level, text.clone()));
            }
        }
        events
    }
}
