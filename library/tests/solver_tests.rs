use std::thread;
use std::time::Duration;

use library::component::{
    InputData, OutputData, SolveError, SolveEvent, SolveHandle, Value, WorkContext, WorkStatus,
    Worker,
};

/// Completes immediately with a single text output.
struct EchoWorker {
    text: String,
}

impl Worker for EchoWorker {
    fn gather(&mut self, _inputs: &InputData) -> Result<(), SolveError> {
        Ok(())
    }

    fn work(&mut self, ctx: &WorkContext) -> Result<WorkStatus, SolveError> {
        ctx.progress("echo", 0.0);
        let mut outputs = OutputData::new();
        outputs.set_list("text", vec![Value::Text(self.text.clone())]);
        Ok(WorkStatus::Completed(outputs))
    }
}

/// Loops in small sleeps, honoring cancellation between iterations.
struct SleepyWorker {
    iterations: usize,
}

impl Worker for SleepyWorker {
    fn gather(&mut self, _inputs: &InputData) -> Result<(), SolveError> {
        Ok(())
    }

    fn work(&mut self, ctx: &WorkContext) -> Result<WorkStatus, SolveError> {
        for index in 0..self.iterations {
            if ctx.is_cancelled() {
                return Ok(WorkStatus::Cancelled);
            }
            ctx.progress("step", index as f64 / self.iterations as f64);
            thread::sleep(Duration::from_millis(10));
        }
        Ok(WorkStatus::Completed(OutputData::new()))
    }
}

/// Requires a boolean "execute" input at gather time.
struct StrictWorker;

impl Worker for StrictWorker {
    fn gather(&mut self, inputs: &InputData) -> Result<(), SolveError> {
        inputs
            .boolean("execute")
            .ok_or_else(|| SolveError::MissingInput("execute".to_string()))?;
        Ok(())
    }

    fn work(&mut self, _ctx: &WorkContext) -> Result<WorkStatus, SolveError> {
        Ok(WorkStatus::Skipped)
    }
}

struct PanickyWorker;

impl Worker for PanickyWorker {
    fn gather(&mut self, _inputs: &InputData) -> Result<(), SolveError> {
        Ok(())
    }

    fn work(&mut self, _ctx: &WorkContext) -> Result<WorkStatus, SolveError> {
        panic!("boom");
    }
}

#[test]
fn completed_run_emits_done_after_its_events() {
    let handle = SolveHandle::dispatch(Box::new(EchoWorker {
        text: "hello".to_string(),
    }));

    let mut events = Vec::new();
    while let Some(event) = handle.recv_event(Duration::from_secs(5)) {
        let done = event == SolveEvent::Done;
        events.push(event);
        if done {
            break;
        }
    }

    assert_eq!(
        events,
        vec![
            SolveEvent::Progress {
                label: "echo".to_string(),
                fraction: 0.0
            },
            SolveEvent::Done,
        ]
    );

    match handle.join() {
        Ok(WorkStatus::Completed(outputs)) => {
            assert_eq!(outputs.list("text").unwrap().len(), 1);
        }
        other => panic!("expected completion, got {:?}", other),
    }
}

#[test]
fn cancelled_run_never_delivers_done() {
    let handle = SolveHandle::dispatch(Box::new(SleepyWorker { iterations: 1000 }));

    // Let it make some progress first.
    assert!(handle.recv_event(Duration::from_secs(5)).is_some());
    handle.cancel();

    let status = handle.join().expect("worker errored");
    assert!(matches!(status, WorkStatus::Cancelled));
}

#[test]
fn cancelled_run_drains_without_done_event() {
    let handle = SolveHandle::dispatch(Box::new(SleepyWorker { iterations: 1000 }));
    handle.cancel();

    for _ in 0..500 {
        if handle.is_finished() {
            break;
        }
        thread::sleep(Duration::from_millis(5));
    }
    assert!(handle.is_finished());

    let events = handle.drain_events();
    assert!(events.iter().all(|event| *event != SolveEvent::Done));

    let status = handle.join().expect("worker errored");
    assert!(matches!(status, WorkStatus::Cancelled));
}

#[test]
fn worker_panic_surfaces_as_an_error() {
    let handle = SolveHandle::dispatch(Box::new(PanickyWorker));
    match handle.join() {
        Err(SolveError::WorkerPanicked) => {}
        other => panic!("expected panic error, got {:?}", other),
    }
}

#[test]
fn gather_failure_is_reported_synchronously() {
    let mut worker = StrictWorker;
    match worker.gather(&InputData::new()) {
        Err(SolveError::MissingInput(pin)) => assert_eq!(pin, "execute"),
        other => panic!("expected missing input, got {:?}", other),
    }
}

#[tokio::test]
async fn finish_joins_from_async_context() {
    let handle = SolveHandle::dispatch(Box::new(EchoWorker {
        text: "async".to_string(),
    }));

    match handle.finish().await {
        Ok(WorkStatus::Completed(outputs)) => {
            let list = outputs.list("text").unwrap();
            assert_eq!(list[0].as_text(), Some("async"));
        }
        other => panic!("expected completion, got {:?}", other),
    }
}
