//! Checkpoint hooks for long-running loops.
//!
//! Every `checkpoint_interval` loop iterations, counted over the whole run,
//! the evaluator reports its progress to a [`CheckpointHandler`]. A handler
//! may yield the thread or record progress; it cannot change the computed
//! scene.

use std::time::Duration;

/// Progress of a run at a checkpoint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Progress {
    /// Iterations completed by every loop of the run.
    pub iterations: u64,
    /// Wall-clock time since the run started.
    pub elapsed: Duration,
    /// Simulated seconds so far.
    pub scene_time: f64,
}

/// Receives checkpoints from a running evaluator.
pub trait CheckpointHandler {
    fn checkpoint(&mut self, progress: Progress);
}

/// Ignores checkpoints.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopCheckpoint;

impl CheckpointHandler for NoopCheckpoint {
    #[inline]
    fn checkpoint(&mut self, _progress: Progress) {}
}

/// Yields the current thread at every checkpoint, so a run sharing a
/// thread pool stays responsive.
#[derive(Copy, Clone, Debug, Default)]
pub struct YieldCheckpoint;

impl CheckpointHandler for YieldCheckpoint {
    fn checkpoint(&mut self, progress: Progress) {
        tracing::trace!(iterations = progress.iterations, "yielding at checkpoint");
        std::thread::yield_now();
    }
}

impl<F: FnMut(Progress)> CheckpointHandler for F {
    fn checkpoint(&mut self, progress: Progress) {
        self(progress);
    }
}
