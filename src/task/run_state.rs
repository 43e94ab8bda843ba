use crate::task::execution::TaskCancelToken;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct ActiveRun {
    run_id: u64,
    started_at: Instant,
    cancel_token: TaskCancelToken,
}

/// Run bookkeeping for a single-flight task: issues run ids, remembers the one
/// in flight, and tells stale completions apart from the current one.
#[derive(Debug, Clone, Default)]
pub struct TaskRunState {
    active: Option<ActiveRun>,
    sequence: u64,
}

impl TaskRunState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Starts a run and returns its id and cancel token. Callers must check
    /// `is_running` first.
    pub fn start(&mut self, now: Instant) -> (u64, TaskCancelToken) {
        self.sequence = self.sequence.saturating_add(1);
        let cancel_token = TaskCancelToken::new();
        self.active = Some(ActiveRun {
            run_id: self.sequence,
            started_at: now,
            cancel_token: cancel_token.clone(),
        });
        (self.sequence, cancel_token)
    }

    /// Finishes `run_id` if it is the active run, returning how long it took.
    /// Returns `None` for stale or unknown ids.
    pub fn finish(&mut self, run_id: u64, now: Instant) -> Option<Duration> {
        let run = self.active.take_if(|run| run.run_id == run_id)?;
        Some(now.saturating_duration_since(run.started_at))
    }

    /// Cancels and forgets the active run; its completion will be stale.
    pub fn abandon(&mut self) -> Option<u64> {
        let run = self.active.take()?;
        run.cancel_token.cancel();
        Some(run.run_id)
    }
}
