use crate::api::AccountApi;
use crate::task::execution::{TaskCompletion, TaskInvocation, execute_invocation};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

/// Runs account calls on worker threads and hands completions back to the
/// loop that owns the state.
pub struct TaskExecutor {
    api: Arc<dyn AccountApi>,
    completion_tx: Sender<TaskCompletion>,
    completion_rx: Receiver<TaskCompletion>,
}

impl TaskExecutor {
    pub fn new(api: Arc<dyn AccountApi>) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<TaskCompletion>();
        Self {
            api,
            completion_tx,
            completion_rx,
        }
    }

    pub fn spawn(&self, invocation: TaskInvocation) {
        let api = Arc::clone(&self.api);
        let completion_tx = self.completion_tx.clone();
        tracing::debug!(run_id = invocation.run_id, "spawning account request");
        std::thread::spawn(move || {
            let completion = execute_invocation(api.as_ref(), invocation);
            let _ = completion_tx.send(completion);
        });
    }

    pub fn drain_ready(&self) -> Vec<TaskCompletion> {
        let mut out = Vec::<TaskCompletion>::new();
        loop {
            match self.completion_rx.try_recv() {
                Ok(completion) => out.push(completion),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }

    /// Blocks up to `timeout` for the next completion.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<TaskCompletion> {
        match self.completion_rx.recv_timeout(timeout) {
            Ok(completion) => Some(completion),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountType;
    use crate::api::{CreateAccountRequest, StubAccountApi};
    use crate::task::execution::TaskCancelToken;

    #[test]
    fn completion_arrives_on_the_channel() {
        let executor = TaskExecutor::new(Arc::new(StubAccountApi::new(Duration::ZERO, 0.0)));
        executor.spawn(TaskInvocation {
            run_id: 11,
            request: CreateAccountRequest {
                nickname: "Daily spend".to_string(),
                account_type: AccountType::Everyday,
                savings_goal: None,
            },
            cancel_token: TaskCancelToken::new(),
        });

        let completion = executor
            .wait_timeout(Duration::from_secs(5))
            .expect("completion should arrive");
        assert_eq!(completion.run_id, 11);
        assert!(completion.result.is_ok());
        assert!(executor.drain_ready().is_empty());
    }

    #[test]
    fn idle_executor_times_out() {
        let executor = TaskExecutor::new(Arc::new(StubAccountApi::new(Duration::ZERO, 0.0)));
        assert!(executor.wait_timeout(Duration::from_millis(5)).is_none());
    }
}
