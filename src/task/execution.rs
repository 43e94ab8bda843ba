use crate::api::{AccountApi, ApiError, CreateAccountRequest, CreateAccountResponse};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag marking a run as abandoned. The account call itself cannot be
/// interrupted; a cancelled run reports `ApiError::Cancelled` when it returns.
#[derive(Debug, Clone, Default)]
pub struct TaskCancelToken(Arc<AtomicBool>);

impl TaskCancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct TaskInvocation {
    pub run_id: u64,
    pub request: CreateAccountRequest,
    pub cancel_token: TaskCancelToken,
}

#[derive(Debug, Clone)]
pub struct TaskCompletion {
    pub run_id: u64,
    pub result: Result<CreateAccountResponse, ApiError>,
}

pub fn execute_invocation(api: &dyn AccountApi, invocation: TaskInvocation) -> TaskCompletion {
    let run_id = invocation.run_id;
    if invocation.cancel_token.is_cancelled() {
        return TaskCompletion {
            run_id,
            result: Err(ApiError::Cancelled),
        };
    }

    let result = api.create_account(&invocation.request);
    let result = if invocation.cancel_token.is_cancelled() {
        Err(ApiError::Cancelled)
    } else {
        result
    };

    TaskCompletion { run_id, result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountType;
    use crate::api::StubAccountApi;
    use std::time::Duration;

    fn invocation(run_id: u64) -> TaskInvocation {
        TaskInvocation {
            run_id,
            request: CreateAccountRequest {
                nickname: "Daily spend".to_string(),
                account_type: AccountType::Everyday,
                savings_goal: None,
            },
            cancel_token: TaskCancelToken::new(),
        }
    }

    #[test]
    fn completion_carries_run_id_and_result() {
        let api = StubAccountApi::new(Duration::ZERO, 0.0);
        let completion = execute_invocation(&api, invocation(3));
        assert_eq!(completion.run_id, 3);
        assert!(completion.result.is_ok());
    }

    #[test]
    fn cancelled_before_start_skips_the_call() {
        let api = StubAccountApi::new(Duration::ZERO, 0.0);
        let invocation = invocation(1);
        invocation.cancel_token.cancel();
        let completion = execute_invocation(&api, invocation);
        assert_eq!(completion.result, Err(ApiError::Cancelled));
    }

    #[test]
    fn token_clones_share_state() {
        let token = TaskCancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
