use crate::account::{AccountField, AccountFormInput, AccountType};
use crate::api::CreateAccountResponse;
use crate::state::validation::ValidationState;
use crate::task::{TaskCompletion, TaskInvocation, TaskRunState};
use crate::validation::validate_for_submission;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Failed(String),
    Succeeded,
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// A submission is already in flight; nothing changed.
    Busy,
    /// Field errors were stored; no request was made.
    Invalid,
    Dispatched(TaskInvocation),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompletionOutcome {
    /// Completion of an abandoned or superseded run.
    Stale,
    Failed(String),
    Succeeded(CreateAccountResponse),
}

/// One instance of the create-account form: raw input, field errors and the
/// single-flight submission state.
#[derive(Debug, Default)]
pub struct FormSession {
    input: AccountFormInput,
    validation: ValidationState,
    submission: SubmissionState,
    runs: TaskRunState,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &AccountFormInput {
        &self.input
    }

    pub fn validation(&self) -> &ValidationState {
        &self.validation
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_pending(&self) -> bool {
        self.submission.is_pending()
    }

    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.input.nickname = nickname.into();
        self.validation.clear_field_error(AccountField::Nickname);
    }

    pub fn set_account_type(&mut self, account_type: AccountType) {
        self.input.account_type = account_type;
        self.validation.clear_field_error(AccountField::AccountType);
        if account_type == AccountType::Everyday {
            // The goal field is hidden for everyday accounts.
            self.validation.clear_field_error(AccountField::SavingsGoal);
        }
    }

    pub fn set_savings_goal(&mut self, goal: Option<f64>) {
        self.input.savings_goal = goal;
        self.validation.clear_field_error(AccountField::SavingsGoal);
    }

    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        if self.runs.is_running() {
            tracing::debug!("submit ignored: request already in flight");
            return SubmitOutcome::Busy;
        }

        self.validation.mark_as_submitted();

        let request = match validate_for_submission(&self.input) {
            Ok(request) => request,
            Err(errors) => {
                let fields: Vec<&str> = errors.keys().map(|field| field.as_str()).collect();
                tracing::info!(?fields, "form has validation errors");
                self.validation.set_validation_errors(errors);
                return SubmitOutcome::Invalid;
            }
        };

        self.validation.clear_all_errors();
        self.submission = SubmissionState::Pending;
        let (run_id, cancel_token) = self.runs.start(now);
        tracing::info!(
            run_id,
            nickname = %request.nickname,
            account_type = %request.account_type,
            "submitting account"
        );

        SubmitOutcome::Dispatched(TaskInvocation {
            run_id,
            request,
            cancel_token,
        })
    }

    pub fn complete(&mut self, completion: TaskCompletion, now: Instant) -> CompletionOutcome {
        let Some(elapsed) = self.runs.finish(completion.run_id, now) else {
            tracing::debug!(run_id = completion.run_id, "dropping stale completion");
            return CompletionOutcome::Stale;
        };

        match completion.result {
            Ok(response) => {
                tracing::info!(
                    run_id = completion.run_id,
                    account_id = %response.account_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "account created"
                );
                self.submission = SubmissionState::Succeeded;
                CompletionOutcome::Succeeded(response)
            }
            Err(err) => {
                tracing::warn!(run_id = completion.run_id, error = %err, "failed to create account");
                let message = err.to_string();
                self.submission = SubmissionState::Failed(message.clone());
                CompletionOutcome::Failed(message)
            }
        }
    }

    /// Abandons the in-flight request, if any. Its completion will be dropped.
    pub fn cancel_in_flight(&mut self) -> bool {
        let Some(run_id) = self.runs.abandon() else {
            return false;
        };
        tracing::info!(run_id, "abandoned in-flight account request");
        self.submission = SubmissionState::Idle;
        true
    }

    /// Starts a new form session. Run ids keep counting so completions from an
    /// earlier session stay stale.
    pub fn reset(&mut self) {
        self.cancel_in_flight();
        self.input = AccountFormInput::default();
        self.validation.reset();
        self.submission = SubmissionState::Idle;
    }
}
