//! Scripted run of the form flow used by the `account-form` binary: fill the
//! fields, submit, retry on remote failure, report what happened.

use crate::account::{AccountType, FieldErrorMap};
use crate::config::Config;
use crate::runtime::{Intent, Runtime};
use crate::state::CreatedAccountNotice;
use crate::state::app::NOTICE_AUTO_CLEAR_KEY;
use crate::ui::render_lines;
use serde::Serialize;
use std::time::Duration;

/// Field values typed into the form before submitting.
#[derive(Debug, Clone, Default)]
pub struct FormScript {
    pub nickname: String,
    pub account_type: AccountType,
    /// Parsed goal input; NaN when the raw text was not a number.
    pub savings_goal: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Submissions to try before giving up on remote failures. At least one
    /// submission is always made.
    pub attempts: u32,
    /// How long one submission may stay pending before it counts as failed.
    pub request_timeout: Duration,
    /// When set, keep running after success until the notice clears or this
    /// window elapses.
    pub wait_for_clear: Option<Duration>,
}

impl DemoOptions {
    pub fn from_config(config: &Config, attempts: u32, wait_for_clear: bool) -> Self {
        let delay = Duration::from_millis(config.remote.delay_ms);
        Self {
            attempts,
            request_timeout: delay * 2 + Duration::from_secs(5),
            wait_for_clear: wait_for_clear.then(|| config.notice_display() + Duration::from_secs(1)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoOutcome {
    Created,
    FieldErrors,
    RemoteFailure,
}

impl DemoOutcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Created => 0,
            Self::RemoteFailure => 1,
            Self::FieldErrors => 2,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub attempts: u32,
    pub created: Option<CreatedAccountNotice>,
    pub field_errors: FieldErrorMap,
    pub last_error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DemoReport {
    pub outcome: DemoOutcome,
    pub summary: Summary,
}

/// Drives `runtime` through one scripted session. `on_frame` receives the
/// view lines every time the runtime asks for a render.
pub fn run_script(
    runtime: &mut Runtime,
    script: &FormScript,
    options: &DemoOptions,
    mut on_frame: impl FnMut(&[String]),
) -> DemoReport {
    runtime.dispatch(Intent::OpenCreateAccount);
    runtime.dispatch(Intent::EditNickname(script.nickname.clone()));
    runtime.dispatch(Intent::SelectAccountType(script.account_type));
    if script.savings_goal.is_some() {
        runtime.dispatch(Intent::EditSavingsGoal(script.savings_goal));
    }
    emit_frame(runtime, &mut on_frame);

    let max_attempts = options.attempts.max(1);
    let mut attempts = 0;
    while attempts < max_attempts {
        attempts += 1;
        runtime.dispatch(Intent::Submit);
        emit_frame(runtime, &mut on_frame);

        if runtime.state().form().validation().has_errors() {
            break;
        }
        if !runtime.run_until(options.request_timeout, |state| !state.form().is_pending()) {
            tracing::warn!(attempt = attempts, "no response before timeout");
        }
        emit_frame(runtime, &mut on_frame);

        if runtime.state().notice().is_some() {
            break;
        }
        tracing::info!(attempt = attempts, "submission failed");
    }

    let state = runtime.state();
    let summary = Summary {
        attempts,
        created: state.notice().cloned(),
        field_errors: state.form().validation().errors().clone(),
        last_error: state.form().submission().error().map(str::to_string),
    };

    let outcome = if summary.created.is_some() {
        DemoOutcome::Created
    } else if !summary.field_errors.is_empty() {
        DemoOutcome::FieldErrors
    } else {
        DemoOutcome::RemoteFailure
    };

    if outcome == DemoOutcome::Created
        && let Some(window) = options.wait_for_clear
    {
        if runtime.has_pending_timer(NOTICE_AUTO_CLEAR_KEY) {
            runtime.run_until(window, |state| state.notice().is_none());
            emit_frame(runtime, &mut on_frame);
        } else {
            tracing::warn!("notice has no auto-clear scheduled");
        }
    }

    DemoReport { outcome, summary }
}

fn emit_frame(runtime: &mut Runtime, on_frame: &mut impl FnMut(&[String])) {
    if runtime.take_render_request() {
        on_frame(&render_lines(runtime.state()));
    }
}
