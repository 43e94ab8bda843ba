use crate::account::AccountType;
use crate::runtime::event::{AppEvent, SystemEvent};
use crate::runtime::scheduler::SchedulerCommand;
use crate::state::form::{CompletionOutcome, FormSession, SubmitOutcome};
use crate::state::navigation::{Navigation, View};
use crate::state::notice::{CreatedAccountNotice, NoticeChannel};
use crate::task::{TaskCompletion, TaskInvocation};
use std::time::{Duration, Instant};

pub const NOTICE_AUTO_CLEAR_KEY: &str = "notice:auto-clear";

/// Everything the views read: current view, the form session and the notice
/// slot. Side effects are queued here and collected by the reducer.
pub struct AppState {
    navigation: Navigation,
    form: FormSession,
    notices: NoticeChannel,
    notice_display: Duration,
    pending_scheduler: Vec<SchedulerCommand>,
    pending_tasks: Vec<TaskInvocation>,
    should_exit: bool,
}

impl AppState {
    pub fn new(notice_display: Duration) -> Self {
        Self {
            navigation: Navigation::default(),
            form: FormSession::new(),
            notices: NoticeChannel::new(),
            notice_display,
            pending_scheduler: Vec::new(),
            pending_tasks: Vec::new(),
            should_exit: false,
        }
    }

    pub fn view(&self) -> View {
        self.navigation.current()
    }

    pub fn form(&self) -> &FormSession {
        &self.form
    }

    pub fn notice(&self) -> Option<&CreatedAccountNotice> {
        self.notices.current()
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    pub fn open_create_account(&mut self) -> bool {
        if self.view() == View::CreateAccount {
            return false;
        }
        self.form.reset();
        self.navigation.push(View::CreateAccount);
        true
    }

    pub fn go_back(&mut self) -> bool {
        if !self.navigation.can_go_back() {
            return false;
        }
        if self.view() == View::CreateAccount {
            self.form.reset();
        }
        self.navigation.back()
    }

    pub fn edit_nickname(&mut self, nickname: String) -> bool {
        if !self.on_form() {
            return false;
        }
        self.form.set_nickname(nickname);
        true
    }

    pub fn select_account_type(&mut self, account_type: AccountType) -> bool {
        if !self.on_form() {
            return false;
        }
        self.form.set_account_type(account_type);
        true
    }

    pub fn edit_savings_goal(&mut self, goal: Option<f64>) -> bool {
        if !self.on_form() {
            return false;
        }
        self.form.set_savings_goal(goal);
        true
    }

    pub fn submit(&mut self, now: Instant) -> bool {
        if !self.on_form() {
            return false;
        }
        match self.form.submit(now) {
            SubmitOutcome::Busy => false,
            SubmitOutcome::Invalid => true,
            SubmitOutcome::Dispatched(invocation) => {
                self.pending_tasks.push(invocation);
                true
            }
        }
    }

    pub fn dismiss_notice(&mut self) -> bool {
        self.pending_scheduler.push(SchedulerCommand::Cancel {
            key: NOTICE_AUTO_CLEAR_KEY.to_string(),
        });
        match self.notices.clear() {
            Some(notice) => {
                tracing::info!(nickname = %notice.nickname, "notice dismissed");
                true
            }
            None => false,
        }
    }

    pub fn handle_system_event(&mut self, event: SystemEvent, now: Instant) -> bool {
        match event {
            SystemEvent::TaskCompleted { completion } => self.handle_task_completed(completion, now),
            SystemEvent::ClearNotice { generation } => {
                let cleared = self.notices.clear_if(generation);
                if cleared {
                    tracing::info!(generation, "notice expired");
                }
                cleared
            }
        }
    }

    pub fn take_pending_scheduler_commands(&mut self) -> Vec<SchedulerCommand> {
        self.pending_scheduler.drain(..).collect()
    }

    pub fn take_pending_task_invocations(&mut self) -> Vec<TaskInvocation> {
        self.pending_tasks.drain(..).collect()
    }

    fn handle_task_completed(&mut self, completion: TaskCompletion, now: Instant) -> bool {
        match self.form.complete(completion, now) {
            CompletionOutcome::Stale => false,
            CompletionOutcome::Failed(_) => true,
            CompletionOutcome::Succeeded(response) => {
                self.publish_notice(CreatedAccountNotice::from(response.account));
                self.navigation.replace(View::Landing);
                self.form.reset();
                true
            }
        }
    }

    fn publish_notice(&mut self, notice: CreatedAccountNotice) {
        let generation = self.notices.set(notice);
        tracing::info!(generation, display_ms = self.notice_display.as_millis() as u64, "notice published");
        self.pending_scheduler.push(SchedulerCommand::Debounce {
            key: NOTICE_AUTO_CLEAR_KEY.to_string(),
            delay: self.notice_display,
            event: AppEvent::System(SystemEvent::ClearNotice { generation }),
        });
    }

    fn on_form(&self) -> bool {
        self.view() == View::CreateAccount
    }
}
