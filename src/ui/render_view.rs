use crate::account::{AccountField, AccountFormInput, AccountType};
use crate::state::app::AppState;
use crate::state::form::{FormSession, SubmissionState};
use crate::state::navigation::View;
use crate::state::notice::CreatedAccountNotice;

/// Borrowed snapshot of what the current view shows.
pub struct RenderView<'a> {
    pub view: View,
    pub notice: Option<&'a CreatedAccountNotice>,
    pub form: &'a FormSession,
}

impl<'a> RenderView<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        Self {
            view: state.view(),
            notice: state.notice(),
            form: state.form(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match self.view {
            View::Landing => self.landing_lines(),
            View::CreateAccount => self.form_lines(),
        }
    }

    fn landing_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(notice) = self.notice {
            lines.push(format!("[x] {}", notice.message()));
            lines.push(String::new());
        }
        lines.push("Welcome to Banking App".to_string());
        lines.push("> Open a bank account".to_string());
        lines
    }

    fn form_lines(&self) -> Vec<String> {
        let input = self.form.input();
        let validation = self.form.validation();
        let mut lines = vec!["Open a Bank Account".to_string(), String::new()];

        lines.push(format!("Account Nickname *: {}", input.nickname));
        push_error(&mut lines, validation.error(AccountField::Nickname));

        lines.push("Account Type *:".to_string());
        for account_type in [AccountType::Everyday, AccountType::Savings] {
            let mark = if input.account_type == account_type { "(o)" } else { "( )" };
            lines.push(format!("  {mark} {}", account_type.label()));
        }
        push_error(&mut lines, validation.error(AccountField::AccountType));

        if input.account_type == AccountType::Savings {
            lines.push(format!("Savings Goal *: {}", goal_text(input)));
            push_error(&mut lines, validation.error(AccountField::SavingsGoal));
        }

        lines.push(String::new());
        if let SubmissionState::Failed(message) = self.form.submission() {
            lines.push(format!("Error: {message}"));
        }
        let button = if self.form.is_pending() {
            "[Creating Account...]"
        } else {
            "[Create Account]"
        };
        lines.push(button.to_string());
        lines
    }
}

pub fn render_lines(state: &AppState) -> Vec<String> {
    RenderView::from_state(state).lines()
}

fn push_error(lines: &mut Vec<String>, error: Option<&str>) {
    if let Some(error) = error {
        lines.push(format!("  ! {error}"));
    }
}

fn goal_text(input: &AccountFormInput) -> String {
    match input.savings_goal {
        None => "Enter amount".to_string(),
        Some(goal) if goal.is_nan() => "(not a number)".to_string(),
        Some(goal) => goal.to_string(),
    }
}
