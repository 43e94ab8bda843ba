use crate::account::AccountType;
use crate::api::AccountSummary;
use crate::validation::format_grouped;
use serde::Serialize;

/// The last successfully created account, shown once on the landing view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedAccountNotice {
    pub nickname: String,
    pub account_type: AccountType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_goal: Option<f64>,
}

impl CreatedAccountNotice {
    pub fn message(&self) -> String {
        let goal = self
            .savings_goal
            .filter(|goal| *goal != 0.0 && !goal.is_nan())
            .map(|goal| format!(" with a savings goal of ${}", format_grouped(goal)))
            .unwrap_or_default();
        format!(
            "Success! Your {} \"{}\"{goal} has been created successfully.",
            self.account_type.label(),
            self.nickname
        )
    }
}

impl From<AccountSummary> for CreatedAccountNotice {
    fn from(account: AccountSummary) -> Self {
        Self {
            nickname: account.nickname,
            account_type: account.account_type,
            savings_goal: account.savings_goal,
        }
    }
}

/// Single-slot holder for the created-account notice. Setting replaces any
/// previous notice. Every set bumps the generation so a timed clear scheduled
/// for an older notice can be told apart.
#[derive(Debug, Default)]
pub struct NoticeChannel {
    current: Option<CreatedAccountNotice>,
    generation: u64,
}

impl NoticeChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, notice: CreatedAccountNotice) -> u64 {
        self.generation = self.generation.saturating_add(1);
        if let Some(previous) = self.current.replace(notice) {
            tracing::debug!(nickname = %previous.nickname, "replaced pending notice");
        }
        self.generation
    }

    pub fn clear(&mut self) -> Option<CreatedAccountNotice> {
        self.current.take()
    }

    /// Clears only if `generation` still names the current notice.
    pub fn clear_if(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&CreatedAccountNotice> {
        self.current.as_ref()
    }
}
