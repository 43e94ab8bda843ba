pub mod rules;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Everyday,
    Savings,
}

impl AccountType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Everyday => "everyday",
            Self::Savings => "savings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Everyday => "Everyday Account",
            Self::Savings => "Savings Account",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown account type `{0}` (expected `everyday` or `savings`)")]
pub struct UnknownAccountType(pub String);

impl FromStr for AccountType {
    type Err = UnknownAccountType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "everyday" => Ok(Self::Everyday),
            "savings" => Ok(Self::Savings),
            _ => Err(UnknownAccountType(s.to_string())),
        }
    }
}

/// Fields of the account form, named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountField {
    Nickname,
    AccountType,
    SavingsGoal,
}

impl AccountField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nickname => "nickname",
            Self::AccountType => "accountType",
            Self::SavingsGoal => "savingsGoal",
        }
    }
}

impl fmt::Display for AccountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failing fields only, in the order they were validated. An empty map means
/// the form may be submitted.
pub type FieldErrorMap = IndexMap<AccountField, String>;

/// Raw state of the account form. `savings_goal` may hold NaN when the number
/// input could not be parsed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccountFormInput {
    pub nickname: String,
    pub account_type: AccountType,
    pub savings_goal: Option<f64>,
}

impl AccountFormInput {
    pub fn new(nickname: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            nickname: nickname.into(),
            account_type,
            savings_goal: None,
        }
    }

    pub fn with_savings_goal(mut self, goal: f64) -> Self {
        self.savings_goal = Some(goal);
        self
    }

    /// The input seen through its account variant. An everyday account has no
    /// goal, whatever the raw field holds.
    pub fn shape(&self) -> AccountShape {
        match self.account_type {
            AccountType::Everyday => AccountShape::Everyday,
            AccountType::Savings => AccountShape::Savings {
                goal: self.savings_goal,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountShape {
    Everyday,
    Savings { goal: Option<f64> },
}
