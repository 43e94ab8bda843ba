//! Account-creation service boundary.
//!
//! The only implementation shipped is [`StubAccountApi`], which sleeps and
//! randomly fails so the error path of the form can be exercised.

pub mod stub;

use crate::account::AccountType;
use serde::{Deserialize, Serialize};

pub use stub::StubAccountApi;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub nickname: String,
    pub account_type: AccountType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_goal: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub nickname: String,
    pub account_type: AccountType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_goal: Option<f64>,
}

impl From<&CreateAccountRequest> for AccountSummary {
    fn from(request: &CreateAccountRequest) -> Self {
        Self {
            nickname: request.nickname.clone(),
            account_type: request.account_type,
            savings_goal: request.savings_goal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountResponse {
    pub success: bool,
    pub account_id: String,
    pub message: String,
    pub account: AccountSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Rejected(String),
    #[error("request was cancelled")]
    Cancelled,
}

pub trait AccountApi: Send + Sync {
    /// Blocking call; the runtime runs it off the event loop.
    fn create_account(
        &self,
        request: &CreateAccountRequest,
    ) -> Result<CreateAccountResponse, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_absent_goal() {
        let request = CreateAccountRequest {
            nickname: "Daily spend".to_string(),
            account_type: AccountType::Everyday,
            savings_goal: None,
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "nickname": "Daily spend", "accountType": "everyday" })
        );
    }

    #[test]
    fn response_uses_camel_case() {
        let raw = r#"{
            "success": true,
            "accountId": "acc_abc123xyz",
            "message": "Account created successfully",
            "account": { "nickname": "Rainy day", "accountType": "savings", "savingsGoal": 2500 }
        }"#;
        let response: CreateAccountResponse = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(response.account_id, "acc_abc123xyz");
        assert_eq!(response.account.savings_goal, Some(2500.0));
    }
}
