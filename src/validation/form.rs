use crate::account::rules::{self, messages};
use crate::account::{AccountField, AccountFormInput, AccountShape, FieldErrorMap};
use crate::api::CreateAccountRequest;
use crate::core::Value;
use crate::validation::validators::{
    LengthRule, ValidationResult, combine_validations, validate_max_number, validate_min_number,
    validate_required, validate_string_length,
};

/// Validates the whole form. Only failing fields appear in the result.
pub fn validate_account_form(input: &AccountFormInput) -> FieldErrorMap {
    let mut errors = FieldErrorMap::new();

    if let Err(error) = validate_nickname(&input.nickname) {
        errors.insert(AccountField::Nickname, error);
    }

    match input.shape() {
        AccountShape::Everyday => {}
        AccountShape::Savings { goal } => {
            if let Err(error) = validate_savings_goal(goal) {
                errors.insert(AccountField::SavingsGoal, error);
            }
        }
    }

    errors
}

/// Validates and, on success, builds the payload sent to the account service.
/// Everyday accounts never carry a goal.
pub fn validate_for_submission(
    input: &AccountFormInput,
) -> Result<CreateAccountRequest, FieldErrorMap> {
    let errors = validate_account_form(input);
    if !errors.is_empty() {
        return Err(errors);
    }

    let savings_goal = match input.shape() {
        AccountShape::Everyday => None,
        AccountShape::Savings { goal } => goal,
    };

    Ok(CreateAccountRequest {
        nickname: input.nickname.clone(),
        account_type: input.account_type,
        savings_goal,
    })
}

fn validate_nickname(nickname: &str) -> ValidationResult {
    let rule = LengthRule::between(rules::NICKNAME_MIN_LENGTH, rules::NICKNAME_MAX_LENGTH)
        .min_message(messages::NICKNAME_MIN)
        .max_message(messages::NICKNAME_MAX);

    combine_validations([
        validate_required(&Value::from(nickname), Some(messages::NICKNAME_REQUIRED)),
        validate_string_length(Some(nickname), &rule),
    ])
}

fn validate_savings_goal(goal: Option<f64>) -> ValidationResult {
    combine_validations([
        validate_required(&Value::from(goal), Some(messages::SAVINGS_GOAL_REQUIRED)),
        validate_min_number(goal, rules::SAVINGS_GOAL_MIN, Some(messages::SAVINGS_GOAL_MIN)),
        validate_max_number(goal, rules::SAVINGS_GOAL_MAX, Some(messages::SAVINGS_GOAL_MAX)),
    ])
}
