pub const NICKNAME_MIN_LENGTH: usize = 5;
pub const NICKNAME_MAX_LENGTH: usize = 30;
pub const SAVINGS_GOAL_MIN: f64 = 0.0;
pub const SAVINGS_GOAL_MAX: f64 = 1_000_000.0;

pub mod messages {
    pub const NICKNAME_REQUIRED: &str = "Account nickname is required";
    pub const NICKNAME_MIN: &str = "Account nickname must be at least 5 characters";
    pub const NICKNAME_MAX: &str = "Account nickname must be no more than 30 characters";
    pub const SAVINGS_GOAL_REQUIRED: &str = "Savings goal is required for savings accounts";
    pub const SAVINGS_GOAL_MIN: &str = "Savings goal cannot be negative";
    pub const SAVINGS_GOAL_MAX: &str = "Savings goal cannot exceed $1,000,000";
}
