use crate::account::AccountType;

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    OpenCreateAccount,
    EditNickname(String),
    SelectAccountType(AccountType),
    /// Parsed number input; NaN when the raw text was not a number.
    EditSavingsGoal(Option<f64>),
    Submit,
    DismissNotice,
    Back,
    Exit,
    Noop,
}
