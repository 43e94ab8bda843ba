pub mod account;
pub mod api;
pub mod config;
pub mod core;
pub mod demo;
pub mod runtime;
pub mod state;
pub mod task;
pub mod ui;
pub mod validation;

pub use account::{AccountField, AccountFormInput, AccountType, FieldErrorMap};
pub use api::{AccountApi, ApiError, CreateAccountRequest, CreateAccountResponse, StubAccountApi};
pub use config::{Config, ConfigError};
pub use runtime::{Intent, Runtime};
pub use state::AppState;
