pub mod app;
pub mod form;
pub mod navigation;
pub mod notice;
pub mod validation;

pub use app::AppState;
pub use form::{CompletionOutcome, FormSession, SubmissionState, SubmitOutcome};
pub use navigation::{Navigation, View};
pub use notice::{CreatedAccountNotice, NoticeChannel};
pub use validation::ValidationState;
