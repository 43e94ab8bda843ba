pub mod effect;
pub mod event;
pub mod intent;
pub mod reducer;
pub mod runner;
pub mod scheduler;

pub use effect::Effect;
pub use event::{AppEvent, SystemEvent};
pub use intent::Intent;
pub use runner::Runtime;
pub use scheduler::{Scheduler, SchedulerCommand};
