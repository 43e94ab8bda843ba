use crate::runtime::intent::Intent;
use crate::task::TaskCompletion;

/// Events produced by the runtime itself rather than by the user.
#[derive(Debug, Clone)]
pub enum SystemEvent {
    TaskCompleted { completion: TaskCompletion },
    /// Timed dismissal of the notice with the given generation.
    ClearNotice { generation: u64 },
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    Intent(Intent),
    System(SystemEvent),
}
