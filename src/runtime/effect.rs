use crate::runtime::scheduler::SchedulerCommand;
use crate::task::TaskInvocation;

#[derive(Debug, Clone)]
pub enum Effect {
    Schedule(SchedulerCommand),
    StartTask(TaskInvocation),
    RequestRender,
}
