use crate::runtime::event::AppEvent;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum SchedulerCommand {
    /// Emits `event` after `delay`, superseding anything pending under `key`.
    Debounce {
        key: String,
        delay: Duration,
        event: AppEvent,
    },
    /// Drops anything pending under `key`.
    Cancel {
        key: String,
    },
}

#[derive(Debug, Clone)]
struct Guard {
    key: String,
    version: u64,
}

#[derive(Debug, Clone)]
struct DelayedTask {
    due_at: Instant,
    guard: Guard,
    event: AppEvent,
}

#[derive(Default)]
pub struct Scheduler {
    delayed: Vec<DelayedTask>,
    key_versions: HashMap<String, u64>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, command: SchedulerCommand, now: Instant) {
        match command {
            SchedulerCommand::Debounce { key, delay, event } => {
                let version = self.bump_version(&key);
                self.delayed.push(DelayedTask {
                    due_at: now + delay,
                    guard: Guard { key, version },
                    event,
                });
            }
            SchedulerCommand::Cancel { key } => {
                self.bump_version(&key);
            }
        }
    }

    /// Removes every task due at `now`, returning the events of those whose
    /// key was not superseded or cancelled since they were scheduled.
    pub fn drain_ready(&mut self, now: Instant) -> Vec<AppEvent> {
        self.delayed.sort_by_key(|task| task.due_at);
        let split = self.delayed.partition_point(|task| task.due_at <= now);

        let due: Vec<DelayedTask> = self.delayed.drain(..split).collect();
        due.into_iter()
            .filter(|task| self.task_is_valid(task))
            .map(|task| task.event)
            .collect()
    }

    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        let mut next = default_timeout;
        for task in &self.delayed {
            let due_in = task.due_at.saturating_duration_since(now);
            if due_in < next {
                next = due_in;
            }
        }

        next
    }

    pub fn has_pending(&self, key: &str) -> bool {
        self.delayed
            .iter()
            .any(|task| task.guard.key == key && self.task_is_valid(task))
    }

    /// Drops tasks that can no longer fire.
    pub fn prune(&mut self) {
        let key_versions = &self.key_versions;
        self.delayed.retain(|task| {
            key_versions.get(&task.guard.key).copied().unwrap_or(0) == task.guard.version
        });
    }

    fn task_is_valid(&self, task: &DelayedTask) -> bool {
        let current = self.key_versions.get(&task.guard.key).copied().unwrap_or(0);
        current == task.guard.version
    }

    fn bump_version(&mut self, key: &str) -> u64 {
        let entry = self.key_versions.entry(key.to_string()).or_insert(0);
        *entry = entry.saturating_add(1);
        *entry
    }
}
