use crate::api::AccountApi;
use crate::config::Config;
use crate::runtime::effect::Effect;
use crate::runtime::event::{AppEvent, SystemEvent};
use crate::runtime::intent::Intent;
use crate::runtime::reducer::{Reducer, collect_pending};
use crate::runtime::scheduler::{Scheduler, SchedulerCommand};
use crate::state::app::AppState;
use crate::task::TaskExecutor;
use std::sync::Arc;
use std::time::{Duration, Instant};

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(120);

/// Owns the state and drives it: intents go through the reducer, effects are
/// applied here, timers and request completions are fed back as events.
pub struct Runtime {
    state: AppState,
    scheduler: Scheduler,
    executor: TaskExecutor,
    poll_interval: Duration,
    render_requested: bool,
}

impl Runtime {
    pub fn new(state: AppState, api: Arc<dyn AccountApi>) -> Self {
        Self {
            state,
            scheduler: Scheduler::new(),
            executor: TaskExecutor::new(api),
            poll_interval: DEFAULT_POLL_INTERVAL,
            render_requested: true,
        }
    }

    pub fn from_config(config: &Config, api: Arc<dyn AccountApi>) -> Self {
        Self::new(AppState::new(config.notice_display()), api)
            .with_poll_interval(config.poll_interval())
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: Intent) {
        self.dispatch_at(intent, Instant::now());
    }

    pub fn dispatch_at(&mut self, intent: Intent, now: Instant) {
        tracing::trace!(?intent, "dispatch");
        let effects = Reducer::reduce(&mut self.state, intent, now);
        self.apply_effects(effects, now);
    }

    /// Handles whatever is ready right now without blocking.
    pub fn pump(&mut self) -> usize {
        self.advance_to(Instant::now())
    }

    /// Handles finished requests and every timer due at `now`. Returns how
    /// many events were processed.
    pub fn advance_to(&mut self, now: Instant) -> usize {
        let mut handled = 0;
        for completion in self.executor.drain_ready() {
            self.handle_system_event(SystemEvent::TaskCompleted { completion }, now);
            handled += 1;
        }
        for event in self.scheduler.drain_ready(now) {
            self.process_event(event, now);
            handled += 1;
        }
        handled
    }

    /// Runs the loop until `done` holds or `timeout` elapses.
    pub fn run_until(&mut self, timeout: Duration, mut done: impl FnMut(&AppState) -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            self.pump();
            if done(&self.state) {
                return true;
            }

            let now = Instant::now();
            if now >= deadline || self.state.should_exit() {
                return false;
            }

            let wait = self
                .scheduler
                .poll_timeout(now, self.poll_interval)
                .min(deadline - now);
            if let Some(completion) = self.executor.wait_timeout(wait) {
                self.handle_system_event(SystemEvent::TaskCompleted { completion }, Instant::now());
            }
        }
    }

    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }

    pub fn has_pending_timer(&self, key: &str) -> bool {
        self.scheduler.has_pending(key)
    }

    fn process_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Intent(intent) => self.dispatch_at(intent, now),
            AppEvent::System(system) => self.handle_system_event(system, now),
        }
    }

    fn handle_system_event(&mut self, event: SystemEvent, now: Instant) {
        let mut effects = Vec::new();
        if self.state.handle_system_event(event, now) {
            effects.push(Effect::RequestRender);
        }
        collect_pending(&mut self.state, &mut effects);
        self.apply_effects(effects, now);
    }

    fn apply_effects(&mut self, effects: Vec<Effect>, now: Instant) {
        for effect in effects {
            match effect {
                Effect::Schedule(command) => {
                    let cancelled = matches!(command, SchedulerCommand::Cancel { .. });
                    self.scheduler.schedule(command, now);
                    if cancelled {
                        self.scheduler.prune();
                    }
                }
                Effect::StartTask(invocation) => self.executor.spawn(invocation),
                Effect::RequestRender => self.render_requested = true,
            }
        }
    }
}
