use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::state::app::AppState;
use std::time::Instant;

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, intent: Intent, now: Instant) -> Vec<Effect> {
        let changed = match intent {
            Intent::Exit => {
                state.request_exit();
                true
            }
            Intent::Back => state.go_back(),
            Intent::OpenCreateAccount => state.open_create_account(),
            Intent::EditNickname(nickname) => state.edit_nickname(nickname),
            Intent::SelectAccountType(account_type) => state.select_account_type(account_type),
            Intent::EditSavingsGoal(goal) => state.edit_savings_goal(goal),
            Intent::Submit => state.submit(now),
            Intent::DismissNotice => state.dismiss_notice(),
            Intent::Noop => false,
        };

        let mut effects = if changed {
            vec![Effect::RequestRender]
        } else {
            vec![]
        };
        collect_pending(state, &mut effects);
        effects
    }
}

/// Moves side effects queued on the state into `effects`.
pub(crate) fn collect_pending(state: &mut AppState, effects: &mut Vec<Effect>) {
    effects.extend(
        state
            .take_pending_scheduler_commands()
            .into_iter()
            .map(Effect::Schedule),
    );
    effects.extend(
        state
            .take_pending_task_invocations()
            .into_iter()
            .map(Effect::StartTask),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountType;
    use crate::runtime::scheduler::SchedulerCommand;
    use std::time::Duration;

    fn on_form() -> AppState {
        let mut state = AppState::new(Duration::from_millis(5000));
        Reducer::reduce(&mut state, Intent::OpenCreateAccount, Instant::now());
        state
    }

    #[test]
    fn noop_produces_nothing() {
        let mut state = AppState::new(Duration::from_millis(5000));
        assert!(Reducer::reduce(&mut state, Intent::Noop, Instant::now()).is_empty());
    }

    #[test]
    fn valid_submit_starts_task() {
        let mut state = on_form();
        let now = Instant::now();
        Reducer::reduce(&mut state, Intent::EditNickname("Holiday fund".into()), now);
        Reducer::reduce(&mut state, Intent::SelectAccountType(AccountType::Everyday), now);

        let effects = Reducer::reduce(&mut state, Intent::Submit, now);
        let started: Vec<_> = effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::StartTask(invocation) => Some(invocation),
                _ => None,
            })
            .collect();
        assert_eq!(started.len(), 1);
        assert_eq!(started[0].request.nickname, "Holiday fund");
        assert_eq!(started[0].request.savings_goal, None);
    }

    #[test]
    fn invalid_submit_only_renders() {
        let mut state = on_form();
        let effects = Reducer::reduce(&mut state, Intent::Submit, Instant::now());
        assert!(matches!(effects.as_slice(), [Effect::RequestRender]));
        assert!(state.form().validation().has_errors());
    }

    #[test]
    fn dismiss_emits_cancel() {
        let mut state = AppState::new(Duration::from_millis(5000));
        let effects = Reducer::reduce(&mut state, Intent::DismissNotice, Instant::now());
        assert!(matches!(
            effects.as_slice(),
            [Effect::Schedule(SchedulerCommand::Cancel { .. })]
        ));
    }
}
