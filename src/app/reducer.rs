use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};
use std::time::Duration;

const STATUS_TTL: Duration = Duration::from_secs(3);

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        Action::Tick => {
            if state
                .status_clear_time
                .is_some_and(|t| t.elapsed() >= STATUS_TTL)
            {
                state.status_message = None;
                state.status_clear_time = None;
            }
            return None;
        }
        Action::Resize(..) => return None,
        Action::Quit => {
            state.should_quit = true;
            return None;
        }
        _ => {}
    }

    let reducers: [fn(&mut AppState, &Action) -> UpdateResult; 3] = [
        features::terminal::update,
        features::map::update,
        features::ui::update,
    ];
    for reduce in reducers {
        if let UpdateResult::Handled(command) = reduce(state, &action) {
            return command;
        }
    }

    tracing::debug!(?action, "unhandled action");
    None
}
