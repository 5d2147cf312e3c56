use crate::app::action::{Action, UpdateResult};
use crate::app::state::{AppState, ErrorSeverity, ErrorState};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::FeatureCursorNext => {
            state.map.move_cursor(1);
            UpdateResult::Handled(None)
        }
        Action::FeatureCursorPrev => {
            state.map.move_cursor(-1);
            UpdateResult::Handled(None)
        }
        Action::ConfirmFeature => {
            if let Some(id) = state.map.cursor_feature().map(|f| f.id.clone()) {
                select(state, &id);
            }
            UpdateResult::Handled(None)
        }
        Action::SelectFeature(id) => {
            select(state, id);
            UpdateResult::Handled(None)
        }
        Action::ClearSelection => {
            if !state.map.selector.state().is_empty() {
                state.set_status("Selection cleared");
            }
            state.map.selector.clear_selection();
            UpdateResult::Handled(None)
        }
        Action::ToggleLegend => {
            state.map.legend_open = !state.map.legend_open;
            UpdateResult::Handled(None)
        }
        Action::ToggleBaseLayer => {
            state.map.base_layer = state.map.base_layer.toggled();
            let label = state.map.base_layer.label();
            state.set_status(format!("Base layer: {label}"));
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn select(state: &mut AppState, id: &str) {
    match state.map.selector.select_feature(id) {
        Ok(_) => {
            if let Some(index) = state.map.selector.registry().position(id) {
                state.map.cursor.select(Some(index));
            }
            state.set_status(format!("Target locked: {id}"));
        }
        Err(e) => {
            state.last_error = Some(ErrorState::new(e.to_string(), ErrorSeverity::Warning));
        }
    }
}
