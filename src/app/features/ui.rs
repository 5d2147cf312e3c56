use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, ErrorSeverity, ErrorState, Panel},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::FocusNext => {
            state.focus = state.focus.other();
            UpdateResult::Handled(None)
        }
        Action::FocusTerminal => {
            state.focus = Panel::Terminal;
            UpdateResult::Handled(None)
        }
        Action::FocusMap => {
            state.focus = Panel::Map;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            state.mode = AppMode::Normal;
            state.last_error = None;
            UpdateResult::Handled(None)
        }
        Action::ConfigChanged => UpdateResult::Handled(Some(Command::ReloadConfig)),
        Action::ConfigReloaded(config) => {
            match state.apply_config(config) {
                Ok(()) => {
                    tracing::info!("config reloaded");
                    state.set_status("Config reloaded");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "config reload rejected");
                    state.last_error = Some(ErrorState::new(e.to_string(), ErrorSeverity::Error));
                }
            }
            UpdateResult::Handled(None)
        }
        Action::ErrorOccurred(msg) => {
            state.last_error = Some(ErrorState::new(msg.clone(), ErrorSeverity::Error));
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::{AppConfig, CommandConfig, EffectKind};

    #[test]
    fn test_focus_cycles_between_panels() {
        let mut state = AppState::default();
        assert_eq!(state.focus, Panel::Terminal);
        update(&mut state, &Action::FocusNext);
        assert_eq!(state.focus, Panel::Map);
        update(&mut state, &Action::FocusNext);
        assert_eq!(state.focus, Panel::Terminal);
        update(&mut state, &Action::FocusMap);
        assert_eq!(state.focus, Panel::Map);
    }

    #[test]
    fn test_help_toggle_and_cancel() {
        let mut state = AppState::default();
        update(&mut state, &Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Help);
        update(&mut state, &Action::ErrorOccurred("boom".to_string()));
        update(&mut state, &Action::CancelMode);
        assert_eq!(state.mode, AppMode::Normal);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_config_changed_requests_reload() {
        let mut state = AppState::default();
        assert!(matches!(
            update(&mut state, &Action::ConfigChanged),
            UpdateResult::Handled(Some(Command::ReloadConfig))
        ));
    }

    #[test]
    fn test_invalid_reloaded_config_keeps_old_table() {
        let mut state = AppState::default();
        let config = AppConfig {
            commands: vec![CommandConfig {
                trigger: "bad".to_string(),
                reply: Some("x".to_string()),
                effect: Some(EffectKind::Reset),
            }],
            ..Default::default()
        };
        update(&mut state, &Action::ConfigReloaded(Box::new(config)));

        assert!(state.last_error.is_some());
        assert!(state.terminal.interpreter.table().lookup("bad").is_none());
        assert!(state.terminal.interpreter.table().lookup("help").is_some());
    }
}
