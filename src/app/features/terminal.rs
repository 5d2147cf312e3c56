use crate::app::action::{Action, UpdateResult};
use crate::app::state::AppState;
use crate::domain::interpreter::TranscriptDelta;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TerminalInput(key) => {
            state.terminal.prompt.input(*key);
            state.terminal.history_index = None;
            UpdateResult::Handled(None)
        }
        Action::SubmitCommand => {
            submit_prompt(state);
            UpdateResult::Handled(None)
        }
        Action::HistoryPrev => {
            recall(state, -1);
            UpdateResult::Handled(None)
        }
        Action::HistoryNext => {
            recall(state, 1);
            UpdateResult::Handled(None)
        }
        Action::ScrollTranscriptUp(n) => {
            // Clamped against the wrapped row count on the next draw.
            state.terminal.scroll_from_bottom = state.terminal.scroll_from_bottom.saturating_add(*n);
            UpdateResult::Handled(None)
        }
        Action::ScrollTranscriptDown(n) => {
            state.terminal.scroll_from_bottom = state.terminal.scroll_from_bottom.saturating_sub(*n);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn submit_prompt(state: &mut AppState) {
    let raw = state.terminal.prompt.take();
    if !raw.trim().is_empty() && state.terminal.history.last() != Some(&raw) {
        state.terminal.history.push(raw.clone());
    }
    state.terminal.history_index = None;
    state.terminal.scroll_from_bottom = 0;

    if let TranscriptDelta::Cleared = state.terminal.interpreter.submit(&raw) {
        state.set_status("Transcript cleared");
    }
}

/// Walks the session history. Stepping past the newest entry empties the prompt.
fn recall(state: &mut AppState, delta: isize) {
    let terminal = &mut state.terminal;
    let len = terminal.history.len();
    if len == 0 {
        return;
    }
    let next = match (terminal.history_index, delta < 0) {
        (None, true) => Some(len - 1),
        (None, false) => None,
        (Some(0), true) => Some(0),
        (Some(i), true) => Some(i - 1),
        (Some(i), false) if i + 1 < len => Some(i + 1),
        (Some(_), false) => None,
    };
    terminal.history_index = next;
    match next {
        Some(i) => {
            let text = terminal.history[i].clone();
            terminal.prompt.set_text(&text);
        }
        None => terminal.prompt.set_text(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::command::HELP_REPLY;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            update(state, &Action::TerminalInput(key));
        }
    }

    fn texts(state: &AppState) -> Vec<String> {
        state.terminal.lines().iter().map(|l| l.text.clone()).collect()
    }

    #[test]
    fn test_submit_runs_prompt_through_interpreter() {
        let mut state = AppState::default();
        type_text(&mut state, "HELP");
        update(&mut state, &Action::SubmitCommand);

        let lines = texts(&state);
        assert_eq!(lines[lines.len() - 2..], ["> HELP", HELP_REPLY]);
        assert_eq!(state.terminal.prompt.text(), "");
        assert_eq!(state.terminal.history, vec!["HELP".to_string()]);
    }

    #[test]
    fn test_submit_clear_empties_transcript_and_sets_status() {
        let mut state = AppState::default();
        type_text(&mut state, "mission");
        update(&mut state, &Action::SubmitCommand);
        type_text(&mut state, " Clear ");
        update(&mut state, &Action::SubmitCommand);

        assert!(state.terminal.lines().is_empty());
        assert_eq!(state.status_message.as_deref(), Some("Transcript cleared"));
    }

    #[test]
    fn test_submit_resets_scroll() {
        let mut state = AppState::default();
        update(&mut state, &Action::ScrollTranscriptUp(1));
        assert_eq!(state.terminal.scroll_from_bottom, 1);
        type_text(&mut state, "join");
        update(&mut state, &Action::SubmitCommand);
        assert_eq!(state.terminal.scroll_from_bottom, 0);
    }

    #[test]
    fn test_scroll_saturates() {
        let mut state = AppState::default();
        update(&mut state, &Action::ScrollTranscriptUp(u16::MAX));
        update(&mut state, &Action::ScrollTranscriptUp(5));
        assert_eq!(state.terminal.scroll_from_bottom, u16::MAX);
        update(&mut state, &Action::ScrollTranscriptDown(u16::MAX));
        assert_eq!(state.terminal.scroll_from_bottom, 0);
    }

    #[test]
    fn test_history_recall() {
        let mut state = AppState::default();
        for cmd in ["help", "mission", "mission"] {
            type_text(&mut state, cmd);
            update(&mut state, &Action::SubmitCommand);
        }
        assert_eq!(state.terminal.history.len(), 2);

        update(&mut state, &Action::HistoryPrev);
        assert_eq!(state.terminal.prompt.text(), "mission");
        update(&mut state, &Action::HistoryPrev);
        assert_eq!(state.terminal.prompt.text(), "help");
        update(&mut state, &Action::HistoryPrev);
        assert_eq!(state.terminal.prompt.text(), "help");
        update(&mut state, &Action::HistoryNext);
        assert_eq!(state.terminal.prompt.text(), "mission");
        update(&mut state, &Action::HistoryNext);
        assert_eq!(state.terminal.prompt.text(), "");
        assert_eq!(state.terminal.history_index, None);
    }

    #[test]
    fn test_blank_submission_is_not_recorded() {
        let mut state = AppState::default();
        type_text(&mut state, "   ");
        update(&mut state, &Action::SubmitCommand);
        assert!(state.terminal.history.is_empty());
        let lines = texts(&state);
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Error: Command '' not found. Type 'help' for options.")
        );
    }

    #[test]
    fn test_ignores_map_actions() {
        let mut state = AppState::default();
        assert!(matches!(
            update(&mut state, &Action::ToggleLegend),
            UpdateResult::NotHandled
        ));
    }
}
