use crate::app::{
    action::Action,
    state::{AppMode, AppState, Panel},
    ui,
};
use crate::components::tactical_map::feature_at;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect, Size};

const PAGE_ROWS: u16 = 5;
const WHEEL_ROWS: u16 = 3;

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) => map_key(key, app_state),
        Event::Mouse(mouse) => map_mouse(mouse, app_state, terminal_size),
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    let bound = app_state.keymap.get_action(key, app_state);

    // An open error swallows everything but dismissal and quit.
    if app_state.last_error.is_some() {
        return match (key.code, bound) {
            (_, Some(Action::Quit)) => Some(Action::Quit),
            (KeyCode::Esc | KeyCode::Enter, _) => Some(Action::CancelMode),
            _ => None,
        };
    }

    if app_state.mode == AppMode::Help {
        return match (key.code, bound) {
            (_, Some(Action::Quit)) => Some(Action::Quit),
            (KeyCode::Esc | KeyCode::Char('q' | '?'), _) | (_, Some(Action::ToggleHelp)) => {
                Some(Action::ToggleHelp)
            }
            _ => None,
        };
    }

    if bound.is_some() {
        return bound;
    }

    match app_state.focus {
        Panel::Terminal => Some(match key.code {
            KeyCode::Enter => Action::SubmitCommand,
            KeyCode::Up => Action::HistoryPrev,
            KeyCode::Down => Action::HistoryNext,
            KeyCode::PageUp => Action::ScrollTranscriptUp(PAGE_ROWS),
            KeyCode::PageDown => Action::ScrollTranscriptDown(PAGE_ROWS),
            KeyCode::Esc => Action::CancelMode,
            _ => Action::TerminalInput(key),
        }),
        Panel::Map => None,
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, terminal_size: Size) -> Option<Action> {
    if app_state.mode != AppMode::Normal || app_state.last_error.is_some() {
        return None;
    }

    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let layout = ui::get_layout(area, app_state);
    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if contains(layout.terminal, column, row) {
                return Some(Action::FocusTerminal);
            }
            if contains(layout.canvas, column, row) {
                let registry = app_state.map.selector.registry();
                return Some(match feature_at(registry, layout.canvas, column, row) {
                    Some(id) => Action::SelectFeature(id.to_string()),
                    None => Action::FocusMap,
                });
            }
            if contains(layout.feature_list, column, row) {
                return Some(
                    list_row_feature(app_state, layout.feature_list, row)
                        .map_or(Action::FocusMap, Action::SelectFeature),
                );
            }
            None
        }
        MouseEventKind::ScrollUp if contains(layout.terminal, column, row) => {
            Some(Action::ScrollTranscriptUp(WHEEL_ROWS))
        }
        MouseEventKind::ScrollDown if contains(layout.terminal, column, row) => {
            Some(Action::ScrollTranscriptDown(WHEEL_ROWS))
        }
        MouseEventKind::ScrollUp if contains(layout.feature_list, column, row) => {
            Some(Action::FeatureCursorPrev)
        }
        MouseEventKind::ScrollDown if contains(layout.feature_list, column, row) => {
            Some(Action::FeatureCursorNext)
        }
        _ => None,
    }
}

/// Feature id on the clicked list row, accounting for the border and scroll offset.
fn list_row_feature(app_state: &AppState<'_>, list_area: Rect, row: u16) -> Option<String> {
    let first_row = list_area.y + 1;
    if row < first_row || row + 1 >= list_area.bottom() {
        return None;
    }
    let index = (row - first_row) as usize + app_state.map.cursor.offset();
    app_state
        .map
        .selector
        .registry()
        .features()
        .get(index)
        .map(|f| f.id.clone())
}
