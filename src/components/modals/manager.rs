use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::error::ErrorModal;
use super::help::HelpModal;
use super::helpers::dim_area;

/// Draws whichever overlay is active on top of the dimmed panels.
pub struct ModalManager<'a> {
    pub theme: &'a Theme,
    pub app_state: &'a AppState<'a>,
}

impl Widget for ModalManager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let is_modal_active =
            self.app_state.mode == AppMode::Help || self.app_state.last_error.is_some();
        if !is_modal_active || area.width == 0 || area.height == 0 {
            return;
        }
        dim_area(buf, area);

        if self.app_state.mode == AppMode::Help {
            HelpModal {
                theme: self.theme,
                commands: self.app_state.terminal.interpreter.table(),
            }
            .render(area, buf);
        }

        // Errors stack above help.
        if let Some(error) = &self.app_state.last_error {
            ErrorModal {
                theme: self.theme,
                error,
            }
            .render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{ErrorSeverity, ErrorState};

    fn render(state: &AppState) -> String {
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        ModalManager {
            theme: &state.theme,
            app_state: state,
        }
        .render(area, &mut buf);
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buf[(x, y)].symbol());
            }
        }
        text
    }

    #[test]
    fn test_nothing_drawn_in_normal_mode() {
        assert!(render(&AppState::default()).trim().is_empty());
    }

    #[test]
    fn test_help_and_error_modals() {
        let mut state = AppState {
            mode: AppMode::Help,
            ..Default::default()
        };
        assert!(render(&state).contains("HELP - KEYBINDINGS"));

        state.mode = AppMode::Normal;
        state.last_error = Some(ErrorState::new(
            "unknown feature id: 'Atlantis'",
            ErrorSeverity::Warning,
        ));
        let text = render(&state);
        assert!(text.contains("WARNING"));
        assert!(text.contains("Atlantis"));
    }
}
