use crate::app::state::{AppState, Panel};
use crate::components::feature_detail::FeatureDetail;
use crate::components::feature_list::FeatureList;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::ModalManager;
use crate::components::tactical_map::TacticalMap;
use crate::components::terminal_panel::{self, TerminalPanel};
use crate::theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub const DETAIL_HEIGHT: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppLayout {
    pub header: Rect,
    pub terminal: Rect,
    pub canvas: Rect,
    pub feature_list: Rect,
    /// Present only while a feature is selected.
    pub detail: Option<Rect>,
    pub footer: Rect,
}

pub fn get_layout(area: Rect, state: &AppState) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main[1]);

    let has_detail = !state.map.selector.state().is_empty();
    let map_column = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if has_detail {
            [Constraint::Min(0), Constraint::Length(DETAIL_HEIGHT)]
        } else {
            [Constraint::Min(0), Constraint::Length(0)]
        })
        .split(body[1]);

    let map_top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(map_column[0]);

    AppLayout {
        header: main[0],
        terminal: body[0],
        canvas: map_top[0],
        feature_list: map_top[1],
        detail: has_detail.then_some(map_column[1]),
        footer: main[2],
    }
}

/// Rounded panel block whose border and title follow focus.
pub fn panel_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let (border, title_style) = if focused {
        (theme.border_focus, theme.header_active)
    } else {
        (theme.border, theme.header_item)
    };
    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(title, title_style),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
}

pub fn key_hints<'a>(hints: &[(&'a str, &'a str)], key_style: Style) -> Line<'a> {
    let mut spans = vec![Span::raw(" ")];
    for (key, desc) in hints {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(format!(": {desc} ")));
    }
    Line::from(spans)
}

fn visible(area: Rect) -> bool {
    area.width > 0 && area.height > 0
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if !visible(f.area()) {
        return;
    }

    let layout = get_layout(f.area(), app_state);
    let theme = app_state.theme.clone();

    // --- Header ---
    if visible(layout.header) {
        f.render_widget(
            Header {
                state: app_state,
                theme: &theme,
                terminal_width: f.area().width,
            },
            layout.header,
        );
    }

    // --- Operation Center ---
    if visible(layout.terminal) {
        let max_scroll = terminal_panel::max_scroll(&app_state.terminal, layout.terminal);
        let terminal = &mut app_state.terminal;
        terminal.scroll_from_bottom = terminal.scroll_from_bottom.min(max_scroll);
        f.render_widget(
            TerminalPanel {
                terminal: &app_state.terminal,
                theme: &theme,
                focused: app_state.focus == Panel::Terminal,
            },
            layout.terminal,
        );
    }

    // --- Tactical Map ---
    let map_focused = app_state.focus == Panel::Map;
    if visible(layout.canvas) {
        f.render_widget(
            TacticalMap {
                map: &app_state.map,
                theme: &theme,
                focused: map_focused,
            },
            layout.canvas,
        );
    }

    if visible(layout.feature_list) {
        let list = FeatureList {
            registry: app_state.map.selector.registry(),
            selected: app_state.map.selector.state().selected.as_deref(),
            theme: &theme,
            focused: map_focused,
        };
        f.render_stateful_widget(list, layout.feature_list, &mut app_state.map.cursor);
    }

    if let Some(area) = layout.detail.filter(|a| visible(*a)) {
        if let Some(feature) = app_state.map.selector.selected_feature() {
            f.render_widget(
                FeatureDetail {
                    feature,
                    theme: &theme,
                },
                area,
            );
        }
    }

    // --- Footer ---
    if visible(layout.footer) {
        f.render_widget(
            Footer {
                state: app_state,
                theme: &theme,
            },
            layout.footer,
        );
    }

    // --- Modals ---
    f.render_widget(
        ModalManager {
            theme: &theme,
            app_state,
        },
        f.area(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_layout_adds_detail_row_only_with_selection() {
        let mut state = AppState::default();
        let area = Rect::new(0, 0, 120, 40);
        let layout = get_layout(area, &state);
        assert!(layout.detail.is_none());
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.footer.y, 39);
        assert_eq!(layout.terminal.width, 48);

        state
            .map
            .selector
            .select_feature("Reed Bank (Recto Bank)")
            .unwrap();
        let layout = get_layout(area, &state);
        assert_eq!(layout.detail.map(|d| d.height), Some(DETAIL_HEIGHT));
        assert_eq!(layout.canvas.height, 38 - DETAIL_HEIGHT);
    }

    #[test]
    fn test_draw_clamps_transcript_scroll() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut state = AppState::default();
        for _ in 0..30 {
            state.terminal.interpreter.submit("mission");
        }
        state.terminal.scroll_from_bottom = u16::MAX;
        terminal.draw(|f| draw(f, &mut state)).unwrap();

        let layout = get_layout(Rect::new(0, 0, 120, 40), &state);
        let max = terminal_panel::max_scroll(&state.terminal, layout.terminal);
        assert!(max > 0);
        assert_eq!(state.terminal.scroll_from_bottom, max);
        assert!(buffer_text(&terminal).contains("Welcome to the ATIN"));
    }

    #[test]
    fn test_draw_renders_both_panels() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut state = AppState::default();
        terminal.draw(|f| draw(f, &mut state)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("OPERATION CENTER"));
        assert!(text.contains("TACTICAL MAP"));
        assert!(text.contains("Welcome to the ATIN 'TO! Operation Center."));
    }

    #[test]
    fn test_draw_shows_detail_for_selection() {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        let mut state = AppState::default();
        state
            .map
            .selector
            .select_feature("Reed Bank (Recto Bank)")
            .unwrap();
        terminal.draw(|f| draw(f, &mut state)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("RESOURCE ZONE"));
        assert!(text.contains("°N"));
    }

    #[test]
    fn test_draw_survives_tiny_terminals() {
        let mut state = AppState::default();
        for (w, h) in [(1, 1), (5, 3), (20, 4)] {
            let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
            terminal.draw(|f| draw(f, &mut state)).unwrap();
        }
    }
}
