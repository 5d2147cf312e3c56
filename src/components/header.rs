use crate::app::state::AppState;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
    pub terminal_width: u16,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Segment background colors for separator transitions
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let panel_bg = self.theme.header_panel.bg.unwrap_or(Color::Reset);
        let layer_bg = self.theme.header_layer.bg.unwrap_or(Color::Reset);
        let target_bg = self.theme.header_target.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        // Separator styles: fg = current segment bg, bg = next segment bg
        let sep_logo_panel = Style::default().fg(logo_bg).bg(panel_bg);
        let sep_panel_layer = Style::default().fg(panel_bg).bg(layer_bg);
        let sep_layer_target = Style::default().fg(layer_bg).bg(target_bg);
        let sep_target_base = Style::default().fg(target_bg).bg(base_bg);

        let map = &self.state.map;
        let selected = usize::from(!map.selector.state().is_empty());
        let target_text = format!(
            " {} {selected}/{} TARGET ",
            glyphs::SELECTED,
            map.selector.registry().features().len()
        );

        let spans = vec![
            Span::styled(" ATIN 'TO! ", self.theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, sep_logo_panel),
            Span::styled(
                format!(" {} ", self.state.focus.label()),
                self.theme.header_panel,
            ),
            Span::styled(glyphs::SEP_RIGHT, sep_panel_layer),
            Span::styled(
                format!(" {} ", map.base_layer.label()),
                self.theme.header_layer,
            ),
            Span::styled(glyphs::SEP_RIGHT, sep_layer_target),
            Span::styled(target_text, self.theme.header_target),
            Span::styled(glyphs::SEP_RIGHT, sep_target_base),
            Span::styled(" ".repeat(self.terminal_width as usize), self.theme.header),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
