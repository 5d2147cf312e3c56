use crate::domain::geo::GeoFeature;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Popup-style card for the selected feature. Dismissed with Esc or `x`.
pub struct FeatureDetail<'a> {
    pub feature: &'a GeoFeature,
    pub theme: &'a Theme,
}

impl Widget for FeatureDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let feature = self.feature;
        let color = theme.marker(feature.category);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    format!("{} {}", glyphs::category(feature.category), feature.id),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("Esc/x", theme.footer_segment_key),
                Span::raw(": dismiss "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color));

        let lines = vec![
            Line::from(vec![
                Span::styled(format!(" {} ", feature.status_label), theme.badge),
                Span::raw("  "),
                Span::styled(feature.coordinates.to_string(), theme.coordinates),
            ]),
            Line::from(""),
            Line::from(Span::styled(feature.description.as_str(), theme.list_item)),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
