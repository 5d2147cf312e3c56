use crate::app::ui::{key_hints, panel_block};
use crate::domain::geo::FeatureRegistry;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, StatefulWidget},
};

/// Keyboard-navigable index of the registry, beside the canvas.
pub struct FeatureList<'a> {
    pub registry: &'a FeatureRegistry,
    pub selected: Option<&'a str>,
    pub theme: &'a Theme,
    pub focused: bool,
}

impl StatefulWidget for FeatureList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let theme = self.theme;
        let items: Vec<ListItem> = self
            .registry
            .features()
            .iter()
            .map(|feature| {
                let marker = if self.selected == Some(feature.id.as_str()) {
                    Span::styled(format!("{} ", glyphs::SELECTED), theme.marker_selected)
                } else {
                    Span::raw("  ")
                };
                ListItem::new(Line::from(vec![
                    marker,
                    Span::styled(
                        format!("{} ", glyphs::category(feature.category)),
                        Style::default().fg(theme.marker(feature.category)),
                    ),
                    Span::styled(feature.id.as_str(), theme.list_item),
                ]))
            })
            .collect();

        let block = panel_block("TARGETS", self.focused, theme).title_bottom(key_hints(
            &[("j/k", "move"), ("Enter", "select")],
            theme.footer_segment_key,
        ));
        let highlight = if self.focused {
            theme.list_selected
        } else {
            theme.dimmed
        };

        StatefulWidget::render(
            List::new(items).block(block).highlight_style(highlight),
            area,
            buf,
            state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_feature_and_marks_selection() {
        let registry = FeatureRegistry::default();
        let area = Rect::new(0, 0, 50, 9);
        let mut buf = Buffer::empty(area);
        let mut state = ListState::default().with_selected(Some(0));
        FeatureList {
            registry: &registry,
            selected: Some("Reed Bank (Recto Bank)"),
            theme: &Theme::default(),
            focused: true,
        }
        .render(area, &mut buf, &mut state);

        let rows: Vec<String> = (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol().to_string()).collect())
            .collect();
        assert!(rows[1].contains("Scarborough Shoal"));
        assert!(rows[3].contains(glyphs::SELECTED));
        assert!(rows[3].contains("Reed Bank"));
        assert!(rows[5].contains("Thitu Island"));
    }
}
