use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier},
    text::Span,
    widgets::{Cell, Row},
};

pub fn dim_area(buf: &mut Buffer, area: Rect) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &mut buf[(x, y)];
            cell.set_style(cell.style().add_modifier(Modifier::DIM));
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(100u16.saturating_sub(percent_y) / 2),
            Constraint::Percentage(percent_y.min(100)),
            Constraint::Percentage(100u16.saturating_sub(percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100u16.saturating_sub(percent_x) / 2),
            Constraint::Percentage(percent_x.min(100)),
            Constraint::Percentage(100u16.saturating_sub(percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn draw_drop_shadow(buf: &mut Buffer, area: Rect, terminal_area: Rect) {
    let shadow_area = Rect {
        x: area.x + 1,
        y: area.y + 1,
        ..area
    }
    .intersection(terminal_area);

    for y in shadow_area.top()..shadow_area.bottom() {
        for x in shadow_area.left()..shadow_area.right() {
            let cell = &mut buf[(x, y)];
            cell.set_style(ratatui::style::Style::default().bg(Color::Black));
            cell.set_symbol(" ");
        }
    }
}

/// A titled block of key/description rows for a two-column table, followed by a spacer.
pub fn key_section<'a>(
    title: &'a str,
    entries: &[(&'a str, &'a str)],
    theme: &Theme,
) -> Vec<Row<'a>> {
    let mut rows = vec![Row::new(vec![
        Cell::from(Span::styled(title, theme.header_item)),
        Cell::from(""),
    ])];
    rows.extend(entries.iter().map(|(key, desc)| {
        Row::new(vec![
            Cell::from(Span::styled(format!(" {key}"), theme.footer_segment_key)),
            Cell::from(Span::styled(*desc, theme.list_item)),
        ])
    }));
    rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
    rows
}
