use crate::domain::command::{CommandEffect, CommandTable};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow, key_section};

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
    pub commands: &'a CommandTable,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let mut rows = key_section(
            "Operation Center",
            &[
                ("Enter", "Run the typed command"),
                ("\u{2191} / \u{2193}", "Recall earlier commands"),
                ("PgUp / PgDn", "Scroll the transcript"),
            ],
            self.theme,
        );
        let commands: Vec<(&str, &str)> = self
            .commands
            .entries()
            .iter()
            .map(|entry| {
                let desc = match &entry.effect {
                    CommandEffect::FixedReply(reply) => reply.as_str(),
                    CommandEffect::ResetTranscript => "Wipe the transcript",
                };
                (entry.trigger.as_str(), desc)
            })
            .collect();
        rows.extend(key_section("Commands", &commands, self.theme));
        rows.extend(key_section(
            "Tactical Map",
            &[
                ("j / \u{2193}", "Next target"),
                ("k / \u{2191}", "Previous target"),
                ("Enter / click", "Select target"),
                ("Esc / x", "Dismiss detail panel"),
                ("l", "Toggle legend"),
                ("b", "Toggle base layer"),
                ("i / :", "Back to the terminal"),
            ],
            self.theme,
        ));
        rows.extend(key_section(
            "General",
            &[
                ("Tab", "Switch panel"),
                ("F1", "Toggle this help"),
                ("?", "Toggle this help (from the map)"),
                ("Esc", "Close help / dismiss error"),
                ("q / Ctrl+c", "Quit (q from the map)"),
            ],
            self.theme,
        ));

        Table::new(rows, [Constraint::Length(18), Constraint::Min(10)])
            .block(block)
            .column_spacing(2)
            .render(help_area, buf);
    }
}
