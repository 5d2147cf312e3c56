use crate::app::state::terminal::{wrap_rows, TerminalState};
use crate::app::ui::{key_hints, panel_block};
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Transcript area and prompt row inside the panel border.
fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area.inner(Margin::new(1, 1)));
    (chunks[0], chunks[1])
}

fn max_scroll_rows(rows: usize, height: u16) -> u16 {
    u16::try_from(rows.saturating_sub(height as usize)).unwrap_or(u16::MAX)
}

/// How far the transcript can scroll back when the panel is drawn at `area`.
#[must_use]
pub fn max_scroll(terminal: &TerminalState, area: Rect) -> u16 {
    let (transcript_area, _) = split(area);
    if transcript_area.height == 0 {
        return 0;
    }
    let rows = wrap_rows(terminal.lines(), transcript_area.width as usize);
    max_scroll_rows(rows.len(), transcript_area.height)
}

/// The Operation Center: transcript above, `$` prompt on the last row.
pub struct TerminalPanel<'a> {
    pub terminal: &'a TerminalState<'a>,
    pub theme: &'a Theme,
    pub focused: bool,
}

impl Widget for TerminalPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = panel_block("OPERATION CENTER", self.focused, theme).title_bottom(key_hints(
            &[("Enter", "run"), ("PgUp/PgDn", "scroll")],
            theme.footer_segment_key,
        ));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let (transcript_area, prompt_area) = split(area);

        if transcript_area.height > 0 {
            let rows = wrap_rows(self.terminal.lines(), transcript_area.width as usize);
            let height = transcript_area.height as usize;
            let scroll = self
                .terminal
                .scroll_from_bottom
                .min(max_scroll_rows(rows.len(), transcript_area.height));
            let start = rows.len().saturating_sub(height + scroll as usize);

            let lines: Vec<Line> = rows
                .into_iter()
                .skip(start)
                .take(height)
                .map(|(text, is_echo)| {
                    let style = if is_echo {
                        theme.transcript_echo
                    } else {
                        theme.transcript_text
                    };
                    Line::from(Span::styled(text, style))
                })
                .collect();
            Paragraph::new(lines).render(transcript_area, buf);
        }

        if prompt_area.height > 0 {
            let prefix = format!("{} ", glyphs::PROMPT);
            let prefix_width = prefix.len() as u16;
            Span::styled(prefix, theme.prompt).render(prompt_area, buf);
            if prompt_area.width > prefix_width {
                let input_area = Rect {
                    x: prompt_area.x + prefix_width,
                    width: prompt_area.width - prefix_width,
                    ..prompt_area
                };
                if self.focused {
                    (&self.terminal.prompt).render(input_area, buf);
                } else {
                    Span::styled(self.terminal.prompt.text(), theme.dimmed)
                        .render(input_area, buf);
                }
            }
        }
    }
}
