use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

/// Single-line command prompt backed by a `TextArea`.
pub struct PromptInput<'a>(pub TextArea<'a>);

impl PromptInput<'_> {
    #[must_use]
    pub fn new() -> Self {
        let mut area = TextArea::default();
        area.set_cursor_line_style(Style::default());
        Self(area)
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().join("")
    }

    /// Returns the current text and leaves the prompt empty.
    pub fn take(&mut self) -> String {
        let text = self.text();
        *self = Self::new();
        text
    }

    pub fn set_text(&mut self, text: &str) {
        *self = Self::new();
        self.0.insert_str(text);
    }
}

impl Default for PromptInput<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PromptInput<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        area.set_cursor_line_style(Style::default());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for PromptInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptInput")
            .field("text", &self.text())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for PromptInput<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for PromptInput<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PromptInput<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &PromptInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_empties_prompt() {
        let mut prompt = PromptInput::new();
        prompt.insert_str("mission");
        assert_eq!(prompt.take(), "mission");
        assert_eq!(prompt.text(), "");
    }

    #[test]
    fn test_set_text_replaces_content() {
        let mut prompt = PromptInput::new();
        prompt.insert_str("old");
        prompt.set_text("help");
        assert_eq!(prompt.text(), "help");
        assert_eq!(prompt.cursor(), (0, 4));
        assert_eq!(prompt.clone(), prompt);
    }
}
