use super::input::PromptInput;
use crate::domain::command::CommandTable;
use crate::domain::interpreter::{CommandInterpreter, TranscriptLine};
use std::sync::Arc;

/// Operation Center panel: interpreter session, prompt, recall history, scroll.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TerminalState<'a> {
    pub interpreter: CommandInterpreter,
    pub prompt: PromptInput<'a>,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
    /// Rows scrolled up from the bottom of the transcript. 0 follows new output.
    pub scroll_from_bottom: u16,
}

impl TerminalState<'_> {
    #[must_use]
    pub fn new(table: Arc<CommandTable>) -> Self {
        Self {
            interpreter: CommandInterpreter::new(table),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[TranscriptLine] {
        self.interpreter.transcript().lines()
    }
}

/// Splits transcript lines into rows of at most `width` characters.
/// Empty lines still take one row.
#[must_use]
pub fn wrap_rows(lines: &[TranscriptLine], width: usize) -> Vec<(String, bool)> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in lines {
        let chars: Vec<char> = line.text.chars().collect();
        if chars.is_empty() {
            rows.push((String::new(), line.is_echo));
            continue;
        }
        for chunk in chars.chunks(width) {
            rows.push((chunk.iter().collect(), line.is_echo));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_rows_splits_long_lines() {
        let lines = vec![
            TranscriptLine::echo("abc"),
            TranscriptLine::output("0123456789"),
            TranscriptLine::output(""),
        ];
        let rows = wrap_rows(&lines, 4);
        let texts: Vec<&str> = rows.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(texts, vec!["> ab", "c", "0123", "4567", "89", ""]);
        assert!(rows[0].1 && rows[1].1);
        assert!(!rows[2].1);
    }

    #[test]
    fn test_wrap_rows_zero_width_does_not_panic() {
        let rows = wrap_rows(&[TranscriptLine::output("xy")], 0);
        assert_eq!(rows.len(), 2);
    }
}
