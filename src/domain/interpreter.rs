use super::command::{normalize, CommandEffect, CommandTable};
use std::sync::Arc;

pub const WELCOME_LINES: [&str; 2] = [
    "Welcome to the ATIN 'TO! Operation Center.",
    "Type 'help' to see available commands.",
];

pub const ECHO_PREFIX: &str = "> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub text: String,
    pub is_echo: bool,
}

impl TranscriptLine {
    pub fn output(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_echo: false,
        }
    }

    pub fn echo(raw: &str) -> Self {
        Self {
            text: format!("{ECHO_PREFIX}{raw}"),
            is_echo: true,
        }
    }
}

/// Result of a single submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptDelta {
    /// A trigger matched a fixed reply.
    Reply(Vec<TranscriptLine>),
    /// Nothing matched; the lines carry the inline error.
    UnknownCommand(Vec<TranscriptLine>),
    /// The transcript was reset to empty, echo included.
    Cleared,
}

impl TranscriptDelta {
    #[must_use]
    pub fn appended(&self) -> &[TranscriptLine] {
        match self {
            TranscriptDelta::Reply(lines) | TranscriptDelta::UnknownCommand(lines) => lines,
            TranscriptDelta::Cleared => &[],
        }
    }
}

#[must_use]
pub fn unknown_command_message(normalized: &str) -> String {
    format!("Error: Command '{normalized}' not found. Type 'help' for options.")
}

/// Resolves one raw line against the table without touching any transcript.
#[must_use]
pub fn resolve(table: &CommandTable, raw: &str) -> TranscriptDelta {
    match table.lookup(raw) {
        Some(CommandEffect::FixedReply(reply)) => {
            let mut lines = vec![TranscriptLine::echo(raw)];
            if !reply.is_empty() {
                lines.push(TranscriptLine::output(reply.clone()));
            }
            TranscriptDelta::Reply(lines)
        }
        Some(CommandEffect::ResetTranscript) => TranscriptDelta::Cleared,
        None => TranscriptDelta::UnknownCommand(vec![
            TranscriptLine::echo(raw),
            TranscriptLine::output(unknown_command_message(&normalize(raw))),
        ]),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
}

impl Transcript {
    #[must_use]
    pub fn welcome() -> Self {
        Self {
            lines: WELCOME_LINES
                .iter()
                .map(|l| TranscriptLine::output(*l))
                .collect(),
        }
    }

    pub fn apply(&mut self, delta: &TranscriptDelta) {
        match delta {
            TranscriptDelta::Cleared => self.lines.clear(),
            other => self.lines.extend_from_slice(other.appended()),
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One Operation Center session: a command table and the transcript it writes to.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandInterpreter {
    table: Arc<CommandTable>,
    transcript: Transcript,
}

impl CommandInterpreter {
    #[must_use]
    pub fn new(table: Arc<CommandTable>) -> Self {
        Self {
            table,
            transcript: Transcript::welcome(),
        }
    }

    /// Never fails: unknown input is reported inline.
    pub fn submit(&mut self, raw: &str) -> TranscriptDelta {
        let delta = resolve(&self.table, raw);
        match &delta {
            TranscriptDelta::Reply(_) => {
                tracing::debug!(command = %normalize(raw), "command matched");
            }
            TranscriptDelta::UnknownCommand(_) => {
                tracing::debug!(command = %normalize(raw), "unknown command");
            }
            TranscriptDelta::Cleared => {
                tracing::debug!(dropped = self.transcript.len(), "transcript cleared");
            }
        }
        self.transcript.apply(&delta);
        delta
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[must_use]
    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Swaps the vocabulary; the transcript is kept.
    pub fn set_table(&mut self, table: Arc<CommandTable>) {
        self.table = table;
    }
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new(Arc::new(CommandTable::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::command::{CommandEntry, HELP_REPLY, MISSION_REPLY};

    fn texts(lines: &[TranscriptLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_mount_seeds_welcome_lines() {
        let interp = CommandInterpreter::default();
        assert_eq!(
            texts(interp.transcript().lines()),
            vec![
                "Welcome to the ATIN 'TO! Operation Center.",
                "Type 'help' to see available commands."
            ]
        );
        assert!(interp.transcript().lines().iter().all(|l| !l.is_echo));
    }

    #[test]
    fn test_help_in_capitals_appends_echo_and_reply() {
        let mut interp = CommandInterpreter::default();
        interp.submit("HELP");
        let lines = interp.transcript().lines();
        assert_eq!(lines.len(), 4);
        assert_eq!(texts(&lines[2..]), vec!["> HELP", HELP_REPLY]);
        assert!(lines[2].is_echo);
        assert!(!lines[3].is_echo);
    }

    #[test]
    fn test_echo_keeps_raw_input_verbatim() {
        let mut interp = CommandInterpreter::default();
        let delta = interp.submit("  Mission ");
        assert_eq!(texts(delta.appended()), vec![">   Mission ", MISSION_REPLY]);
    }

    #[test]
    fn test_unknown_command_reports_normalized_input() {
        let mut interp = CommandInterpreter::default();
        let delta = interp.submit("foo");
        assert!(matches!(delta, TranscriptDelta::UnknownCommand(_)));
        assert_eq!(
            texts(&interp.transcript().lines()[2..]),
            vec![
                "> foo",
                "Error: Command 'foo' not found. Type 'help' for options."
            ]
        );

        let delta = interp.submit("  Launch Codes ");
        assert_eq!(
            texts(delta.appended()),
            vec![
                ">   Launch Codes ",
                "Error: Command 'launch codes' not found. Type 'help' for options."
            ]
        );
    }

    #[test]
    fn test_clear_empties_everything_including_its_own_echo() {
        let mut interp = CommandInterpreter::default();
        interp.submit("help");
        interp.submit("nope");
        assert_eq!(interp.transcript().len(), 6);

        let delta = interp.submit(" ClEaR ");
        assert_eq!(delta, TranscriptDelta::Cleared);
        assert!(interp.transcript().is_empty());

        interp.submit("clear");
        assert!(interp.transcript().is_empty());
    }

    #[test]
    fn test_empty_reply_is_omitted() {
        let table = CommandTable::new(vec![CommandEntry::reply("silent", "")]).unwrap();
        let mut interp = CommandInterpreter::new(Arc::new(table));
        let delta = interp.submit("silent");
        assert_eq!(texts(delta.appended()), vec!["> silent"]);
    }

    #[test]
    fn test_empty_input_is_an_unknown_command() {
        let delta = resolve(&CommandTable::default(), "   ");
        assert_eq!(
            texts(delta.appended()),
            vec![
                ">    ",
                "Error: Command '' not found. Type 'help' for options."
            ]
        );
    }

    #[test]
    fn test_set_table_keeps_transcript() {
        let mut interp = CommandInterpreter::default();
        interp.submit("help");
        let table = CommandTable::new(vec![CommandEntry::reply("ping", "pong")]).unwrap();
        interp.set_table(Arc::new(table));
        assert_eq!(interp.transcript().len(), 4);

        let delta = interp.submit("help");
        assert!(matches!(delta, TranscriptDelta::UnknownCommand(_)));
        let delta = interp.submit("PING");
        assert_eq!(texts(delta.appended()), vec!["> PING", "pong"]);
    }
}
