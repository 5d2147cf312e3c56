use std::fmt;

pub const HELP_REPLY: &str = "Available commands: [help, mission, join, clear]";
pub const MISSION_REPLY: &str =
    "Our mission is to defend the WPS digital frontier through code, awareness, and cybersecurity.";
pub const JOIN_REPLY: &str =
    "Connecting to secure server... To join, enlist in our Discord community. The link is above.";

/// What happens when a trigger matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEffect {
    FixedReply(String),
    ResetTranscript,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub trigger: String,
    pub effect: CommandEffect,
}

impl CommandEntry {
    /// Builds an entry, normalizing the trigger the same way user input is normalized.
    pub fn new(trigger: &str, effect: CommandEffect) -> Self {
        Self {
            trigger: normalize(trigger),
            effect,
        }
    }

    pub fn reply(trigger: &str, text: &str) -> Self {
        Self::new(trigger, CommandEffect::FixedReply(text.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandTableError {
    #[error("command trigger must not be empty")]
    EmptyTrigger,
    #[error("duplicate command trigger: '{0}'")]
    DuplicateTrigger(String),
}

/// Closed vocabulary of terminal commands. Triggers are unique and already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTable {
    entries: Vec<CommandEntry>,
}

impl CommandTable {
    pub fn new(entries: Vec<CommandEntry>) -> Result<Self, CommandTableError> {
        let mut table = Self {
            entries: Vec::with_capacity(entries.len()),
        };
        for entry in entries {
            if entry.trigger.is_empty() {
                return Err(CommandTableError::EmptyTrigger);
            }
            if table.lookup(&entry.trigger).is_some() {
                return Err(CommandTableError::DuplicateTrigger(entry.trigger));
            }
            table.entries.push(entry);
        }
        Ok(table)
    }

    /// Applies overrides on top of this table: an existing trigger is replaced,
    /// a new one is appended. Duplicates inside `overrides` are rejected.
    pub fn with_overrides(mut self, overrides: Vec<CommandEntry>) -> Result<Self, CommandTableError> {
        let overrides = CommandTable::new(overrides)?;
        for entry in overrides.entries {
            match self.entries.iter_mut().find(|e| e.trigger == entry.trigger) {
                Some(existing) => existing.effect = entry.effect,
                None => self.entries.push(entry),
            }
        }
        Ok(self)
    }

    /// Whole-string match of the normalized input. No prefixes, no arguments.
    #[must_use]
    pub fn lookup(&self, input: &str) -> Option<&CommandEffect> {
        let key = normalize(input);
        self.entries
            .iter()
            .find(|e| e.trigger == key)
            .map(|e| &e.effect)
    }

    #[must_use]
    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn triggers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.trigger.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self {
            entries: vec![
                CommandEntry::reply("help", HELP_REPLY),
                CommandEntry::reply("mission", MISSION_REPLY),
                CommandEntry::reply("join", JOIN_REPLY),
                CommandEntry::new("clear", CommandEffect::ResetTranscript),
            ],
        }
    }
}

impl fmt::Display for CommandTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.triggers().collect::<Vec<_>>().join(", "))
    }
}

#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_lookup_ignores_case_and_padding() {
        let table = CommandTable::default();
        assert_eq!(
            table.lookup("  HeLp \t"),
            Some(&CommandEffect::FixedReply(HELP_REPLY.to_string()))
        );
        assert_eq!(table.lookup("CLEAR"), Some(&CommandEffect::ResetTranscript));
    }

    #[test]
    fn test_lookup_is_whole_string_only() {
        let table = CommandTable::default();
        assert!(table.lookup("hel").is_none());
        assert!(table.lookup("help me").is_none());
        assert!(table.lookup("").is_none());
    }

    #[test]
    fn test_new_rejects_duplicates_after_normalizing() {
        let err = CommandTable::new(vec![
            CommandEntry::reply("ping", "pong"),
            CommandEntry::reply(" PING ", "again"),
        ])
        .unwrap_err();
        assert_eq!(err, CommandTableError::DuplicateTrigger("ping".to_string()));
    }

    #[test]
    fn test_new_rejects_blank_trigger() {
        let err = CommandTable::new(vec![CommandEntry::reply("   ", "x")]).unwrap_err();
        assert_eq!(err, CommandTableError::EmptyTrigger);
    }

    #[test]
    fn test_overrides_replace_and_append() {
        let table = CommandTable::default()
            .with_overrides(vec![
                CommandEntry::reply("join", "Sign up at the front desk."),
                CommandEntry::reply("status", "All systems nominal."),
            ])
            .unwrap();

        assert_eq!(table.len(), 5);
        assert_eq!(
            table.lookup("join"),
            Some(&CommandEffect::FixedReply("Sign up at the front desk.".to_string()))
        );
        assert!(table.lookup("status").is_some());
        assert_eq!(table.to_string(), "[help, mission, join, clear, status]");
    }
}
