//! Command trait, output variants and the command registry.

use std::collections::BTreeMap;

use time::OffsetDateTime;

use folio_types::error::Result;

use crate::cells::FetchKind;
use crate::rich::RichBlock;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Plain (possibly multi-line) text.
    Text(String),
    /// Structured card.
    Rich(RichBlock),
    /// Mount a live cell that fetches its content in the background.
    Async(FetchKind),
    /// Signal to wipe the scrollback.
    Clear,
}

/// Read-only context passed to every command.
pub struct Environment<'a> {
    /// The registry the command was resolved from (for `help`).
    pub registry: &'a CommandRegistry,
    /// Logged-in user name.
    pub user: &'a str,
    /// Wall-clock time at submission.
    pub now: OffsetDateTime,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Produce this command's output.
    fn execute(&self, env: &Environment<'_>) -> Result<CommandOutput>;
}

/// Registry of available commands, keyed by lowercase name.
///
/// Populated once at start-up and shared read-only afterwards.
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let key = normalize(cmd.name());
        if self.commands.insert(key, cmd).is_some() {
            log::warn!("Command registered twice; keeping the latest");
        }
    }

    /// Resolve a command by name, ignoring case and surrounding whitespace.
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(&normalize(name)).map(|c| c.as_ref())
    }

    /// Return (name, description) pairs sorted by name.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.commands
            .values()
            .map(|c| (c.name(), c.description()))
            .collect()
    }

    /// Command names whose lowercase form starts with the lowercase `partial`.
    pub fn completions(&self, partial: &str) -> Vec<&str> {
        let lower = partial.to_lowercase();
        self.commands
            .iter()
            .filter(|(key, _)| key.starts_with(&lower))
            .map(|(_, cmd)| cmd.name())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Trim and case-fold a command name.
pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
