//! Slash-command completion
//!
//! A fixed registry of commands, each with a one-line description, matched
//! against the token typed after the command marker. Matching is
//! case-sensitive: the command vocabulary is defined lowercase, unlike file
//! and mention matching which are case-insensitive.

use super::candidate::Candidate;

/// Marker character that introduces a slash-command.
pub const COMMAND_MARKER: char = '/';

/// Registry of available commands with their descriptions.
///
/// Keys are unique; iteration preserves insertion order so the displayed
/// list is stable, while matching itself is order-independent.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    entries: Vec<(String, String)>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry of the built-in session commands.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("help", "Show available commands");
        registry.register("agents", "List available agents");
        registry.register("usage", "Show session message counts");
        registry.register("clear", "Clear the screen");
        registry.register("save_history", "Save conversation history to a file");
        registry.register("save", "Save conversation history to a file");
        registry.register("load_history", "Load conversation history from a file");
        registry.register("load", "Load conversation history from a file");
        registry.register("exit", "Leave the session");
        registry.register("quit", "Leave the session");
        registry
    }

    /// Add a command, replacing the description of an existing one.
    ///
    /// # Arguments
    /// * `name` - Command name without the marker
    /// * `description` - One-line description shown in completions
    pub fn register(&mut self, name: impl Into<String>, description: impl Into<String>) {
        let name = name.into();
        let description = description.into();

        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = description;
        } else {
            self.entries.push((name, description));
        }
    }

    /// Look up a command description by exact name.
    pub fn description(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d.as_str())
    }

    /// Iterate over `(name, description)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d.as_str()))
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Completer for slash-commands.
pub struct CommandCompleter {
    registry: CommandRegistry,
}

impl CommandCompleter {
    /// Create a command completer over a registry.
    pub fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    /// Access the underlying registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Complete a buffer that starts with the command marker.
    ///
    /// The token between the marker and the first whitespace is the prefix;
    /// an empty prefix matches every command.
    ///
    /// # Arguments
    /// * `buffer` - Text before the cursor, starting with `/`
    ///
    /// # Returns
    /// * `Vec<Candidate>` - One candidate per matching command
    pub fn complete(&self, buffer: &str) -> Vec<Candidate> {
        let after_marker = buffer.strip_prefix(COMMAND_MARKER).unwrap_or(buffer);
        // Token between the marker and the first whitespace.
        let prefix = after_marker
            .split(char::is_whitespace)
            .next()
            .unwrap_or("");

        self.registry
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(name, description)| Candidate::new(name, prefix.len(), description))
            .collect()
    }
}
