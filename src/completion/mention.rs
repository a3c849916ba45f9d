//! Agent mention completion
//!
//! Matches a registry of known agent names against an "@"-prefixed query.
//! Matching is case-insensitive but candidates always carry the registry's
//! original casing.

use super::candidate::Candidate;

/// Marker character that introduces an agent mention.
pub const MENTION_MARKER: char = '@';

/// Registry of known agent names, case preserved for display.
#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
    names: Vec<String>,
}

impl AgentRegistry {
    /// Create a registry from a list of agent names.
    ///
    /// Duplicate names (compared case-insensitively) are dropped, keeping
    /// the first occurrence.
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut registry = Self { names: Vec::new() };
        for name in names {
            registry.add(name);
        }
        registry
    }

    /// Add a name if an equivalent one is not already present.
    pub fn add(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.contains(&name) {
            self.names.push(name);
        }
    }

    /// Check membership, case-insensitively.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// Resolve a name to its registered casing.
    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|n| n.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    /// Iterate over registered names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of registered agents.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Completer for "@"-prefixed agent mentions.
pub struct MentionCompleter {
    registry: AgentRegistry,
}

impl MentionCompleter {
    /// Create a mention completer over a registry.
    pub fn new(registry: AgentRegistry) -> Self {
        Self { registry }
    }

    /// Access the underlying registry.
    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// Complete a buffer that starts with the mention marker.
    ///
    /// # Arguments
    /// * `buffer` - Text before the cursor, starting with `@`
    ///
    /// # Returns
    /// * `Vec<Candidate>` - One candidate per matching agent, original casing
    pub fn complete(&self, buffer: &str) -> Vec<Candidate> {
        let after_marker = buffer.strip_prefix(MENTION_MARKER).unwrap_or(buffer);
        let prefix = after_marker.split(char::is_whitespace).next().unwrap_or("");
        let prefix_lower = prefix.to_lowercase();

        self.registry
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&prefix_lower))
            .map(|name| Candidate::new(name, prefix.len(), "agent"))
            .collect()
    }
}
