//! Completion context definitions
//!
//! This module defines the completion context types that represent which
//! completion strategy should answer a request based on the text before the
//! cursor. Exactly one strategy answers a given request; contexts are never
//! merged.

/// Represents the kind of completion needed for the current input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionContext {
    /// Complete a slash-command name.
    Command {
        /// Prefix typed after the command marker, up to any whitespace.
        prefix: String,
    },

    /// Complete an "@"-prefixed agent mention.
    Mention {
        /// Prefix typed after the mention marker.
        prefix: String,
    },

    /// Complete a filesystem path given as the argument of a history
    /// load/save command.
    FileArgument {
        /// Raw path text typed after the command and its trailing space.
        raw_path: String,
    },

    /// No completion available.
    None,
}

impl CompletionContext {
    /// Create a command completion context.
    pub fn command(prefix: impl Into<String>) -> Self {
        Self::Command {
            prefix: prefix.into(),
        }
    }

    /// Create a mention completion context.
    pub fn mention(prefix: impl Into<String>) -> Self {
        Self::Mention {
            prefix: prefix.into(),
        }
    }

    /// Create a file-argument completion context.
    pub fn file_argument(raw_path: impl Into<String>) -> Self {
        Self::FileArgument {
            raw_path: raw_path.into(),
        }
    }

    /// Check if this is a None context.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
