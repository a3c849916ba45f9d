//! Completion system for the agentline session
//!
//! This module provides the line-completion engine used by the interactive
//! front end. Given the input buffer and the cursor position it produces a
//! ranked list of candidates for slash-commands, "@"-prefixed agent
//! mentions, and filesystem paths given to the history load/save commands.
//!
//! # Architecture
//!
//! The system consists of several components:
//!
//! - **Candidate**: one suggestion with insertion text, display text, the
//!   span it replaces, and a short annotation
//! - **PathResolver**: turns raw path text into a (directory, prefix) query
//! - **FileCompleter**: lists a directory, filtering by extension
//! - **CommandCompleter**: matches the slash-command registry
//! - **MentionCompleter**: matches known agent names
//! - **CompletionEngine**: picks exactly one strategy per request
//!
//! # Examples
//!
//! ```no_run
//! use agentline::completion::CompletionEngine;
//!
//! let engine = CompletionEngine::with_defaults();
//!
//! // Complete "/he" with cursor at position 3
//! let candidates = engine.complete("/he", 3);
//! // Returns the "help" command candidate
//! ```

mod candidate;
mod command;
mod context;
mod engine;
mod file;
mod mention;
mod path;

pub use candidate::Candidate;
pub use command::{COMMAND_MARKER, CommandCompleter, CommandRegistry};
pub use context::CompletionContext;
pub use engine::{CompletionEngine, FILE_ARGUMENT_COMMANDS};
pub use file::FileCompleter;
pub use mention::{AgentRegistry, MENTION_MARKER, MentionCompleter};
pub use path::{PathQuery, PathResolver};
