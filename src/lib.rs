//! Agentline Library
//!
//! This library provides the interactive line-completion engine used by a
//! terminal chat client, plus the thin reedline front end that consumes it.
//! The completion engine is a plain library with no CLI surface of its own:
//! a line-editing front end supplies the input buffer and cursor offset and
//! renders whatever candidates come back.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `completion`: The completion engine (commands, mentions, file paths)
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `repl`: Interactive line editor and conversation transcript
//!
//! # Example
//!
//! ```no_run
//! use agentline::completion::{AgentRegistry, CommandRegistry, CompletionEngine, FileCompleter};
//!
//! let engine = CompletionEngine::new(
//!     CommandRegistry::builtin(),
//!     AgentRegistry::new(["coder", "writer"]),
//!     &FileCompleter::DEFAULT_EXTENSIONS,
//!     std::env::current_dir().unwrap(),
//! );
//!
//! for candidate in engine.complete("/loa", 4) {
//!     println!("{} - {}", candidate.insert_text, candidate.metadata);
//! }
//! ```

pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod repl;

// Re-export commonly used types
pub use completion::{Candidate, CompletionEngine};
pub use config::Config;
pub use error::{AgentlineError, Result};
pub use repl::{ReplEngine, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}
