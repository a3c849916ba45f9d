//! Interactive front end for the chat session
//!
//! This module provides the reedline-based line editor that consumes the
//! completion engine:
//! - Line editing with a Tab-triggered completion menu
//! - File-backed input history
//! - A prompt naming the active agent
//! - The conversation transcript with JSON save / Markdown export

mod completer;
mod engine;
mod prompt;
mod session;

pub use completer::LineCompleter;
pub use engine::ReplEngine;
pub use prompt::ChatPrompt;
pub use session::{Role, Session, TranscriptEntry};
