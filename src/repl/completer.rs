//! Completer for reedline - bridges the completion engine to the editor

use reedline::{Completer, Span, Suggestion};

use crate::completion::CompletionEngine;

/// Line completer for reedline
pub struct LineCompleter {
    /// Completion engine producing the candidates
    engine: CompletionEngine,
}

impl LineCompleter {
    /// Create a new line completer
    ///
    /// # Arguments
    /// * `engine` - Configured completion engine
    ///
    /// # Returns
    /// * `Self` - New completer
    pub fn new(engine: CompletionEngine) -> Self {
        Self { engine }
    }
}

impl Completer for LineCompleter {
    /// Complete the input at the given cursor position
    ///
    /// # Arguments
    /// * `line` - The input line
    /// * `pos` - Cursor position (byte index)
    ///
    /// # Returns
    /// * `Vec<Suggestion>` - List of completion suggestions
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        self.engine
            .complete(line, pos)
            .into_iter()
            .map(|candidate| {
                // The candidate replaces only the matched prefix before the
                // cursor, never the marker or the command ahead of it.
                let start = pos.saturating_sub(candidate.replace_len);
                Suggestion {
                    value: candidate.insert_text,
                    description: Some(candidate.metadata),
                    style: None,
                    extra: None,
                    span: Span::new(start, pos),
                    append_whitespace: false,
                    match_indices: None,
                }
            })
            .collect()
    }
}
