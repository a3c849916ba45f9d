//! Completion candidate type
//!
//! A [`Candidate`] is one suggestion produced by the completion engine. It
//! carries the text to splice into the buffer, the text to show in the menu,
//! how much of the buffer it replaces, and a short annotation for the user
//! (a command description, "directory", ".json file", ...).

/// A single completion suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Text spliced into the buffer, replacing the matched prefix.
    pub insert_text: String,

    /// Text shown to the user. May differ from `insert_text`, e.g. a
    /// directory is displayed with its trailing separator.
    pub display_text: String,

    /// Number of bytes immediately before the cursor that this candidate
    /// replaces. Equals the byte length of the matched prefix; never more
    /// than the text that was used to compute the match.
    pub replace_len: usize,

    /// Short free-text annotation shown next to the candidate.
    pub metadata: String,
}

impl Candidate {
    /// Create a candidate whose display text equals its insertion text.
    ///
    /// # Arguments
    /// * `text` - Insertion and display text
    /// * `replace_len` - Byte length of the matched prefix
    /// * `metadata` - Annotation shown next to the candidate
    pub fn new(text: impl Into<String>, replace_len: usize, metadata: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            display_text: text.clone(),
            insert_text: text,
            replace_len,
            metadata: metadata.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_candidate_mirrors_text() {
        let candidate = Candidate::new("help", 2, "Show available commands");
        assert_eq!(candidate.insert_text, "help");
        assert_eq!(candidate.display_text, "help");
        assert_eq!(candidate.replace_len, 2);
        assert_eq!(candidate.metadata, "Show available commands");
    }

    #[test]
    fn test_candidate_equality() {
        let a = Candidate::new("notes.md", 4, ".md file");
        let b = Candidate::new("notes.md", 4, ".md file");
        assert_eq!(a, b);
    }
}
