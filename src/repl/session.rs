//! Conversation transcript for the chat session
//!
//! Holds the messages exchanged during the session and implements the
//! targets of `/save_history` and `/load_history`: JSON persistence and a
//! Markdown rendering for notes. These two formats are why `.json` and
//! `.md` are the default completion extensions for history arguments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

use crate::error::{HistoryError, Result};

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

/// One message in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Message originator.
    pub role: Role,

    /// Agent the message was addressed to or produced by.
    pub agent: String,

    /// Message body.
    pub content: String,

    /// When the message was recorded.
    pub timestamp: DateTime<Utc>,
}

/// Conversation transcript, ordered oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    entries: Vec<TranscriptEntry>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message from the user to an agent.
    ///
    /// # Arguments
    /// * `agent` - Addressed agent name
    /// * `content` - Message body
    pub fn record_user(&mut self, agent: impl Into<String>, content: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            role: Role::User,
            agent: agent.into(),
            content: content.into(),
            timestamp: Utc::now(),
        });
    }

    /// Record a message produced by an agent.
    pub fn record_agent(&mut self, agent: impl Into<String>, content: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            role: Role::Agent,
            agent: agent.into(),
            content: content.into(),
            timestamp: Utc::now(),
        });
    }

    /// Messages recorded so far.
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Number of recorded messages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all recorded messages.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Save the transcript to a file.
    ///
    /// The format is chosen by extension: `.json` writes the serialized
    /// transcript, `.md` writes a Markdown rendering. Any other extension
    /// is rejected.
    ///
    /// # Arguments
    /// * `path` - Target file path
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        match dotted_extension(path).as_deref() {
            Some(".json") => {
                let json = serde_json::to_string_pretty(self)
                    .map_err(|e| HistoryError::InvalidFormat(e.to_string()))?;
                std::fs::write(path, json)?;
                Ok(())
            }
            Some(".md") => {
                std::fs::write(path, self.to_markdown())?;
                Ok(())
            }
            other => Err(HistoryError::UnsupportedExtension(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }

    /// Load a transcript from a JSON file.
    ///
    /// Markdown files are a save-only rendering and cannot be loaded back.
    ///
    /// # Arguments
    /// * `path` - Source file path
    ///
    /// # Returns
    /// * `Result<Session>` - Loaded session or error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if dotted_extension(path).as_deref() != Some(".json") {
            return Err(HistoryError::UnsupportedExtension(
                dotted_extension(path).unwrap_or_else(|| "<none>".to_string()),
            )
            .into());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|_| HistoryError::FileNotFound(path.display().to_string()))?;
        let session =
            serde_json::from_str(&contents).map_err(|e| HistoryError::InvalidFormat(e.to_string()))?;
        Ok(session)
    }

    /// Render the transcript as Markdown.
    fn to_markdown(&self) -> String {
        let mut out = String::from("# Conversation history\n");
        for entry in &self.entries {
            let speaker = match entry.role {
                Role::User => "user",
                Role::Agent => entry.agent.as_str(),
            };
            let _ = write!(
                out,
                "\n## {speaker} ({})\n\n{}\n",
                entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
                entry.content
            );
        }
        out
    }
}

/// Lowercased extension of a path including the leading dot.
fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_session() -> Session {
        let mut session = Session::new();
        session.record_user("coder", "write a sort function");
        session.record_agent("coder", "done");
        session
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        sample_session().save(&path).unwrap();
        let loaded = Session::load(&path).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.entries()[0].role, Role::User);
        assert_eq!(loaded.entries()[1].agent, "coder");
    }

    #[test]
    fn test_markdown_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.md");

        sample_session().save(&path).unwrap();
        let rendered = std::fs::read_to_string(&path).unwrap();

        assert!(rendered.starts_with("# Conversation history"));
        assert!(rendered.contains("## user"));
        assert!(rendered.contains("write a sort function"));
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        let err = sample_session()
            .save(dir.path().join("history.txt"))
            .unwrap_err();
        assert!(err.to_string().contains("Unsupported"));
    }

    #[test]
    fn test_load_rejects_markdown() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.md");
        sample_session().save(&path).unwrap();

        assert!(Session::load(&path).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Session::load("/no/such/history.json").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_clear() {
        let mut session = sample_session();
        session.clear();
        assert!(session.is_empty());
    }
}
