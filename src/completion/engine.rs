//! Completion engine - dispatches to the strategy that owns the input
//!
//! The engine inspects the text before the cursor and picks exactly one
//! strategy: file path completion for the history load/save commands,
//! slash-command completion, or agent mention completion. Strategies are
//! never merged, and nothing the engine does can fail; every degenerate
//! input produces an empty candidate list.

use std::path::PathBuf;

use tracing::debug;

use super::candidate::Candidate;
use super::command::{COMMAND_MARKER, CommandCompleter, CommandRegistry};
use super::context::CompletionContext;
use super::file::FileCompleter;
use super::mention::{AgentRegistry, MENTION_MARKER, MentionCompleter};
use super::path::PathResolver;

/// Commands whose argument is a file path, each with its required trailing
/// space. Matched case-insensitively, and checked before generic command
/// dispatch: these strings also start with the command marker, so the more
/// specific rule has to win.
pub const FILE_ARGUMENT_COMMANDS: [&str; 4] =
    ["/load_history ", "/load ", "/save_history ", "/save "];

/// Main completion engine.
///
/// Holds immutable per-session configuration (registries, allowed
/// extensions, base directory); each `complete` call is independent and
/// side-effect-free apart from reading a directory.
pub struct CompletionEngine {
    commands: CommandCompleter,
    mentions: MentionCompleter,
    files: FileCompleter,
    base_dir: PathBuf,
}

impl CompletionEngine {
    /// Create an engine over the given registries.
    ///
    /// # Arguments
    /// * `commands` - Slash-command registry
    /// * `agents` - Agent mention registry
    /// * `extensions` - File extensions offered for history arguments
    /// * `base_dir` - Directory relative path arguments resolve against
    pub fn new(
        commands: CommandRegistry,
        agents: AgentRegistry,
        extensions: &[impl AsRef<str>],
        base_dir: PathBuf,
    ) -> Self {
        Self {
            commands: CommandCompleter::new(commands),
            mentions: MentionCompleter::new(agents),
            files: FileCompleter::new(extensions),
            base_dir,
        }
    }

    /// Engine with the built-in commands, no agents, default extensions,
    /// and the process working directory as base.
    pub fn with_defaults() -> Self {
        Self::new(
            CommandRegistry::builtin(),
            AgentRegistry::default(),
            &FileCompleter::DEFAULT_EXTENSIONS,
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        )
    }

    /// Produce completion candidates for the buffer at the cursor.
    ///
    /// Only the text before the cursor participates; text after it is not
    /// part of the contract. The cursor is clamped to the nearest char
    /// boundary at or below `pos`.
    ///
    /// # Arguments
    /// * `line` - Full input buffer
    /// * `pos` - Cursor position (byte index)
    ///
    /// # Returns
    /// * `Vec<Candidate>` - Ordered candidates; empty means "no suggestions"
    pub fn complete(&self, line: &str, pos: usize) -> Vec<Candidate> {
        let before = text_before_cursor(line, pos);
        let context = Self::classify(before);
        debug!(?context, "completion dispatch");

        match context {
            CompletionContext::FileArgument { raw_path } => {
                let query = PathResolver::resolve(&raw_path, &self.base_dir);
                self.files.complete(&query)
            }
            CompletionContext::Command { .. } => self.commands.complete(before),
            CompletionContext::Mention { .. } => self.mentions.complete(before),
            CompletionContext::None => Vec::new(),
        }
    }

    /// Access the command registry (for help rendering).
    pub fn command_registry(&self) -> &CommandRegistry {
        self.commands.registry()
    }

    /// Access the agent registry.
    pub fn agent_registry(&self) -> &AgentRegistry {
        self.mentions.registry()
    }

    /// Decide which strategy owns the text before the cursor.
    ///
    /// The file-argument rule runs first: `/load ` is syntactically also a
    /// command-marker string and would otherwise be captured by the generic
    /// command rule.
    pub fn classify(before: &str) -> CompletionContext {
        let lowered = before.to_lowercase();
        for command in FILE_ARGUMENT_COMMANDS {
            if lowered.starts_with(command) {
                return CompletionContext::file_argument(&before[command.len()..]);
            }
        }

        if let Some(rest) = before.strip_prefix(COMMAND_MARKER) {
            let prefix = rest.split(char::is_whitespace).next().unwrap_or("");
            return CompletionContext::command(prefix);
        }

        if let Some(rest) = before.strip_prefix(MENTION_MARKER) {
            let prefix = rest.split(char::is_whitespace).next().unwrap_or("");
            return CompletionContext::mention(prefix);
        }

        CompletionContext::None
    }
}

/// Slice of `line` before `pos`, clamped down to a char boundary.
fn text_before_cursor(line: &str, pos: usize) -> &str {
    let mut pos = pos.min(line.len());
    while pos > 0 && !line.is_char_boundary(pos) {
        pos -= 1;
    }
    &line[..pos]
}
