use reedline::{
    ColumnarMenu, Emacs, FileBackedHistory, KeyCode, KeyModifiers, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};

use crate::completion::CompletionEngine;
use crate::config::HistoryConfig;
use crate::error::{AgentlineError, Result};

use super::completer::LineCompleter;
use super::prompt::ChatPrompt;

/// Name of the completion menu registered with reedline.
const COMPLETION_MENU: &str = "completion_menu";

/// Interactive line editor for the chat session.
///
/// Wires the completion engine into reedline: a columnar completion menu on
/// Tab, file-backed line history, and a prompt naming the active agent.
pub struct ReplEngine {
    /// Line editor for input
    editor: Reedline,

    /// Prompt showing the active agent
    prompt: ChatPrompt,
}

impl ReplEngine {
    /// Create a new REPL engine
    ///
    /// # Arguments
    /// * `completion_engine` - Configured completion engine
    /// * `history_config` - Line history configuration
    /// * `agent` - Initially active agent name
    ///
    /// # Returns
    /// * `Result<Self>` - New REPL engine or error
    pub fn new(
        completion_engine: CompletionEngine,
        history_config: &HistoryConfig,
        agent: impl Into<String>,
    ) -> Result<Self> {
        let completer = Box::new(LineCompleter::new(completion_engine));

        let menu = ColumnarMenu::default().with_name(COMPLETION_MENU);

        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let mut editor = Reedline::create()
            .with_completer(completer)
            .with_menu(ReedlineMenu::EngineCompleter(Box::new(menu)))
            .with_edit_mode(Box::new(Emacs::new(keybindings)));

        if history_config.persist {
            let history =
                FileBackedHistory::with_file(history_config.max_size, history_config.file_path.clone())
                    .map_err(|e| AgentlineError::Generic(format!("History error: {e}")))?;
            editor = editor.with_history(Box::new(history));
        }

        Ok(Self {
            editor,
            prompt: ChatPrompt::new(agent),
        })
    }

    /// Read a single line of input
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Input line or None on EOF / interrupt
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.read_line(&self.prompt) {
            Ok(Signal::Success(line)) => Ok(Some(line)),
            // Ctrl-C / Ctrl-D end the session
            Ok(Signal::CtrlC) | Ok(Signal::CtrlD) => Ok(None),
            Err(err) => Err(AgentlineError::Generic(format!("Read error: {err}"))),
        }
    }

    /// Switch the active agent shown in the prompt
    ///
    /// # Arguments
    /// * `agent` - New active agent name
    pub fn set_agent(&mut self, agent: impl Into<String>) {
        self.prompt.set_agent(agent);
    }

    /// Name of the active agent
    pub fn active_agent(&self) -> &str {
        self.prompt.agent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionEngine;

    fn no_persist_config() -> HistoryConfig {
        HistoryConfig {
            persist: false,
            ..HistoryConfig::default()
        }
    }

    #[test]
    fn test_engine_builds_with_menu_and_keybindings() {
        let engine =
            ReplEngine::new(CompletionEngine::with_defaults(), &no_persist_config(), "coder")
                .unwrap();
        assert_eq!(engine.active_agent(), "coder");
    }

    #[test]
    fn test_set_agent_updates_prompt() {
        let mut engine =
            ReplEngine::new(CompletionEngine::with_defaults(), &no_persist_config(), "coder")
                .unwrap();
        engine.set_agent("writer");
        assert_eq!(engine.active_agent(), "writer");
    }
}
