//! Custom prompt implementation for the chat session

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

/// Prompt showing the active agent name
pub struct ChatPrompt {
    /// Active agent name
    agent: String,
}

impl ChatPrompt {
    /// Create a new chat prompt
    ///
    /// # Arguments
    /// * `agent` - Active agent name
    ///
    /// # Returns
    /// * `Self` - New prompt
    pub fn new(agent: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
        }
    }

    /// Switch the displayed agent
    ///
    /// # Arguments
    /// * `agent` - New active agent name
    pub fn set_agent(&mut self, agent: impl Into<String>) {
        self.agent = agent.into();
    }

    /// Name of the active agent
    pub fn agent(&self) -> &str {
        &self.agent
    }
}

impl Prompt for ChatPrompt {
    /// Render the left prompt (main prompt)
    ///
    /// # Returns
    /// * `std::borrow::Cow<str>` - Prompt string
    fn render_prompt_left(&self) -> std::borrow::Cow<'_, str> {
        format!("{} > ", self.agent).into()
    }

    /// Render the right prompt (empty in our case)
    ///
    /// # Returns
    /// * `std::borrow::Cow<str>` - Right prompt string (empty)
    fn render_prompt_right(&self) -> std::borrow::Cow<'_, str> {
        "".into()
    }

    /// Render the prompt indicator (empty since it is part of the left prompt)
    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> std::borrow::Cow<'_, str> {
        "".into()
    }

    /// Render the multiline prompt indicator
    fn render_prompt_multiline_indicator(&self) -> std::borrow::Cow<'_, str> {
        "... ".into()
    }

    /// Render the history search prompt
    ///
    /// # Arguments
    /// * `history_search` - History search state
    ///
    /// # Returns
    /// * `std::borrow::Cow<str>` - History search prompt
    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> std::borrow::Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}
