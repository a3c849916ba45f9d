use std::{fmt, io};

/// Crate-wide `Result` type using [`AgentlineError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations. The completion
/// engine itself never returns it: inside the engine every failure mode
/// degrades to an empty candidate list.
pub type Result<T> = std::result::Result<T, AgentlineError>;

/// Top-level error type for agentline operations.
#[derive(Debug)]
pub enum AgentlineError {
    /// Configuration errors.
    Config(ConfigError),

    /// Conversation transcript errors.
    History(HistoryError),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/// Conversation transcript errors.
#[derive(Debug)]
pub enum HistoryError {
    /// Transcript file not found.
    FileNotFound(String),

    /// Transcript could not be parsed.
    InvalidFormat(String),

    /// Target file extension is not supported.
    UnsupportedExtension(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for AgentlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentlineError::Config(e) => write!(f, "Configuration error: {e}"),
            AgentlineError::History(e) => write!(f, "History error: {e}"),
            AgentlineError::Io(e) => write!(f, "I/O error: {e}"),
            AgentlineError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::FileNotFound(path) => write!(f, "History file not found: {path}"),
            HistoryError::InvalidFormat(msg) => write!(f, "Invalid history format: {msg}"),
            HistoryError::UnsupportedExtension(ext) => {
                write!(f, "Unsupported history file extension: {ext}")
            }
        }
    }
}

impl std::error::Error for AgentlineError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for HistoryError {}

/* ========================= Conversions to AgentlineError ========================= */

impl From<io::Error> for AgentlineError {
    fn from(err: io::Error) -> Self {
        AgentlineError::Io(err)
    }
}

impl From<ConfigError> for AgentlineError {
    fn from(err: ConfigError) -> Self {
        AgentlineError::Config(err)
    }
}

impl From<HistoryError> for AgentlineError {
    fn from(err: HistoryError) -> Self {
        AgentlineError::History(err)
    }
}

impl From<String> for AgentlineError {
    fn from(msg: String) -> Self {
        AgentlineError::Generic(msg)
    }
}

impl From<&str> for AgentlineError {
    fn from(msg: &str) -> Self {
        AgentlineError::Generic(msg.to_owned())
    }
}
