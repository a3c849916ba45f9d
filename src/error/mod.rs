//! Error handling module for agentline.
//!
//! This module provides the crate's error types:
//! - Application-level errors for configuration and transcript I/O
//! - A crate-wide [`Result`] alias
//!
//! The completion engine deliberately has no error surface; see the
//! `completion` module. Filesystem problems during completion are swallowed
//! into empty candidate lists so the interactive loop is never interrupted.

pub mod kinds;

// Re-export commonly used types
pub use kinds::{AgentlineError, ConfigError, HistoryError, Result};
