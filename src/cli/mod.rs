//! Command-line interface for agentline
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading
//! - Application initialization and startup

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;

/// Agentline - interactive chat front end with completion
#[derive(Parser, Debug)]
#[command(
    name = "agentline",
    version,
    about = "Interactive chat front end with slash-command, mention, and file completion",
    long_about = "A terminal front end for agent chat sessions. Provides slash-command
completion, @-mention completion for configured agents, and file path
completion for the history load/save commands. This is a front-end
harness: no agent backend or network protocol is included."
)]
pub struct CliArgs {
    /// Base directory for relative path completion
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Agent name to add to the mention registry (repeatable)
    #[arg(short = 'a', long = "agent", value_name = "NAME")]
    pub agents: Vec<String>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Quiet mode (no banner)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (debug logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for agentline
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version,

    /// Show the effective configuration
    Config,
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Build the interface from already-parsed arguments
    ///
    /// # Arguments
    /// * `args` - Parsed command-line arguments
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load configuration and apply argument overrides
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = match &args.config_file {
            Some(path) => Config::from_file(path)?,
            None => Config::load()?,
        };

        if let Some(base_dir) = &args.base_dir {
            config.completion.base_dir = Some(base_dir.clone());
        }
        for agent in &args.agents {
            if !config.completion.agents.iter().any(|a| a == agent) {
                config.completion.agents.push(agent.clone());
            }
        }

        Ok(config)
    }

    /// Access the parsed arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Access the effective configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle subcommands that do not start the interactive session
    ///
    /// # Returns
    /// * `Result<bool>` - True if a subcommand was handled
    pub fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(Commands::Version) => {
                println!("agentline {}", crate::VERSION);
                Ok(true)
            }
            Some(Commands::Config) => {
                let rendered = toml::to_string_pretty(&self.config)
                    .map_err(|e| crate::error::ConfigError::InvalidFormat(e.to_string()))?;
                println!("{rendered}");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Print the startup banner
    pub fn print_banner(&self) {
        if self.args.quiet {
            return;
        }

        println!("agentline {}", crate::VERSION);
        println!("Type /help for commands, @name to switch agents, Tab to complete.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_parse() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_agent_flag_repeats() {
        let args =
            CliArgs::parse_from(["agentline", "--agent", "coder", "--agent", "writer"]);
        assert_eq!(args.agents, vec!["coder", "writer"]);
    }

    #[test]
    fn test_base_dir_flag() {
        let args = CliArgs::parse_from(["agentline", "--base-dir", "/tmp"]);
        assert_eq!(args.base_dir.as_deref(), Some(std::path::Path::new("/tmp")));
    }
}
