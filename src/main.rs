//! Agentline - terminal chat front end
//!
//! An interactive front-end harness for agent chat sessions with
//! completion everywhere it matters:
//!
//! - Slash-command completion with descriptions
//! - "@"-mention completion for configured agents
//! - File path completion for `/load_history` and `/save_history`
//!
//! There is no agent backend and no network protocol here (see the
//! library docs); plain input lines are recorded in the conversation
//! transcript, which can be saved as JSON or Markdown and loaded back.
//!
//! # Usage
//!
//! ```bash
//! agentline --agent coder --agent writer
//! ```

use nu_ansi_term::Color;
use tracing::Level;

use agentline::cli::CliInterface;
use agentline::completion::{AgentRegistry, CommandRegistry, CompletionEngine, PathResolver};
use agentline::error::Result;
use agentline::repl::{ReplEngine, Session};

/// Outcome of handling one input line.
enum LineOutcome {
    Continue,
    Exit,
}

/// Application entry point
fn main() {
    // Initialize the application and handle any errors
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// This function orchestrates the application startup:
/// 1. Parse command-line arguments
/// 2. Load configuration
/// 3. Initialize logging
/// 4. Handle subcommands or start the interactive session
///
/// # Returns
/// * `Result<()>` - Success or error
fn run() -> Result<()> {
    // Parse command-line arguments and load configuration
    let cli = CliInterface::new()?;

    // Initialize logging based on verbosity
    initialize_logging(&cli);

    // Handle subcommands (version, config)
    if cli.handle_subcommand()? {
        return Ok(());
    }

    // Print banner if not in quiet mode
    cli.print_banner();

    // Run in interactive mode
    run_interactive_mode(&cli)
}

/// Run application in interactive mode
fn run_interactive_mode(cli: &CliInterface) -> Result<()> {
    let commands = CommandRegistry::builtin();
    let agents = AgentRegistry::new(cli.config().completion.agents.iter().cloned());

    let active_agent = agents
        .iter()
        .next()
        .unwrap_or("default")
        .to_string();

    let engine = CompletionEngine::new(
        commands.clone(),
        agents.clone(),
        &cli.config().completion.extensions,
        cli.config().base_dir(),
    );

    let mut repl = ReplEngine::new(engine, &cli.config().history, active_agent)?;
    let mut session = Session::new();

    while let Some(line) = repl.read_line()? {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        match handle_line(&line, cli, &mut repl, &mut session, &commands, &agents) {
            LineOutcome::Continue => {}
            LineOutcome::Exit => break,
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Handle one line of input: built-in command, agent switch, or message
fn handle_line(
    line: &str,
    cli: &CliInterface,
    repl: &mut ReplEngine,
    session: &mut Session,
    commands: &CommandRegistry,
    agents: &AgentRegistry,
) -> LineOutcome {
    if let Some(rest) = line.strip_prefix('/') {
        let mut parts = rest.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or("");
        let argument = parts.next().map(str::trim).unwrap_or("");
        return handle_command(name, argument, cli, session, commands, agents);
    }

    if let Some(rest) = line.strip_prefix('@') {
        let name = rest.split_whitespace().next().unwrap_or("");
        match agents.canonical(name) {
            Some(canonical) => {
                let canonical = canonical.to_string();
                println!("Now talking to {}", paint(cli, &canonical));
                repl.set_agent(canonical);
            }
            None => eprintln!("Unknown agent: {name}"),
        }
        return LineOutcome::Continue;
    }

    session.record_user(repl.active_agent(), line);
    println!(
        "[{}] message recorded ({} in transcript)",
        repl.active_agent(),
        session.len()
    );
    LineOutcome::Continue
}

/// Execute a built-in slash-command
fn handle_command(
    name: &str,
    argument: &str,
    cli: &CliInterface,
    session: &mut Session,
    commands: &CommandRegistry,
    agents: &AgentRegistry,
) -> LineOutcome {
    // Command names match case-insensitively when executed, even though
    // completion only offers the lowercase spellings.
    match name.to_ascii_lowercase().as_str() {
        "help" => print_help(cli, commands),
        "agents" => {
            if agents.is_empty() {
                println!("No agents configured (use --agent or the config file)");
            } else {
                for agent in agents.iter() {
                    println!("  @{}", paint(cli, agent));
                }
            }
        }
        "usage" => println!("{} message(s) in transcript", session.len()),
        "clear" => {
            // ANSI clear screen and home
            print!("\x1b[2J\x1b[H");
        }
        "save_history" | "save" => {
            if argument.is_empty() {
                eprintln!("Usage: /{name} <file.json|file.md>");
            } else {
                // Same resolution as completion, so the file written is
                // the one the suggestions pointed at.
                let path = PathResolver::absolute(argument, &cli.config().base_dir());
                match session.save(&path) {
                    Ok(()) => {
                        println!("Saved {} message(s) to {}", session.len(), path.display())
                    }
                    Err(e) => eprintln!("{e}"),
                }
            }
        }
        "load_history" | "load" => {
            if argument.is_empty() {
                eprintln!("Usage: /{name} <file.json>");
            } else {
                let path = PathResolver::absolute(argument, &cli.config().base_dir());
                match Session::load(&path) {
                    Ok(loaded) => {
                        println!("Loaded {} message(s) from {}", loaded.len(), path.display());
                        *session = loaded;
                    }
                    Err(e) => eprintln!("{e}"),
                }
            }
        }
        "exit" | "quit" => return LineOutcome::Exit,
        _ => eprintln!("Unknown command: /{name} (try /help)"),
    }
    LineOutcome::Continue
}

/// Print the command table from the registry
fn print_help(cli: &CliInterface, commands: &CommandRegistry) {
    println!("Available commands:");
    for (name, description) in commands.iter() {
        // Pad before painting so escape codes do not skew the column.
        println!("  /{} {}", paint(cli, &format!("{name:<14}")), description);
    }
    println!("  @<agent>        Switch the active agent");
}

/// Colorize a name unless colors are disabled
fn paint(cli: &CliInterface, text: &str) -> String {
    if cli.args().no_color {
        text.to_string()
    } else {
        Color::Cyan.paint(text).to_string()
    }
}

/// Initialize logging system based on verbosity level
///
/// # Arguments
/// * `cli` - CLI interface with verbosity settings
fn initialize_logging(cli: &CliInterface) {
    let level = if cli.args().very_verbose {
        Level::TRACE
    } else if cli.args().verbose {
        Level::DEBUG
    } else {
        cli.config().logging.level.to_tracing_level()
    };

    // Build subscriber with level filter
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    // Configure timestamps
    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentline::cli::CliArgs;
    use clap::Parser;
    use tempfile::tempdir;

    fn cli_with_base_dir(dir: &std::path::Path) -> CliInterface {
        let args = CliArgs::parse_from([
            "agentline",
            "--no-color",
            "--base-dir",
            dir.to_str().unwrap(),
        ]);
        CliInterface::from_args(args).unwrap()
    }

    #[test]
    fn test_history_commands_resolve_against_base_dir() {
        let dir = tempdir().unwrap();
        let cli = cli_with_base_dir(dir.path());
        let commands = CommandRegistry::builtin();
        let agents = AgentRegistry::default();

        let mut session = Session::new();
        session.record_user("coder", "hello");
        handle_command(
            "save_history",
            "history.json",
            &cli,
            &mut session,
            &commands,
            &agents,
        );
        // The file lands in the configured base directory, not the cwd.
        assert!(dir.path().join("history.json").exists());

        let mut restored = Session::new();
        handle_command(
            "load_history",
            "history.json",
            &cli,
            &mut restored,
            &commands,
            &agents,
        );
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.entries()[0].content, "hello");
    }

    #[test]
    fn test_command_names_match_case_insensitively() {
        let dir = tempdir().unwrap();
        let cli = cli_with_base_dir(dir.path());
        let commands = CommandRegistry::builtin();
        let agents = AgentRegistry::default();

        let mut session = Session::new();
        assert!(matches!(
            handle_command("EXIT", "", &cli, &mut session, &commands, &agents),
            LineOutcome::Exit
        ));

        session.record_user("coder", "hello");
        handle_command(
            "Save_History",
            "history.json",
            &cli,
            &mut session,
            &commands,
            &agents,
        );
        assert!(dir.path().join("history.json").exists());
    }
}
