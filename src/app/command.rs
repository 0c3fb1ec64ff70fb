//! Command parsing for the command line

use super::state::DashboardTab;

/// Parsed command from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Quit the application: :q or :quit
    Quit,
    /// Log out, wiping the session: :logout
    Logout,
    /// Return to the home screen: :home
    Home,
    /// Switch to a dashboard tab by name: :learn, :tests, ...
    Tab(DashboardTab),
    /// Switch color theme: :theme <name>
    Theme(String),
    /// Show key hints: :help or :h
    Help,
    /// Clear message: (empty command)
    Nop,
}

/// Result of parsing a command
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed command
    Ok(Command),
    /// Unknown command
    UnknownCommand(String),
    /// Command needs an argument
    MissingArgument(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim();

    if input.is_empty() {
        return ParseResult::Ok(Command::Nop);
    }

    // Split into command and arguments
    let mut parts = input.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim()).unwrap_or("");

    match cmd.to_lowercase().as_str() {
        "quit" | "q" => ParseResult::Ok(Command::Quit),
        "logout" => ParseResult::Ok(Command::Logout),
        "home" => ParseResult::Ok(Command::Home),
        "theme" => {
            if args.is_empty() {
                ParseResult::MissingArgument("theme".to_string())
            } else {
                ParseResult::Ok(Command::Theme(args.to_string()))
            }
        }
        "help" | "h" | "?" => ParseResult::Ok(Command::Help),
        // Bare tab names switch dashboard tabs.
        other => match other.parse::<DashboardTab>() {
            Ok(tab) => ParseResult::Ok(Command::Tab(tab)),
            Err(_) => ParseResult::UnknownCommand(cmd.to_string()),
        },
    }
}
