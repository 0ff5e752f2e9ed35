//! Command parser.

/// A command received on the first input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Report the agent's name.
    Identify,
    /// Choose a move for the board that follows.
    Move,
    /// Anything else. No response is produced.
    Unknown(String),
}

/// Parses the command line. Surrounding whitespace is ignored; the command
/// itself is case-sensitive.
pub fn parse_command(line: &str) -> Command {
    match line.trim() {
        "identify" => Command::Identify,
        "move" => Command::Move,
        other => Command::Unknown(other.to_string()),
    }
}
