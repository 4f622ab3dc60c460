//! Viewer commands
//!
//! One-word commands read from stdin. The replay core sees exactly four of
//! them (next, prev, play, pause); help and quit are shell concerns.

/// A parsed viewer command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Play,
    Pause,
    Help,
    Quit,
}

impl Command {
    /// Parse a line of input; `None` for anything unrecognized.
    pub fn parse(input: &str) -> Option<Command> {
        match input.trim().to_ascii_lowercase().as_str() {
            "n" | "next" => Some(Command::Next),
            "p" | "prev" | "back" => Some(Command::Prev),
            "play" | "auto" => Some(Command::Play),
            "pause" | "stop" => Some(Command::Pause),
            "h" | "help" | "?" => Some(Command::Help),
            "q" | "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }

    pub fn help_text() -> &'static str {
        "commands: next (n), prev (p), play, pause, help (h), quit (q)"
    }
}
