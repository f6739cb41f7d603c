//! Command parsing.

use crate::error::PlayError;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<n>`, `move <n>`, `play <n>` -- mark cell `n`. Range is checked by the board.
    Place(usize),
    /// `new` -- start a new round.
    New,
    /// `swap` -- toggle who plays first, then start a new round.
    Swap,
    /// `first on|off` -- choose whether the player moves first.
    First(bool),
    /// `hint` -- ask the engine for the player's best move.
    Hint,
    /// `show` -- print board, status, and score.
    Show,
    /// `score` -- print the score tally.
    Score,
    /// `help` -- list commands.
    Help,
    /// `quit` / `exit` -- leave the session.
    Quit,
    /// Blank line.
    Empty,
}

/// Help text printed by the `help` command.
pub const HELP: &str = "\
commands:
  <0-8> | move <n> | play <n>   mark a cell (cells are numbered 0-8, row by row)
  new                          start a new round
  swap                         switch who plays first and start a new round
  first on|off                 play first (X) or second (O), then start a new round
  hint                         ask the engine for your best move
  show                         print the board and score
  score                        print the score
  help                         show this list
  quit                         leave";

/// Parse a single input line into a [`Command`]. Case-insensitive.
pub fn parse_command(line: &str) -> Result<Command, PlayError> {
    let tokens: Vec<String> = line
        .split_whitespace()
        .map(|t| t.to_ascii_lowercase())
        .collect();
    let Some(first) = tokens.first() else {
        return Ok(Command::Empty);
    };
    let arg = tokens.get(1).map(String::as_str);

    match first.as_str() {
        "new" => Ok(Command::New),
        "swap" => Ok(Command::Swap),
        "hint" => Ok(Command::Hint),
        "show" => Ok(Command::Show),
        "score" => Ok(Command::Score),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "move" => parse_cell(arg, "move"),
        "play" => parse_cell(arg, "play"),
        "first" => parse_toggle(arg, "first").map(Command::First),
        word if word.chars().all(|c| c.is_ascii_digit()) => parse_cell(Some(word), "move"),
        word => Err(PlayError::UnknownCommand {
            command: word.to_string(),
        }),
    }
}

/// Parse a cell index argument.
fn parse_cell(token: Option<&str>, command: &'static str) -> Result<Command, PlayError> {
    let value = token.ok_or(PlayError::MissingArgument { command })?;
    value
        .parse()
        .map(Command::Place)
        .map_err(|_| PlayError::InvalidArgument {
            command,
            value: value.to_string(),
        })
}

/// Parse an on/off argument.
fn parse_toggle(token: Option<&str>, command: &'static str) -> Result<bool, PlayError> {
    match token {
        Some("on" | "yes" | "true") => Ok(true),
        Some("off" | "no" | "false") => Ok(false),
        Some(other) => Err(PlayError::InvalidArgument {
            command,
            value: other.to_string(),
        }),
        None => Err(PlayError::MissingArgument { command }),
    }
}
