use thiserror::Error;
use tictactoe_engine::Move;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("no input given")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{0} is not between 1 and 9")]
    OutOfRange(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Move),
    Quit,
}

/// Parses one line of human input: a keypad number 1-9, or `q` to quit.
pub fn parse_command(line: &str) -> Result<Command, InvalidInputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InvalidInputError::Empty);
    }
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    let number: i64 = trimmed
        .parse()
        .map_err(|_| InvalidInputError::NotANumber(trimmed.to_string()))?;

    u8::try_from(number)
        .ok()
        .and_then(Move::from_keypad)
        .map(Command::Place)
        .ok_or(InvalidInputError::OutOfRange(number))
}

/// Parses a yes/no answer. Anything else is `None` so the caller asks again.
pub fn parse_yes_no(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
