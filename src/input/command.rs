//! Line-oriented terminal commands.

use super::keys::map_key;
use crate::core::Direction;

/// A parsed terminal command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
}

/// Parse one input line.
///
/// Accepts direction words (`up`, `left`, ...), anything [`map_key`]
/// accepts, raw ANSI arrow sequences as a terminal echoes them in line
/// mode, `r`/`restart` and `q`/`quit`. Surrounding whitespace is ignored.
///
/// ```
/// use rust_2048::core::Direction;
/// use rust_2048::input::{parse_command, Command};
///
/// assert_eq!(parse_command(" Left "), Some(Command::Move(Direction::Left)));
/// assert_eq!(parse_command("\x1b[A"), Some(Command::Move(Direction::Up)));
/// assert_eq!(parse_command("q"), Some(Command::Quit));
/// ```
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if let Some(direction) = map_key(line).or_else(|| parse_arrow_escape(line)) {
        return Some(Command::Move(direction));
    }

    match line.to_ascii_lowercase().as_str() {
        "up" => Some(Command::Move(Direction::Up)),
        "down" => Some(Command::Move(Direction::Down)),
        "left" => Some(Command::Move(Direction::Left)),
        "right" => Some(Command::Move(Direction::Right)),
        "r" | "restart" | "new" => Some(Command::Restart),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// `ESC [ A..D` (normal mode) or `ESC O A..D` (application mode).
fn parse_arrow_escape(line: &str) -> Option<Direction> {
    let rest = line.strip_prefix("\x1b[").or_else(|| line.strip_prefix("\x1bO"))?;
    match rest {
        "A" => Some(Direction::Up),
        "B" => Some(Direction::Down),
        "C" => Some(Direction::Right),
        "D" => Some(Direction::Left),
        _ => None,
    }
}
