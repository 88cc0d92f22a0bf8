//! Command parsing.

use std::str::FromStr;

use shiftgrid_core::{Direction, GridError, Move, Tile};

/// Reasons a command line is rejected.
///
/// Every variant is reported to the player as an invalid command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CommandError {
    /// The first word is not a known command. Empty lines land here too.
    #[display("unrecognized command `{word}`")]
    UnrecognizedCommand {
        /// The word that was read.
        word: String,
    },
    /// A move command without a readable tile number.
    #[display("`{direction}` needs a tile number")]
    MalformedArguments {
        /// The move's direction.
        direction: Direction,
    },
    /// The move target is not on the grid.
    #[display("{_0}")]
    #[from]
    Grid(GridError),
    /// `undo` with no recorded moves.
    #[display("nothing to undo")]
    HistoryEmpty,
    /// The line was longer than [`MAX_LINE_LENGTH`](crate::MAX_LINE_LENGTH).
    #[display("command line too long")]
    LineTooLong,
}

/// A parsed command.
///
/// # Examples
///
/// ```
/// use shiftgrid_core::{Direction, Move};
/// use shiftgrid_session::Command;
///
/// let command: Command = "left 8".parse().unwrap();
/// assert_eq!(command, Command::Move(Move::new(Direction::Left, 8)));
///
/// assert_eq!("undo".parse::<Command>(), Ok(Command::Undo));
/// assert!("left".parse::<Command>().is_err());
/// assert!("jump 3".parse::<Command>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Command {
    /// Rotate the row or column holding a tile.
    #[display("{_0}")]
    Move(Move),
    /// Revert the most recent move.
    #[display("undo")]
    Undo,
    /// End the session.
    #[display("quit")]
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parses a command word followed by an optional tile number.
    ///
    /// Only the first two whitespace-separated tokens are read. The tile is
    /// taken from the leading digits of the second token, and `undo` and
    /// `quit` ignore it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let word = tokens.next().unwrap_or_default();
        let direction = match word {
            "up" => Direction::Up,
            "down" => Direction::Down,
            "left" => Direction::Left,
            "right" => Direction::Right,
            "undo" => return Ok(Self::Undo),
            "quit" => return Ok(Self::Quit),
            _ => {
                return Err(CommandError::UnrecognizedCommand {
                    word: word.to_owned(),
                });
            }
        };
        let tile = tokens
            .next()
            .and_then(leading_tile)
            .ok_or(CommandError::MalformedArguments { direction })?;
        Ok(Self::Move(Move::new(direction, tile)))
    }
}

fn leading_tile(token: &str) -> Option<Tile> {
    let digits = token.strip_prefix('+').unwrap_or(token);
    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(direction: Direction, tile: Tile) -> Command {
        Command::Move(Move::new(direction, tile))
    }

    #[test]
    fn parses_every_command_word() {
        assert_eq!("up 1".parse::<Command>(), Ok(mv(Direction::Up, 1)));
        assert_eq!("down 35".parse::<Command>(), Ok(mv(Direction::Down, 35)));
        assert_eq!("left 8".parse::<Command>(), Ok(mv(Direction::Left, 8)));
        assert_eq!("right 12".parse::<Command>(), Ok(mv(Direction::Right, 12)));
        assert_eq!("undo".parse::<Command>(), Ok(Command::Undo));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn tolerates_surrounding_whitespace_and_extra_tokens() {
        assert_eq!("   left    8   ".parse::<Command>(), Ok(mv(Direction::Left, 8)));
        assert_eq!("left 8 9".parse::<Command>(), Ok(mv(Direction::Left, 8)));
        assert_eq!("left 8abc".parse::<Command>(), Ok(mv(Direction::Left, 8)));
        assert_eq!("up +4".parse::<Command>(), Ok(mv(Direction::Up, 4)));
        assert_eq!("undo 5".parse::<Command>(), Ok(Command::Undo));
        assert_eq!("quit now".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_unknown_words() {
        assert_eq!(
            "jump 3".parse::<Command>(),
            Err(CommandError::UnrecognizedCommand {
                word: "jump".to_owned()
            })
        );
        assert_eq!(
            "LEFT 3".parse::<Command>(),
            Err(CommandError::UnrecognizedCommand {
                word: "LEFT".to_owned()
            })
        );
        assert_eq!(
            "".parse::<Command>(),
            Err(CommandError::UnrecognizedCommand {
                word: String::new()
            })
        );
    }

    #[test]
    fn moves_need_a_tile() {
        for input in ["left", "up x", "down -3", "right ", "left 99999999999"] {
            assert!(
                matches!(
                    input.parse::<Command>(),
                    Err(CommandError::MalformedArguments { .. })
                ),
                "{input:?} should be malformed"
            );
        }
    }

    #[test]
    fn display_round_trips() {
        for command in [mv(Direction::Down, 17), Command::Undo, Command::Quit] {
            assert_eq!(command.to_string().parse::<Command>(), Ok(command));
        }
    }
}
