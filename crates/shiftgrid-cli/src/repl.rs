//! The interactive read-print loop.

use std::io::{self, BufRead, Write};

use shiftgrid_session::{Outcome, Session, decode_line};

/// Prompt printed before each command.
pub const PROMPT: &str = "> ";

/// Notice printed for a rejected command.
pub const INVALID_COMMAND: &str = "Invalid command";

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionEnd {
    /// The player typed `quit`.
    Quit,
    /// The input stream was exhausted.
    EndOfInput,
}

/// Plays `session` interactively, reading commands from `input` and writing
/// the board and prompts to `output`.
///
/// The board is printed once up front and again after every applied command.
/// Rejected commands, including over-long lines, print
/// [`INVALID_COMMAND`] and the loop carries on.
///
/// # Errors
///
/// Returns any I/O error from `input` or `output`.
///
/// # Examples
///
/// ```
/// use shiftgrid_cli::repl::{SessionEnd, run_interactive};
/// use shiftgrid_core::Grid;
/// use shiftgrid_session::Session;
///
/// let mut session = Session::new(Grid::default());
/// let mut output = Vec::new();
/// let end = run_interactive(&mut session, "left 8\nquit\n".as_bytes(), &mut output).unwrap();
///
/// assert_eq!(end, SessionEnd::Quit);
/// assert_eq!(session.grid().row(1), &[9, 10, 11, 12, 13, 14, 8]);
/// ```
pub fn run_interactive<R, W>(
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> io::Result<SessionEnd>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}\n{PROMPT}", session.grid().render())?;
    output.flush()?;

    while let Some(line) = decode_line(&mut input)? {
        match session.execute(&line) {
            Outcome::Applied => {
                write!(output, "\n{}\n{PROMPT}", session.grid().render())?;
                if session.grid().is_solved() {
                    log::info!("puzzle solved");
                }
            }
            Outcome::Invalid(err) => {
                log::warn!("invalid command {:?}: {err}", line.text());
                write!(output, "\n{INVALID_COMMAND}\n\n{PROMPT}")?;
            }
            Outcome::Quit => {
                log::info!("quit requested");
                return Ok(SessionEnd::Quit);
            }
        }
        output.flush()?;
    }

    log::info!("end of input");
    Ok(SessionEnd::EndOfInput)
}
