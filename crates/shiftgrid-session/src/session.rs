//! Command execution and undo.

use std::num::NonZero;

use shiftgrid_core::{Grid, Move};

use crate::{Command, CommandError, DecodedLine, History};

/// Result of executing one command line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Outcome {
    /// The grid changed; the caller should redraw it.
    Applied,
    /// The line was rejected; grid and history are unchanged.
    Invalid(CommandError),
    /// The player asked to stop. No further commands should be executed.
    Quit,
}

/// A puzzle session: the grid being played plus the undo history.
///
/// # Examples
///
/// ```
/// use shiftgrid_core::Grid;
/// use shiftgrid_session::{DecodedLine, Outcome, Session};
///
/// let mut session = Session::new(Grid::default());
///
/// assert_eq!(session.execute(&DecodedLine::new("left 8")), Outcome::Applied);
/// assert_eq!(session.grid().row(1), &[9, 10, 11, 12, 13, 14, 8]);
///
/// assert_eq!(session.execute(&DecodedLine::new("undo")), Outcome::Applied);
/// assert_eq!(session.grid().row(1), &[8, 9, 10, 11, 12, 13, 14]);
///
/// assert!(session.execute(&DecodedLine::new("undo")).is_invalid());
/// assert_eq!(session.execute(&DecodedLine::new("quit")), Outcome::Quit);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    history: History,
}

impl Session {
    /// Starts a session on `grid` with the default history capacity.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self::with_history_capacity(grid, History::default_capacity())
    }

    /// Starts a session on `grid` remembering at most `capacity` moves.
    #[must_use]
    pub fn with_history_capacity(grid: Grid, capacity: NonZero<usize>) -> Self {
        Self {
            grid,
            history: History::with_capacity(capacity),
        }
    }

    /// Returns the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the undo history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Parses and runs one command line.
    ///
    /// Rejected lines come back as [`Outcome::Invalid`] carrying the reason.
    pub fn execute(&mut self, line: &DecodedLine) -> Outcome {
        match self.try_execute(line) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::debug!("rejected {:?}: {err}", line.text());
                Outcome::Invalid(err)
            }
        }
    }

    /// Like [`Session::execute`], but reports rejection as an error.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::LineTooLong`] for an overflowed line, a parse
    /// error from [`Command`], or the error from [`Session::run`].
    pub fn try_execute(&mut self, line: &DecodedLine) -> Result<Outcome, CommandError> {
        if line.is_overflowed() {
            return Err(CommandError::LineTooLong);
        }
        let command: Command = line.text().parse()?;
        self.run(command)
    }

    /// Runs an already parsed command.
    ///
    /// A successful move is recorded in the history, dropping the oldest
    /// entry when the history is full.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Grid`] if a move targets a tile that is not on
    /// the grid, and [`CommandError::HistoryEmpty`] for `undo` with nothing to
    /// undo. Neither case changes the session.
    pub fn run(&mut self, command: Command) -> Result<Outcome, CommandError> {
        match command {
            Command::Move(mv) => {
                self.play(mv)?;
                Ok(Outcome::Applied)
            }
            Command::Undo => {
                self.undo()?;
                Ok(Outcome::Applied)
            }
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    /// Applies `mv` and records it.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Grid`] if the target tile is not on the grid.
    pub fn play(&mut self, mv: Move) -> Result<(), CommandError> {
        self.grid.apply(mv)?;
        if let Some(evicted) = self.history.push(mv) {
            log::trace!("history full, dropped `{evicted}`");
        }
        log::debug!("applied `{mv}`");
        log::trace!(
            "history: [{}]",
            self.history
                .entries()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(())
    }

    /// Reverts the most recent move, returning the inverse move that was
    /// applied.
    ///
    /// The history entry is consumed even if reapplying it fails.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::HistoryEmpty`] if there is nothing to undo.
    pub fn undo(&mut self) -> Result<Move, CommandError> {
        let mv = self.history.pop().ok_or(CommandError::HistoryEmpty)?;
        let inverse = mv.inverse();
        self.grid.apply(inverse)?;
        log::debug!("undid `{mv}` with `{inverse}`");
        Ok(inverse)
    }
}
