//! Terminal front end for shiftgrid.
//!
//! The program runs in two phases. An optional configuration file is replayed
//! first ([`config`]); any error there is fatal. The player then types
//! commands at a prompt ([`repl`]), where errors only print a notice.

use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use shiftgrid_core::Grid;
use shiftgrid_session::Session;

use crate::{
    config::{ConfigError, LoadedConfig},
    repl::SessionEnd,
};

pub mod config;
pub mod repl;
pub mod version;

/// Usage line printed alongside fatal start-up errors.
pub const USAGE: &str = "usage: shiftgrid [config-file]";

/// Errors that end the program with a failure status.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// The configuration file could not be loaded.
    #[display("{_0}")]
    Config(ConfigError),
    /// Terminal I/O failed.
    #[display("terminal I/O failed: {_0}")]
    Io(io::Error),
}

impl AppError {
    /// Returns the text shown to the player on standard error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(err @ ConfigError::Unreadable { .. }) => format!("{err}\n{USAGE}"),
            Self::Config(_) => "Invalid configuration".to_owned(),
            Self::Io(err) => err.to_string(),
        }
    }

    /// Returns the process exit status for this error.
    #[must_use]
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Io(_) => 1,
        }
    }
}

/// Runs the whole program: replays `config` if given, then plays
/// interactively on `input` and `output`.
///
/// Without a configuration the default 5×7 grid is used. A configuration
/// ending in `quit` skips the interactive phase.
///
/// # Errors
///
/// Returns [`AppError::Config`] if the configuration cannot be loaded, and
/// [`AppError::Io`] if terminal I/O fails.
pub fn run<R, W>(config: Option<&Path>, input: R, output: W) -> Result<SessionEnd, AppError>
where
    R: BufRead,
    W: Write,
{
    let mut session = match config {
        Some(path) => {
            let LoadedConfig { session, quit } = config::open_config(path)?;
            if quit {
                return Ok(SessionEnd::Quit);
            }
            session
        }
        None => Session::new(Grid::default()),
    };
    Ok(repl::run_interactive(&mut session, input, output)?)
}
