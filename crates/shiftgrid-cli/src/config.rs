//! Configuration file replay.
//!
//! A configuration file sets up a puzzle before the interactive phase:
//!
//! ```text
//! 4 6
//! left 3
//! up 10
//! ```
//!
//! The first line holds the number of rows and columns. Each following line
//! is a command, executed in order. Unlike interactive input, any rejected
//! line aborts the whole replay.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    num::NonZero,
    path::{Path, PathBuf},
};

use shiftgrid_core::Grid;
use shiftgrid_session::{CommandError, Outcome, Session, decode_line};

/// Errors raised while loading a configuration file.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ConfigError {
    /// The file could not be opened.
    #[display("Can't open config file: {}", path.display())]
    Unreadable {
        /// Path that was given.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// Reading the file failed part way through.
    #[display("failed to read configuration: {_0}")]
    #[from]
    Io(io::Error),
    /// The file is empty.
    #[display("missing `rows cols` line")]
    MissingDimensions,
    /// The first line is not two positive integers.
    #[display("invalid grid dimensions `{line}`")]
    InvalidDimensions {
        /// The offending line.
        line: String,
    },
    /// A command line was rejected.
    #[display("line {line_number}: {source}")]
    InvalidCommand {
        /// One-based line number in the file.
        line_number: usize,
        /// Why the command was rejected.
        source: CommandError,
    },
}

/// A replayed configuration.
#[derive(Debug)]
pub struct LoadedConfig {
    /// Session with every configured command applied.
    pub session: Session,
    /// `true` if the file ended the program with `quit`.
    pub quit: bool,
}

/// Opens `path` and replays it with [`load_config`].
///
/// # Errors
///
/// Returns [`ConfigError::Unreadable`] if the file cannot be opened, and any
/// error from [`load_config`].
pub fn open_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_owned(),
        source,
    })?;
    log::info!("loading configuration from {}", path.display());
    load_config(BufReader::new(file))
}

/// Builds a session from a configuration read from `reader`.
///
/// Replay stops at `quit`; the remaining lines are not read.
///
/// # Errors
///
/// Returns [`ConfigError::MissingDimensions`] or
/// [`ConfigError::InvalidDimensions`] for a bad first line,
/// [`ConfigError::InvalidCommand`] for the first command line that does not
/// apply cleanly (including lines that are too long), and [`ConfigError::Io`]
/// if reading fails.
///
/// # Examples
///
/// ```
/// use shiftgrid_cli::config::load_config;
///
/// let config = load_config("2 3\nright 1\n".as_bytes()).unwrap();
/// assert_eq!(config.session.grid().tiles(), &[3, 1, 2, 4, 5, 6]);
/// assert!(!config.quit);
/// ```
pub fn load_config<R>(mut reader: R) -> Result<LoadedConfig, ConfigError>
where
    R: BufRead,
{
    let mut first = String::new();
    if reader.read_line(&mut first)? == 0 {
        return Err(ConfigError::MissingDimensions);
    }
    let (rows, cols) =
        parse_dimensions(&first).ok_or_else(|| ConfigError::InvalidDimensions {
            line: first.trim_end().to_owned(),
        })?;
    log::debug!("configured grid: {rows}x{cols}");

    let mut session = Session::new(Grid::new(rows, cols));
    let mut line_number = 1;
    while let Some(line) = decode_line(&mut reader)? {
        line_number += 1;
        let outcome = session
            .try_execute(&line)
            .map_err(|source| ConfigError::InvalidCommand {
                line_number,
                source,
            })?;
        if outcome == Outcome::Quit {
            log::info!("configuration quit at line {line_number}");
            return Ok(LoadedConfig {
                session,
                quit: true,
            });
        }
    }

    Ok(LoadedConfig {
        session,
        quit: false,
    })
}

fn parse_dimensions(line: &str) -> Option<(NonZero<u16>, NonZero<u16>)> {
    let mut tokens = line.split_whitespace();
    let rows = tokens.next()?.parse().ok()?;
    let cols = tokens.next()?.parse().ok()?;
    Some((rows, cols))
}
