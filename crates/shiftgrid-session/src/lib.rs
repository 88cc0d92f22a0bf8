//! Command handling and undo history for shiftgrid.
//!
//! A [`Session`] owns a [`Grid`](shiftgrid_core::Grid) together with a bounded
//! [`History`] of the moves played on it. Input arrives as text, one command
//! per line:
//!
//! 1. [`decode_line`] reads a line, keeping at most [`MAX_LINE_LENGTH`]
//!    characters and flagging longer lines.
//! 2. [`Command`] parses `up N`, `down N`, `left N`, `right N`, `undo` and
//!    `quit`.
//! 3. [`Session::execute`] runs the command and reports an [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use shiftgrid_core::Grid;
//! use shiftgrid_session::{Outcome, Session, decode_line};
//!
//! let mut input = "right 1\nundo\nquit\nleft 2\n".as_bytes();
//! let mut session = Session::new(Grid::default());
//!
//! while let Some(line) = decode_line(&mut input).unwrap() {
//!     if session.execute(&line) == Outcome::Quit {
//!         break;
//!     }
//! }
//! assert!(session.grid().is_solved());
//! ```

mod command;
mod decode;
mod history;
mod session;

pub use self::{
    command::{Command, CommandError},
    decode::{DecodedLine, MAX_LINE_LENGTH, decode_line},
    history::History,
    session::{Outcome, Session},
};
