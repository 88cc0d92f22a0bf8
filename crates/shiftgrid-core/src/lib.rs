//! Core data structures for the shiftgrid puzzle.
//!
//! The puzzle is a rectangular grid holding every number from 1 to
//! `rows * cols` exactly once. A move rotates the whole row or column that
//! contains a given tile by one cell, wrapping the edge tile around to the
//! opposite end. The puzzle is solved when the numbers read in row-major
//! order are back in sequence.
//!
//! # Overview
//!
//! - [`grid`]: the [`Grid`] itself, with tile lookup, rotations and the
//!   solved check.
//! - [`position`]: (row, column) coordinates into a grid.
//! - [`movement`]: [`Direction`] and [`Move`], the value types describing
//!   a rotation.
//!
//! # Examples
//!
//! ```
//! use shiftgrid_core::{Direction, Grid, Move};
//!
//! let mut grid = Grid::default();
//! assert!(grid.is_solved());
//!
//! grid.apply(Move::new(Direction::Left, 8)).unwrap();
//! assert_eq!(grid.row(1), &[9, 10, 11, 12, 13, 14, 8]);
//! assert!(!grid.is_solved());
//!
//! grid.apply(Move::new(Direction::Right, 8)).unwrap();
//! assert!(grid.is_solved());
//! ```

pub mod grid;
pub mod movement;
pub mod position;

pub use self::{
    grid::{Grid, GridError, Tile},
    movement::{Axis, Direction, Move},
    position::Position,
};
