//! Grid coordinates.

use std::fmt::{self, Display};

/// A cell coordinate in a [`Grid`](crate::Grid).
///
/// Rows are counted from the top and columns from the left, both starting
/// at zero.
///
/// # Examples
///
/// ```
/// use shiftgrid_core::Position;
///
/// let pos = Position::new(1, 3);
/// assert_eq!(pos.row(), 1);
/// assert_eq!(pos.col(), 3);
/// assert_eq!(pos.to_string(), "(1, 3)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
