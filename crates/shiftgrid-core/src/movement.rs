//! Directions and moves.

use crate::grid::Tile;

/// The line a move rotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Axis {
    /// The row containing the target tile.
    Row,
    /// The column containing the target tile.
    Column,
}

/// The direction a row or column is rotated in.
///
/// `Up` and `Down` rotate a column, `Left` and `Right` rotate a row. The tile
/// pushed off one edge reappears on the opposite edge.
///
/// The [`Display`](std::fmt::Display) form is the lowercase command word.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum Direction {
    /// Rotate a column towards row 0.
    #[display("up")]
    Up,
    /// Rotate a column towards the last row.
    #[display("down")]
    Down,
    /// Rotate a row towards column 0.
    #[display("left")]
    Left,
    /// Rotate a row towards the last column.
    #[display("right")]
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the direction that undoes a rotation in this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use shiftgrid_core::Direction;
    ///
    /// assert_eq!(Direction::Left.inverse(), Direction::Right);
    /// assert_eq!(Direction::Up.inverse(), Direction::Down);
    /// ```
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the axis rotated by this direction.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Column,
            Self::Left | Self::Right => Axis::Row,
        }
    }
}

/// A rotation of the row or column holding `tile`.
///
/// The tile is stored by value rather than by coordinate: tiles change
/// position after every move, so the target is located again each time the
/// move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{direction} {tile}")]
pub struct Move {
    /// Rotation direction.
    pub direction: Direction,
    /// Value of a tile in the row or column to rotate.
    pub tile: Tile,
}

impl Move {
    /// Creates a new move.
    #[must_use]
    pub const fn new(direction: Direction, tile: Tile) -> Self {
        Self { direction, tile }
    }

    /// Returns the move that undoes this one.
    ///
    /// Rotating a line never moves a tile out of it, so the inverse targets
    /// the same tile.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.direction.inverse(), self.tile)
    }
}
