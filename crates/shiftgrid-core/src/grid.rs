//! The puzzle grid.

use std::{
    fmt::{self, Display},
    num::NonZero,
    ops::Index,
};

use crossterm::style::{Color, Stylize as _};

use crate::{Direction, Move, Position};

/// A tile value. Tiles on a grid are numbered from 1 to `rows * cols`.
pub type Tile = u32;

/// Errors returned by [`Grid`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The requested tile is not on the grid.
    #[display("tile {tile} is not on the grid")]
    TileNotFound {
        /// The missing tile.
        tile: Tile,
    },
    /// The number of tiles does not match the grid dimensions.
    #[display("expected {expected} tiles, got {actual}")]
    ShapeMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Number of tiles supplied.
        actual: usize,
    },
    /// A tile is out of range or appears more than once.
    #[display("tile {tile} is out of range or duplicated")]
    NotAPermutation {
        /// The offending tile.
        tile: Tile,
    },
}

/// A `rows × cols` grid holding each tile from 1 to `rows * cols` exactly once.
///
/// Every mutation is a rotation of a single row or column, so the set of
/// tiles never changes; only their order does.
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use shiftgrid_core::{Grid, Position};
///
/// let mut grid = Grid::new(NonZero::new(2).unwrap(), NonZero::new(3).unwrap());
/// assert_eq!(grid.tiles(), &[1, 2, 3, 4, 5, 6]);
///
/// assert!(grid.move_down(2));
/// assert_eq!(grid.tiles(), &[1, 5, 3, 4, 2, 6]);
/// assert_eq!(grid.locate(2), Some(Position::new(1, 1)));
///
/// // Unknown tiles leave the grid untouched.
/// assert!(!grid.move_left(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Tile>,
    rows: usize,
    cols: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROWS, Self::DEFAULT_COLS)
    }
}

impl Grid {
    /// Default number of rows.
    pub const DEFAULT_ROWS: NonZero<u16> = NonZero::new(5).unwrap();
    /// Default number of columns.
    pub const DEFAULT_COLS: NonZero<u16> = NonZero::new(7).unwrap();
    /// Foreground color of a solved grid (ANSI 34).
    pub const SOLVED_COLOR: Color = Color::DarkBlue;

    /// Creates a solved grid with tiles `1..=rows * cols` in row-major order.
    #[must_use]
    pub fn new(rows: NonZero<u16>, cols: NonZero<u16>) -> Self {
        let count = u32::from(rows.get()) * u32::from(cols.get());
        Self {
            cells: (1..=count).collect(),
            rows: usize::from(rows.get()),
            cols: usize::from(cols.get()),
        }
    }

    /// Creates a grid from tiles listed in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if `tiles` does not hold exactly
    /// `rows * cols` values, and [`GridError::NotAPermutation`] if a value is
    /// outside `1..=rows * cols` or repeated.
    pub fn from_tiles(
        rows: NonZero<u16>,
        cols: NonZero<u16>,
        tiles: impl IntoIterator<Item = Tile>,
    ) -> Result<Self, GridError> {
        let rows = usize::from(rows.get());
        let cols = usize::from(cols.get());
        let cells = tiles.into_iter().collect::<Vec<_>>();
        let expected = rows * cols;
        if cells.len() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                actual: cells.len(),
            });
        }

        let mut seen = vec![false; expected];
        for &tile in &cells {
            let slot = usize::try_from(tile)
                .ok()
                .and_then(|tile| tile.checked_sub(1))
                .and_then(|index| seen.get_mut(index));
            match slot {
                Some(seen) if !*seen => *seen = true,
                _ => return Err(GridError::NotAPermutation { tile }),
            }
        }

        Ok(Self { cells, rows, cols })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns all tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.cells
    }

    /// Returns the tiles of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Tile] {
        assert!(row < self.rows, "row {row} out of range");
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows_iter(&self) -> impl ExactSizeIterator<Item = &[Tile]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Iterates over the tiles of column `col` from top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col >= self.cols()`.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Tile> + '_ {
        assert!(col < self.cols, "column {col} out of range");
        self.cells[col..].iter().step_by(self.cols).copied()
    }

    /// Returns the tile at `pos`, or `None` if `pos` is outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Tile> {
        if pos.row() < self.rows && pos.col() < self.cols {
            Some(self.cells[self.index_of(pos)])
        } else {
            None
        }
    }

    /// Finds the position of `tile`, scanning in row-major order.
    #[must_use]
    pub fn locate(&self, tile: Tile) -> Option<Position> {
        let index = self.cells.iter().position(|&t| t == tile)?;
        Some(Position::new(index / self.cols, index % self.cols))
    }

    /// Checks whether the tiles read in row-major order form a consecutive
    /// ascending run.
    ///
    /// Each tile is compared with the one before it. The first tile has no
    /// predecessor, so the check for it compares the second tile against the
    /// first instead. A grid with a single cell is always solved.
    ///
    /// # Examples
    ///
    /// ```
    /// use shiftgrid_core::Grid;
    ///
    /// let mut grid = Grid::default();
    /// assert!(grid.is_solved());
    /// grid.move_right(1);
    /// assert!(!grid.is_solved());
    /// ```
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let Some(&second) = self.cells.get(1) else {
            return true;
        };
        let mut previous = self.cells[0];
        for (index, &tile) in self.cells.iter().enumerate() {
            let current = if index == 0 { second } else { tile };
            if current.checked_sub(previous) != Some(1) {
                return false;
            }
            previous = tile;
        }
        true
    }

    /// Rotates the row or column containing `tile` by one cell in
    /// `direction`, wrapping the edge tile around.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TileNotFound`] without modifying the grid if
    /// `tile` is not on the grid.
    pub fn shift(&mut self, direction: Direction, tile: Tile) -> Result<(), GridError> {
        let pos = self
            .locate(tile)
            .ok_or(GridError::TileNotFound { tile })?;
        match direction {
            Direction::Up => self.rotate_column_up(pos.col()),
            Direction::Down => self.rotate_column_down(pos.col()),
            Direction::Left => self.row_mut(pos.row()).rotate_left(1),
            Direction::Right => self.row_mut(pos.row()).rotate_right(1),
        }
        Ok(())
    }

    /// Applies `mv`. Equivalent to [`Grid::shift`].
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TileNotFound`] if the target tile is not on the grid.
    pub fn apply(&mut self, mv: Move) -> Result<(), GridError> {
        self.shift(mv.direction, mv.tile)
    }

    /// Rotates the column containing `tile` up. Returns `false` if the tile
    /// is not on the grid.
    pub fn move_up(&mut self, tile: Tile) -> bool {
        self.shift(Direction::Up, tile).is_ok()
    }

    /// Rotates the column containing `tile` down. Returns `false` if the tile
    /// is not on the grid.
    pub fn move_down(&mut self, tile: Tile) -> bool {
        self.shift(Direction::Down, tile).is_ok()
    }

    /// Rotates the row containing `tile` left. Returns `false` if the tile
    /// is not on the grid.
    pub fn move_left(&mut self, tile: Tile) -> bool {
        self.shift(Direction::Left, tile).is_ok()
    }

    /// Rotates the row containing `tile` right. Returns `false` if the tile
    /// is not on the grid.
    pub fn move_right(&mut self, tile: Tile) -> bool {
        self.shift(Direction::Right, tile).is_ok()
    }

    /// Renders the grid as text, one row per line.
    ///
    /// The layout is the [`Display`] form; a solved grid is additionally
    /// colored with [`Grid::SOLVED_COLOR`].
    #[must_use]
    pub fn render(&self) -> String {
        let text = self.to_string();
        if self.is_solved() {
            text.with(Self::SOLVED_COLOR).to_string()
        } else {
            text
        }
    }

    fn index_of(&self, pos: Position) -> usize {
        pos.row() * self.cols + pos.col()
    }

    fn row_mut(&mut self, row: usize) -> &mut [Tile] {
        let start = row * self.cols;
        &mut self.cells[start..start + self.cols]
    }

    fn rotate_column_up(&mut self, col: usize) {
        for row in 1..self.rows {
            let upper = self.index_of(Position::new(row - 1, col));
            let lower = self.index_of(Position::new(row, col));
            self.cells.swap(upper, lower);
        }
    }

    fn rotate_column_down(&mut self, col: usize) {
        for row in (1..self.rows).rev() {
            let upper = self.index_of(Position::new(row - 1, col));
            let lower = self.index_of(Position::new(row, col));
            self.cells.swap(upper, lower);
        }
    }
}

impl Index<Position> for Grid {
    type Output = Tile;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(
            pos.row() < self.rows && pos.col() < self.cols,
            "position {pos} out of range"
        );
        &self.cells[self.index_of(pos)]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            for tile in row {
                write!(f, "{tile:3} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::style::Stylize as _;
    use proptest::{collection::vec, prelude::*, sample::Index as SampleIndex};

    use super::*;

    fn dims(rows: u16, cols: u16) -> (NonZero<u16>, NonZero<u16>) {
        (NonZero::new(rows).unwrap(), NonZero::new(cols).unwrap())
    }

    fn grid_from(rows: u16, cols: u16, tiles: &[Tile]) -> Grid {
        let (rows, cols) = dims(rows, cols);
        Grid::from_tiles(rows, cols, tiles.iter().copied()).expect("valid tiles")
    }

    #[test]
    fn default_grid_is_row_major() {
        let grid = Grid::default();
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 7);
        assert_eq!(grid.tiles(), (1..=35).collect::<Vec<_>>().as_slice());
        assert_eq!(grid.row(1), &[8, 9, 10, 11, 12, 13, 14]);
        assert_eq!(grid.column(0).collect::<Vec<_>>(), vec![1, 8, 15, 22, 29]);
        assert_eq!(grid[Position::new(4, 6)], 35);
        assert_eq!(grid.get(Position::new(5, 0)), None);
    }

    #[test]
    fn locate_finds_tiles() {
        let grid = Grid::default();
        assert_eq!(grid.locate(1), Some(Position::new(0, 0)));
        assert_eq!(grid.locate(8), Some(Position::new(1, 0)));
        assert_eq!(grid.locate(35), Some(Position::new(4, 6)));
        assert_eq!(grid.locate(0), None);
        assert_eq!(grid.locate(36), None);
    }

    #[test]
    fn left_rotates_row_with_wraparound() {
        let mut grid = Grid::default();
        assert!(grid.move_left(8));
        assert_eq!(grid.row(1), &[9, 10, 11, 12, 13, 14, 8]);
        assert_eq!(grid.row(0), &[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(grid.row(2), &[15, 16, 17, 18, 19, 20, 21]);
    }

    #[test]
    fn right_rotates_row_with_wraparound() {
        let mut grid = Grid::default();
        assert!(grid.move_right(12));
        assert_eq!(grid.row(1), &[14, 8, 9, 10, 11, 12, 13]);
    }

    #[test]
    fn up_rotates_column_with_wraparound() {
        let mut grid = Grid::default();
        assert!(grid.move_up(17));
        assert_eq!(grid.column(2).collect::<Vec<_>>(), vec![10, 17, 24, 31, 3]);
        assert_eq!(grid.column(1).collect::<Vec<_>>(), vec![2, 9, 16, 23, 30]);
    }

    #[test]
    fn down_rotates_column_with_wraparound() {
        let mut grid = Grid::default();
        assert!(grid.move_down(35));
        assert_eq!(grid.column(6).collect::<Vec<_>>(), vec![35, 7, 14, 21, 28]);
    }

    #[test]
    fn missing_tile_leaves_grid_untouched() {
        let mut grid = Grid::default();
        assert!(!grid.move_up(36));
        assert!(!grid.move_left(0));
        assert_eq!(
            grid.shift(Direction::Down, 99),
            Err(GridError::TileNotFound { tile: 99 })
        );
        assert_eq!(grid, Grid::default());
    }

    #[test]
    fn single_line_rotations() {
        let mut grid = grid_from(1, 3, &[1, 2, 3]);
        assert!(grid.move_up(2));
        assert_eq!(grid.tiles(), &[1, 2, 3]);
        assert!(grid.move_right(2));
        assert_eq!(grid.tiles(), &[3, 1, 2]);
    }

    #[test]
    fn fresh_grid_is_solved() {
        for (rows, cols) in [(1, 1), (1, 2), (2, 1), (5, 7), (3, 3)] {
            let (rows, cols) = dims(rows, cols);
            assert!(Grid::new(rows, cols).is_solved());
        }
    }

    #[test]
    fn any_single_move_unsolves_default_grid() {
        let mut grid = Grid::default();
        assert!(grid.move_right(1));
        assert!(!grid.is_solved());
    }

    #[test]
    fn up_then_down_restores_solved_grid() {
        let mut grid = Grid::default();
        assert!(grid.move_up(1));
        assert!(!grid.is_solved());
        assert!(grid.move_down(1));
        assert!(grid.is_solved());
        assert_eq!(grid, Grid::default());
    }

    #[test]
    fn solved_check_compares_first_pair_twice() {
        assert!(!grid_from(2, 2, &[2, 1, 3, 4]).is_solved());
        assert!(!grid_from(2, 2, &[1, 2, 4, 3]).is_solved());
        assert!(!grid_from(1, 2, &[2, 1]).is_solved());
        assert!(grid_from(1, 1, &[1]).is_solved());
    }

    #[test]
    fn from_tiles_rejects_bad_input() {
        let (rows, cols) = dims(2, 2);
        assert_eq!(
            Grid::from_tiles(rows, cols, [1, 2, 3]),
            Err(GridError::ShapeMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            Grid::from_tiles(rows, cols, [1, 2, 2, 4]),
            Err(GridError::NotAPermutation { tile: 2 })
        );
        assert_eq!(
            Grid::from_tiles(rows, cols, [0, 1, 2, 3]),
            Err(GridError::NotAPermutation { tile: 0 })
        );
        assert_eq!(
            Grid::from_tiles(rows, cols, [1, 2, 3, 5]),
            Err(GridError::NotAPermutation { tile: 5 })
        );
    }

    #[test]
    fn display_right_justifies_cells() {
        let grid = grid_from(2, 3, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(grid.to_string(), "  1   2   3 \n  4   5   6 \n");
    }

    #[test]
    fn render_styles_only_solved_grids() {
        let mut grid = Grid::default();
        let solved = grid.render();
        assert!(solved.contains(&grid.to_string()));
        assert_eq!(solved, grid.to_string().dark_blue().to_string());
        assert_eq!(Grid::SOLVED_COLOR, Color::DarkBlue);

        grid.move_left(8);
        assert_eq!(grid.render(), grid.to_string());
    }

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    fn shuffled_grid() -> impl Strategy<Value = Grid> {
        (1u16..=6, 1u16..=6, vec((direction_strategy(), any::<SampleIndex>()), 0..24)).prop_map(
            |(rows, cols, moves)| {
                let (rows, cols) = dims(rows, cols);
                let mut grid = Grid::new(rows, cols);
                for (direction, target) in moves {
                    let tile = grid.tiles()[target.index(grid.tiles().len())];
                    grid.shift(direction, tile).expect("tile is on the grid");
                }
                grid
            },
        )
    }

    proptest! {
        #[test]
        fn opposite_moves_cancel(
            grid in shuffled_grid(),
            direction in direction_strategy(),
            target in any::<SampleIndex>(),
        ) {
            let tile = grid.tiles()[target.index(grid.tiles().len())];
            let mut moved = grid.clone();
            moved.shift(direction, tile).unwrap();
            moved.shift(direction.inverse(), tile).unwrap();
            prop_assert_eq!(moved, grid);
        }

        #[test]
        fn moves_are_permutations(grid in shuffled_grid()) {
            let mut tiles = grid.tiles().to_vec();
            tiles.sort_unstable();
            let expected = (1..=u32::try_from(tiles.len()).unwrap()).collect::<Vec<_>>();
            prop_assert_eq!(tiles, expected);
        }

        #[test]
        fn rotation_keeps_tile_in_its_line(
            grid in shuffled_grid(),
            direction in direction_strategy(),
            target in any::<SampleIndex>(),
        ) {
            let tile = grid.tiles()[target.index(grid.tiles().len())];
            let before = grid.locate(tile).unwrap();
            let mut moved = grid.clone();
            moved.shift(direction, tile).unwrap();
            let after = moved.locate(tile).unwrap();
            match direction.axis() {
                crate::Axis::Row => prop_assert_eq!(before.row(), after.row()),
                crate::Axis::Column => prop_assert_eq!(before.col(), after.col()),
            }
        }
    }
}
