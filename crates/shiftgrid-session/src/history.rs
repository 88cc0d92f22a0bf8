//! Bounded move history.

use std::{
    collections::{VecDeque, vec_deque},
    num::NonZero,
};

use shiftgrid_core::Move;

/// The most recent moves, newest last.
///
/// Pushing onto a full history drops the oldest entry, which can then no
/// longer be undone.
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use shiftgrid_core::{Direction, Move};
/// use shiftgrid_session::History;
///
/// let mut history = History::with_capacity(NonZero::new(2).unwrap());
/// history.push(Move::new(Direction::Up, 1));
/// history.push(Move::new(Direction::Left, 2));
/// let evicted = history.push(Move::new(Direction::Down, 3));
///
/// assert_eq!(evicted, Some(Move::new(Direction::Up, 1)));
/// assert_eq!(history.pop(), Some(Move::new(Direction::Down, 3)));
/// assert_eq!(history.pop(), Some(Move::new(Direction::Left, 2)));
/// assert_eq!(history.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct History {
    stack: VecDeque<Move>,
    capacity: NonZero<usize>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Number of moves kept when no capacity is given.
    #[must_use]
    pub const fn default_capacity() -> NonZero<usize> {
        NonZero::new(10).unwrap()
    }

    /// Creates an empty history with [`History::default_capacity`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::default_capacity())
    }

    /// Creates an empty history holding at most `capacity` moves.
    #[must_use]
    pub fn with_capacity(capacity: NonZero<usize>) -> Self {
        Self {
            stack: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Returns the maximum number of moves kept.
    #[must_use]
    pub fn capacity(&self) -> NonZero<usize> {
        self.capacity
    }

    /// Returns the number of recorded moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Iterates over the recorded moves, oldest first.
    pub fn entries(&self) -> vec_deque::Iter<'_, Move> {
        self.stack.iter()
    }

    /// Returns the most recent move.
    #[must_use]
    pub fn latest(&self) -> Option<&Move> {
        self.stack.back()
    }

    /// Records `mv`, returning the oldest move if it had to be dropped.
    pub fn push(&mut self, mv: Move) -> Option<Move> {
        let evicted = if self.stack.len() == self.capacity.get() {
            self.stack.pop_front()
        } else {
            None
        };
        self.stack.push_back(mv);
        evicted
    }

    /// Removes and returns the most recent move.
    pub fn pop(&mut self) -> Option<Move> {
        self.stack.pop_back()
    }
}
