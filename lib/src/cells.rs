//! Cells in the cellular automaton.

use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// The Dead state.
    #[default]
    Dead,
    /// The Alive state.
    Alive,
}

/// The Dead state.
pub const DEAD: State = State::Dead;
/// The Alive state.
pub const ALIVE: State = State::Alive;

impl State {
    /// Whether the state is [`ALIVE`].
    #[inline]
    pub fn is_alive(self) -> bool {
        self == ALIVE
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            State::Alive => DEAD,
            State::Dead => ALIVE,
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            ALIVE
        } else {
            DEAD
        }
    }
}

/// The coordinates of a cell.
///
/// `(column, row)`, both 0-indexed.
pub type Coord = (usize, usize);

/// Offsets of the eight cells in the Moore neighborhood.
pub(crate) const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell in the world.
///
/// The name `LifeCell` is chosen to avoid ambiguity with
/// [`std::cell::Cell`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeCell {
    /// The coordinates of the cell.
    pub coord: Coord,

    /// The state of the cell.
    pub(crate) state: State,

    /// Indices of the eight cells in the neighborhood.
    ///
    /// Wired once when the world is created; never changes afterwards.
    pub(crate) nbhd: [usize; 8],
}

impl LifeCell {
    /// Generates a new dead cell with no neighbors wired yet.
    #[inline]
    pub(crate) fn new(coord: Coord) -> Self {
        Self {
            coord,
            state: DEAD,
            nbhd: [0; 8],
        }
    }

    /// The state of the cell.
    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// Indices of the neighbors in the world's cell array.
    #[inline]
    pub fn neighbors(&self) -> &[usize; 8] {
        &self.nbhd
    }
}
