//! The world.

use crate::{
    cells::{Coord, LifeCell, State, ALIVE, DEAD, NBHD},
    error::Error,
    pattern::Pattern,
};
use rand::{thread_rng, Rng};

/// The world: a toroidal grid of cells.
///
/// Cells are stored column by column, so the cell at `(x, y)` has index
/// `x * rows + y`. Walking the cell array in order visits columns in the
/// outer loop and rows in the inner loop.
///
/// The neighborhood of every cell is wired once in [`new`](Self::new).
/// Only the states of the cells change afterwards.
///
/// Two worlds are equal iff they have the same size, the same cells and
/// the same generation.
#[derive(Clone, Debug)]
pub struct World {
    /// Number of columns.
    columns: usize,

    /// Number of rows.
    rows: usize,

    /// All the cells, column by column.
    cells: Box<[LifeCell]>,

    /// States computed in the first phase of [`advance`](Self::advance).
    succ: Vec<State>,

    /// Number of generations advanced since creation or the last reload.
    pub(crate) generation: u64,
}

// `succ` is scratch space for `advance` and takes no part in equality.
impl PartialEq for World {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
            && self.rows == other.rows
            && self.generation == other.generation
            && self.cells == other.cells
    }
}

impl Eq for World {}

impl World {
    /// Creates a new empty world with the given number of columns and rows.
    pub fn new(columns: usize, rows: usize) -> Result<Self, Error> {
        if columns == 0 || rows == 0 {
            return Err(Error::NonPositiveError);
        }
        let size = columns * rows;
        let mut cells = Vec::with_capacity(size);
        for x in 0..columns {
            for y in 0..rows {
                cells.push(LifeCell::new((x, y)));
            }
        }
        Ok(World {
            columns,
            rows,
            cells: cells.into_boxed_slice(),
            succ: vec![DEAD; size],
            generation: 0,
        }
        .init_nbhd())
    }

    /// Links the cells to their neighbors.
    ///
    /// Every edge wraps around, so each cell has exactly eight neighbors.
    fn init_nbhd(mut self) -> Self {
        for x in 0..self.columns {
            for y in 0..self.rows {
                let mut nbhd = [0; 8];
                for (i, &(dx, dy)) in NBHD.iter().enumerate() {
                    nbhd[i] = self.wrap_index(x as isize + dx, y as isize + dy);
                }
                let index = self.index(x, y);
                self.cells[index].nbhd = nbhd;
            }
        }
        self
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of generations since creation or the last reload.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// All the cells, column by column.
    pub fn cells(&self) -> &[LifeCell] {
        &self.cells
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        x * self.rows + y
    }

    /// Wraps coordinates onto the torus and returns the cell index.
    #[inline]
    pub(crate) fn wrap_index(&self, x: isize, y: isize) -> usize {
        let x = x.rem_euclid(self.columns as isize) as usize;
        let y = y.rem_euclid(self.rows as isize) as usize;
        self.index(x, y)
    }

    /// Wraps coordinates onto the torus.
    #[inline]
    pub fn wrap(&self, x: isize, y: isize) -> Coord {
        (
            x.rem_euclid(self.columns as isize) as usize,
            y.rem_euclid(self.rows as isize) as usize,
        )
    }

    /// Gets the state of a cell. Coordinates wrap around.
    pub fn get_cell_state(&self, x: isize, y: isize) -> State {
        self.cells[self.wrap_index(x, y)].state
    }

    /// Whether the cell is alive. Coordinates wrap around.
    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        self.get_cell_state(x, y).is_alive()
    }

    /// Sets the state of a cell. Coordinates wrap around.
    pub fn set_cell(&mut self, x: isize, y: isize, state: State) {
        let index = self.wrap_index(x, y);
        self.cells[index].state = state;
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.state = DEAD;
        }
    }

    /// Makes each cell alive with probability `density`.
    pub fn randomize(&mut self, density: f64) {
        self.randomize_with(density, &mut thread_rng());
    }

    /// Same as [`randomize`](Self::randomize), with the given random number generator.
    ///
    /// A `density` outside `[0, 1]` is not an error.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            cell.state = State::from(rng.gen::<f64>() < density);
        }
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.state.is_alive()).count()
    }

    /// Number of living neighbors of the cell at `index`.
    #[inline]
    fn live_neighbors(&self, index: usize) -> usize {
        self.cells[index]
            .nbhd
            .iter()
            .filter(|&&n| self.cells[n].state.is_alive())
            .count()
    }

    /// Advances the world by one generation under B3/S23.
    ///
    /// All successor states are computed from the current generation
    /// before any of them is written back.
    pub fn advance(&mut self) {
        for index in 0..self.cells.len() {
            let state = self.cells[index].state;
            self.succ[index] = transition(state, self.live_neighbors(index));
        }
        for (cell, &succ) in self.cells.iter_mut().zip(self.succ.iter()) {
            cell.state = succ;
        }
        self.generation += 1;
        log::trace!("Advanced to generation {}", self.generation);
    }

    /// Stamps a pattern onto the world with its top-left corner at
    /// `(x_offset, y_offset)`.
    ///
    /// Both the living and the dead cells of the pattern are written.
    /// Coordinates wrap around.
    pub fn place(&mut self, pattern: &Pattern, x_offset: isize, y_offset: isize) {
        for y in 0..pattern.height() {
            for x in 0..pattern.width() {
                let state = pattern.get(x, y);
                self.set_cell(x as isize + x_offset, y as isize + y_offset, state);
            }
        }
    }

    /// Displays the world in
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`.
    pub fn plaintext(&self) -> String {
        let mut str = String::with_capacity((self.columns + 1) * self.rows);
        for y in 0..self.rows {
            for x in 0..self.columns {
                match self.cells[self.index(x, y)].state {
                    State::Dead => str.push('.'),
                    State::Alive => str.push('o'),
                }
            }
            str.push('\n');
        }
        str
    }

    /// Coordinates of all living cells, column by column.
    pub fn living_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .filter(|c| c.state.is_alive())
            .map(|c| c.coord)
    }

    /// Writes a short one-line summary, used in logs.
    pub(crate) fn summary(&self) -> String {
        format!(
            "{}x{} world, generation {}, {} living cells",
            self.columns,
            self.rows,
            self.generation,
            self.population()
        )
    }
}

/// The B3/S23 transition: a living cell survives with 2 or 3 living
/// neighbors, a dead cell becomes alive with exactly 3.
#[inline]
pub(crate) fn transition(state: State, live_neighbors: usize) -> State {
    match (state, live_neighbors) {
        (State::Alive, 2) | (_, 3) => ALIVE,
        _ => DEAD,
    }
}
