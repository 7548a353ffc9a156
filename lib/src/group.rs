//! Connected groups of living cells.

use crate::{
    cells::{Coord, NBHD},
    world::World,
};

/// A maximal set of living cells connected through the eight-cell
/// neighborhood, edges wrapping around.
///
/// Cells are listed in the order they were reached.
pub type Group = Vec<Coord>;

impl World {
    /// Splits the living cells into connected groups.
    ///
    /// Cells are scanned column by column. Each living cell not yet in a
    /// group starts a new one, which is filled from an explicit stack of
    /// pending cells. Neighbors are found by wrapping coordinates, not
    /// through the wired neighborhood of the cells.
    ///
    /// Every living cell is in exactly one group. Groups appear in the
    /// order they are found. Within a group, cells are listed in the order
    /// they are popped from the stack, last pushed first.
    pub fn groups(&self) -> Vec<Group> {
        let rows = self.rows();
        let cells = self.cells();
        let mut seen = vec![false; cells.len()];
        // Every cell is pushed at most once, so the stack never grows
        // beyond the number of cells.
        let mut stack = Vec::new();
        let mut groups = Vec::new();

        for (index, cell) in cells.iter().enumerate() {
            if seen[index] || !cell.state().is_alive() {
                continue;
            }
            let mut group = Group::new();
            seen[index] = true;
            stack.push(cell.coord);
            while let Some((x, y)) = stack.pop() {
                group.push((x, y));
                for &(dx, dy) in NBHD.iter() {
                    let (nx, ny) = self.wrap(x as isize + dx, y as isize + dy);
                    let n = nx * rows + ny;
                    if !seen[n] && cells[n].state().is_alive() {
                        seen[n] = true;
                        stack.push((nx, ny));
                    }
                }
            }
            groups.push(group);
        }

        log::trace!("Found {} groups in {}", groups.len(), self.summary());
        groups
    }

    /// Number of connected groups of living cells.
    ///
    /// Always equal to `self.groups().len()`.
    pub fn group_count(&self) -> usize {
        self.groups().len()
    }
}
