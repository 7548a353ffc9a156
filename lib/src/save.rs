//! Saves and restores the world.
//!
//! A snapshot has one line per row and one character per column,
//! `1` for a living cell and `0` for a dead one.

use crate::{
    cells::State,
    error::Error,
    pattern::{io_error, parse_rows, read_file},
    world::World,
};
use std::{fs, path::Path};

impl World {
    /// Saves the world as a snapshot.
    pub fn snapshot(&self) -> String {
        let mut str = String::with_capacity((self.columns() + 1) * self.rows());
        for y in 0..self.rows() {
            for x in 0..self.columns() {
                match self.get_cell_state(x as isize, y as isize) {
                    State::Dead => str.push('0'),
                    State::Alive => str.push('1'),
                }
            }
            str.push('\n');
        }
        str
    }

    /// Restores the world from a snapshot of the same size.
    ///
    /// The snapshot must have exactly [`rows`](Self::rows) lines of exactly
    /// [`columns`](Self::columns) characters. On error the world is left
    /// unchanged. On success the generation counter is reset.
    ///
    /// `origin` names the snapshot in error messages.
    pub fn load_snapshot(&mut self, origin: &str, text: &str) -> Result<(), Error> {
        let rows = parse_rows(origin, text, Some(self.columns()))?;
        if rows.len() != self.rows() {
            return Err(Error::LineCount {
                origin: origin.to_owned(),
                expected: self.rows(),
                found: rows.len(),
            });
        }
        for (y, row) in rows.into_iter().enumerate() {
            for (x, state) in row.into_iter().enumerate() {
                self.set_cell(x as isize, y as isize, state);
            }
        }
        self.generation = 0;
        log::debug!("Loaded {} from {}", self.summary(), origin);
        Ok(())
    }

    /// Writes a snapshot to a file.
    pub fn save_snapshot_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        fs::write(path, self.snapshot()).map_err(|e| io_error(path, e))?;
        log::debug!("Saved {} to {:?}", self.summary(), path);
        Ok(())
    }

    /// Restores the world from a snapshot file.
    pub fn load_snapshot_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let text = read_file(path)?;
        self.load_snapshot(&path.display().to_string(), &text)
    }
}
