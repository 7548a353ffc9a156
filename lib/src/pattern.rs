//! Rectangular patterns in the `'1'` / `'0'` text format.
//!
//! One line per row, one character per column, `1` for a living cell
//! and `0` for a dead one. The same format is used for templates and for
//! world snapshots.

use crate::{
    cells::{Coord, State, ALIVE, DEAD},
    error::Error,
};
use std::{
    fmt::{self, Display, Formatter},
    fs, io,
    path::Path,
};

/// A rectangular pattern of cells.
///
/// Two patterns are equal iff they have the same width, the same height
/// and the same cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    width: usize,
    height: usize,
    /// States of the cells, row by row.
    cells: Vec<State>,
}

impl Pattern {
    /// Parses a pattern. Every line must be as long as the first one.
    ///
    /// `origin` names the source in error messages.
    pub fn parse(origin: &str, text: &str) -> Result<Self, Error> {
        let rows = parse_rows(origin, text, None)?;
        let height = rows.len();
        let width = rows[0].len();
        Ok(Pattern {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Reads and parses a pattern file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = read_file(path)?;
        Pattern::parse(&path.display().to_string(), &text)
    }

    /// Builds the bounding-box pattern of a set of cells.
    ///
    /// The cells are translated so that the smallest `x` and `y` land on
    /// `0`. Nothing else is normalized: a rotated or reflected shape
    /// gives a different pattern.
    ///
    /// Returns `None` if `coords` is empty.
    pub fn from_coords(coords: &[Coord]) -> Option<Self> {
        let min_x = coords.iter().map(|c| c.0).min()?;
        let max_x = coords.iter().map(|c| c.0).max()?;
        let min_y = coords.iter().map(|c| c.1).min()?;
        let max_y = coords.iter().map(|c| c.1).max()?;
        let width = max_x - min_x + 1;
        let height = max_y - min_y + 1;
        let mut cells = vec![DEAD; width * height];
        for &(x, y) in coords {
            cells[(y - min_y) * width + (x - min_x)] = ALIVE;
        }
        Some(Pattern {
            width,
            height,
            cells,
        })
    }

    /// Width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The state of the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the pattern.
    pub fn get(&self, x: usize, y: usize) -> State {
        assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x]
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|s| s.is_alive()).count()
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for state in row {
                f.write_str(if state.is_alive() { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the rows of a pattern or snapshot.
///
/// If `width` is `None`, the first line decides the width. Every line is
/// checked against it, and every character must be `0` or `1`.
/// Line and column numbers in errors are 1-based.
pub(crate) fn parse_rows(
    origin: &str,
    text: &str,
    width: Option<usize>,
) -> Result<Vec<Vec<State>>, Error> {
    let mut lines = text.lines().peekable();
    let expected = match (width, lines.peek()) {
        (_, None) => return Err(Error::EmptyPattern(origin.to_owned())),
        (Some(width), _) => width,
        (None, Some(first)) => first.chars().count(),
    };
    if expected == 0 {
        return Err(Error::EmptyPattern(origin.to_owned()));
    }
    let mut rows = Vec::new();
    for (i, line) in lines.enumerate() {
        let mut row = Vec::with_capacity(expected);
        for (j, c) in line.chars().enumerate() {
            if j >= expected {
                return Err(Error::LineLength {
                    origin: origin.to_owned(),
                    line: i + 1,
                    column: j + 1,
                    expected,
                    found: line.chars().count(),
                });
            }
            row.push(match c {
                '1' => ALIVE,
                '0' => DEAD,
                found => {
                    return Err(Error::InvalidChar {
                        origin: origin.to_owned(),
                        line: i + 1,
                        column: j + 1,
                        found,
                    })
                }
            });
        }
        if row.len() < expected {
            return Err(Error::LineLength {
                origin: origin.to_owned(),
                line: i + 1,
                column: row.len() + 1,
                expected,
                found: row.len(),
            });
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Reads a whole file.
pub(crate) fn read_file(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|e| io_error(path, e))
}

/// Converts an I/O error on `path`.
pub(crate) fn io_error(path: &Path, e: io::Error) -> Error {
    Error::IoError(path.to_path_buf(), e.to_string())
}
