//! All kinds of errors in this crate.

use displaydoc::Display;
use std::path::PathBuf;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Width / height / cell size should be positive.
    NonPositiveError,
    /// A {width}x{height} world with cell size {cell_size} has no cells.
    EmptyWorldError {
        width: usize,
        height: usize,
        cell_size: usize,
    },
    /// Template file not found: {0:?}.
    MissingTemplate(PathBuf),
    /// Unable to access {0:?}: {1}.
    IoError(PathBuf, String),
    /// {0} is empty.
    EmptyPattern(String),
    /// {origin}: line {line} has {found} columns, expected {expected} (failed at column {column}).
    LineLength {
        origin: String,
        line: usize,
        column: usize,
        expected: usize,
        found: usize,
    },
    /// {origin}: invalid character {found:?} at line {line}, column {column}.
    InvalidChar {
        origin: String,
        line: usize,
        column: usize,
        found: char,
    },
    /// {origin}: found {found} rows, expected {expected}.
    LineCount {
        origin: String,
        expected: usize,
        found: usize,
    },
    /// Template {0:?} is registered twice.
    DuplicateTemplate(String),
    /// {0:?} is reserved for unclassified groups.
    ReservedName(String),
}
