//! Load-time errors
//!
//! Only level and settings loading can fail. Once a `Game` exists every
//! gameplay operation is total.

use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// File could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Level source contains no tiles
    EmptyLevel,
    /// A row has a different number of tiles than the first row
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A token is not a non-negative integer
    InvalidTile {
        row: usize,
        column: usize,
        token: String,
    },
    /// A game needs at least one level
    NoLevels,
    /// Settings file is not valid JSON for `Settings`
    Settings(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            Error::EmptyLevel => write!(f, "level contains no tiles"),
            Error::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "level row {} has {} tiles, expected {}",
                row, found, expected
            ),
            Error::InvalidTile { row, column, token } => {
                write!(f, "invalid tile {:?} at row {}, column {}", token, row, column)
            }
            Error::NoLevels => write!(f, "no levels configured"),
            Error::Settings(err) => write!(f, "invalid settings: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Settings(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Settings(err)
    }
}
