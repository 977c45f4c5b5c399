//! Error types surfaced by the core.
//!
//! The shell decides how each of these reaches the user; the core only
//! classifies.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The word list could not be produced. Fatal at startup.
#[derive(Debug, Error)]
pub enum DictionaryLoadError {
    #[error("cannot read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {} contains no words", path.display())]
    Empty { path: PathBuf },
}

/// A constraint value or position was malformed. State is left untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("no letter given")]
    EmptyLetter,

    #[error("expected a single letter, got {0:?}")]
    NotALetter(String),

    #[error("position {0:?} is not a number")]
    InvalidPosition(String),

    #[error("position {0} is out of range, positions start at 1")]
    PositionOutOfRange(String),

    #[error("this constraint needs a position")]
    MissingPosition,

    #[error("unknown constraint kind {0:?}")]
    UnknownKind(String),
}

/// Undo was requested with nothing to undo.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("nothing to undo")]
pub struct NoHistoryError;
