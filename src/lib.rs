//! # Word Filter
//!
//! Narrows a Wordle word list with cumulative tile constraints.
//!
//! Constraints are collected in a [`ConstraintSet`] owned by a
//! [`ConstraintEngine`], which recomputes the surviving words after every
//! change and keeps snapshots so each change can be undone.

pub mod constraint;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod history;

pub use constraint::{Constraint, ConstraintKind, ConstraintSet, Letter, Position};
pub use dictionary::Dictionary;
pub use engine::{evaluate, ConstraintEngine, ConstraintEntry};
pub use error::{DictionaryLoadError, InvalidInputError, NoHistoryError};
pub use history::History;
