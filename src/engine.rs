//! The constraint engine.
//!
//! Owns the dictionary, the current [`ConstraintSet`] and its undo
//! [`History`]. Every mutation is all-or-nothing: input is validated
//! before a snapshot is taken, so a rejected call leaves both the
//! constraints and the history exactly as they were.

use tracing::debug;

use crate::constraint::{Constraint, ConstraintKind, ConstraintSet, Letter, Position};
use crate::dictionary::Dictionary;
use crate::error::{InvalidInputError, NoHistoryError};
use crate::history::History;

/// Filter `dictionary` down to the words satisfying every constraint.
///
/// Dictionary order (sorted) is preserved.
pub fn evaluate(dictionary: &Dictionary, constraints: &ConstraintSet) -> Vec<String> {
    dictionary
        .iter()
        .filter(|word| constraints.is_satisfied_by(word))
        .map(str::to_string)
        .collect()
}

/// One row of the constraint listing shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintEntry {
    pub kind: ConstraintKind,
    /// A single letter, or for gray and "contains" letters all of them
    /// joined by `", "`.
    pub value: String,
    /// 1-based
    pub position: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct ConstraintEngine {
    dictionary: Dictionary,
    constraints: ConstraintSet,
    history: History,
    results: Vec<String>,
}

impl ConstraintEngine {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            results: dictionary.words().to_vec(),
            dictionary,
            constraints: ConstraintSet::new(),
            history: History::new(),
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub fn current_results(&self) -> &[String] {
        &self.results
    }

    pub fn remaining_count(&self) -> usize {
        self.results.len()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Evaluate the current constraints against `dictionary`.
    pub fn evaluate(&self, dictionary: &Dictionary) -> Vec<String> {
        evaluate(dictionary, &self.constraints)
    }

    /// Gray tile: `letter` must not appear anywhere.
    pub fn add_exclusion(&mut self, letter: &str) -> Result<(), InvalidInputError> {
        let letter = Letter::parse(letter)?;
        self.add(Constraint::Exclude(letter));
        Ok(())
    }

    /// `letter` must appear somewhere.
    pub fn add_required(&mut self, letter: &str) -> Result<(), InvalidInputError> {
        let letter = Letter::parse(letter)?;
        self.add(Constraint::Require(letter));
        Ok(())
    }

    /// Green tile: `letter` at the 1-based `position`.
    pub fn add_fixed_at(&mut self, position: &str, letter: &str) -> Result<(), InvalidInputError> {
        let position = Position::from_one_based(position)?;
        let letter = Letter::parse(letter)?;
        self.add(Constraint::FixedAt { position, letter });
        Ok(())
    }

    /// Yellow tile: `letter` is in the word, but not at the 1-based `position`.
    pub fn add_excluded_at(&mut self, position: &str, letter: &str) -> Result<(), InvalidInputError> {
        let position = Position::from_one_based(position)?;
        let letter = Letter::parse(letter)?;
        self.add(Constraint::ExcludedAt { position, letter });
        Ok(())
    }

    /// Add a constraint of the given kind from raw user input.
    ///
    /// `position` is required for green and yellow constraints and ignored
    /// otherwise.
    pub fn add_constraint(
        &mut self,
        kind: ConstraintKind,
        value: &str,
        position: Option<&str>,
    ) -> Result<(), InvalidInputError> {
        match kind {
            ConstraintKind::Exclude => self.add_exclusion(value),
            ConstraintKind::Require => self.add_required(value),
            ConstraintKind::FixedAt => {
                let position = position.ok_or(InvalidInputError::MissingPosition)?;
                self.add_fixed_at(position, value)
            }
            ConstraintKind::ExcludedAt => {
                let position = position.ok_or(InvalidInputError::MissingPosition)?;
                self.add_excluded_at(position, value)
            }
        }
    }

    /// Apply an already validated constraint.
    pub fn add(&mut self, constraint: Constraint) {
        self.history.push(self.constraints.clone());
        self.constraints.insert(constraint);
        self.refresh();
        debug!(?constraint, remaining = self.results.len(), "added constraint");
    }

    /// Drop every constraint. Undoable like any other change.
    pub fn clear(&mut self) {
        self.history.push(self.constraints.clone());
        self.constraints.clear();
        self.refresh();
        debug!(remaining = self.results.len(), "cleared constraints");
    }

    /// Restore the constraints as they were before the last change.
    pub fn undo(&mut self) -> Result<(), NoHistoryError> {
        let previous = self.history.pop().ok_or(NoHistoryError)?;
        self.constraints = previous;
        self.refresh();
        debug!(
            remaining = self.results.len(),
            history = self.history.len(),
            "undid last change"
        );
        Ok(())
    }

    /// The constraint listing: gray letters and "contains" letters each
    /// collapse into one row, green and yellow get a row per position.
    pub fn current_constraints(&self) -> Vec<ConstraintEntry> {
        let mut entries = Vec::new();

        for (kind, letters) in [
            (ConstraintKind::Exclude, self.constraints.excluded()),
            (ConstraintKind::Require, self.constraints.required()),
        ] {
            if !letters.is_empty() {
                entries.push(ConstraintEntry {
                    kind,
                    value: letters
                        .iter()
                        .map(Letter::to_string)
                        .collect::<Vec<_>>()
                        .join(", "),
                    position: None,
                });
            }
        }

        entries.extend(
            self.constraints
                .iter()
                .filter(|constraint| constraint.kind().needs_position())
                .map(|constraint| ConstraintEntry {
                    kind: constraint.kind(),
                    value: constraint.letter().to_string(),
                    position: constraint.position().map(Position::one_based),
                }),
        );

        entries
    }

    fn refresh(&mut self) {
        self.results = evaluate(&self.dictionary, &self.constraints);
    }
}
