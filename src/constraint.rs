//! The constraint model.
//!
//! A constraint is a single tile observation (gray, green, yellow, or a
//! plain "contains"). Constraints accumulate in a [`ConstraintSet`], which
//! decides whether a word is still a candidate.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use crate::error::InvalidInputError;

/// A single alphabetic character, stored lower-cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(char);

impl Letter {
    /// Parse user input that must hold exactly one letter.
    pub fn parse(input: &str) -> Result<Self, InvalidInputError> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(InvalidInputError::EmptyLetter),
            // Some letters lower-case to several chars ('İ' -> "i\u{307}"); keep the base letter.
            (Some(c), None) if c.is_alphabetic() => Ok(Self(c.to_lowercase().next().unwrap_or(c))),
            _ => Err(InvalidInputError::NotALetter(trimmed.to_string())),
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = InvalidInputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::parse(c.encode_utf8(&mut [0; 4]))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A zero-based letter position within a word.
///
/// Callers speak in 1-based positions; the conversion happens once, here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Parse a 1-based position typed by the user.
    pub fn from_one_based(input: &str) -> Result<Self, InvalidInputError> {
        let trimmed = input.trim();
        let out_of_range = || InvalidInputError::PositionOutOfRange(trimmed.to_string());
        let value: i64 = trimmed.parse().map_err(|e: ParseIntError| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
            _ => InvalidInputError::InvalidPosition(trimmed.to_string()),
        })?;
        if value < 1 {
            return Err(out_of_range());
        }
        let index = usize::try_from(value - 1).map_err(|_| out_of_range())?;
        Ok(Self(index))
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

/// The kind of a constraint, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Letter not in word (gray)
    Exclude,
    /// Letter somewhere in word
    Require,
    /// Letter at an exact position (green)
    FixedAt,
    /// Letter in word but not at this position (yellow)
    ExcludedAt,
}

impl ConstraintKind {
    pub fn needs_position(self) -> bool {
        matches!(self, ConstraintKind::FixedAt | ConstraintKind::ExcludedAt)
    }

    /// Label used when listing constraints
    pub fn label(self) -> &'static str {
        match self {
            ConstraintKind::Exclude => "Gray Tile",
            ConstraintKind::Require => "Contains",
            ConstraintKind::FixedAt => "Green Tile",
            ConstraintKind::ExcludedAt => "Yellow Tile",
        }
    }
}

impl FromStr for ConstraintKind {
    type Err = InvalidInputError;

    /// Accepts tile colors, descriptive names, and the listing labels
    /// (`"Green Tile:"` parses the same as `"green"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().trim_end_matches(':').to_lowercase();
        let key = key.strip_suffix(" tile").unwrap_or(&key);
        match key {
            "gray" | "grey" | "b" | "x" | "exclude" | "not contains" => Ok(ConstraintKind::Exclude),
            "contains" | "require" | "c" => Ok(ConstraintKind::Require),
            "green" | "g" | "fixed" | "at position" => Ok(ConstraintKind::FixedAt),
            "yellow" | "y" | "present" | "not position" => Ok(ConstraintKind::ExcludedAt),
            _ => Err(InvalidInputError::UnknownKind(s.trim().to_string())),
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One tile observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    Exclude(Letter),
    Require(Letter),
    FixedAt { position: Position, letter: Letter },
    ExcludedAt { position: Position, letter: Letter },
}

impl Constraint {
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::Exclude(_) => ConstraintKind::Exclude,
            Constraint::Require(_) => ConstraintKind::Require,
            Constraint::FixedAt { .. } => ConstraintKind::FixedAt,
            Constraint::ExcludedAt { .. } => ConstraintKind::ExcludedAt,
        }
    }

    pub fn letter(&self) -> Letter {
        match *self {
            Constraint::Exclude(letter)
            | Constraint::Require(letter)
            | Constraint::FixedAt { letter, .. }
            | Constraint::ExcludedAt { letter, .. } => letter,
        }
    }

    pub fn position(&self) -> Option<Position> {
        match *self {
            Constraint::FixedAt { position, .. } | Constraint::ExcludedAt { position, .. } => {
                Some(position)
            }
            Constraint::Exclude(_) | Constraint::Require(_) => None,
        }
    }

    /// Check whether `word` satisfies this constraint.
    ///
    /// Positions count `char`s. A word too short to have the position fails
    /// a green constraint, but only the "present somewhere" half of a yellow
    /// constraint applies to it.
    pub fn matches(&self, word: &str) -> bool {
        match *self {
            Constraint::Exclude(letter) => !word.contains(letter.as_char()),
            Constraint::Require(letter) => word.contains(letter.as_char()),
            Constraint::FixedAt { position, letter } => {
                word.chars().nth(position.index()) == Some(letter.as_char())
            }
            Constraint::ExcludedAt { position, letter } => {
                word.contains(letter.as_char())
                    && word.chars().nth(position.index()) != Some(letter.as_char())
            }
        }
    }
}

/// The accumulated constraints.
///
/// Gray and "contains" letters are sets; green and yellow constraints are
/// keyed by position, so a later one at the same position replaces the
/// earlier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    excluded: BTreeSet<Letter>,
    required: BTreeSet<Letter>,
    fixed_at: BTreeMap<Position, Letter>,
    excluded_at: BTreeMap<Position, Letter>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, constraint: Constraint) {
        match constraint {
            Constraint::Exclude(letter) => {
                self.excluded.insert(letter);
            }
            Constraint::Require(letter) => {
                self.required.insert(letter);
            }
            Constraint::FixedAt { position, letter } => {
                self.fixed_at.insert(position, letter);
            }
            Constraint::ExcludedAt { position, letter } => {
                self.excluded_at.insert(position, letter);
            }
        }
    }

    pub fn clear(&mut self) {
        self.excluded.clear();
        self.required.clear();
        self.fixed_at.clear();
        self.excluded_at.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
            && self.required.is_empty()
            && self.fixed_at.is_empty()
            && self.excluded_at.is_empty()
    }

    pub fn len(&self) -> usize {
        self.excluded.len() + self.required.len() + self.fixed_at.len() + self.excluded_at.len()
    }

    pub fn excluded(&self) -> &BTreeSet<Letter> {
        &self.excluded
    }

    pub fn required(&self) -> &BTreeSet<Letter> {
        &self.required
    }

    pub fn fixed_at(&self) -> &BTreeMap<Position, Letter> {
        &self.fixed_at
    }

    pub fn excluded_at(&self) -> &BTreeMap<Position, Letter> {
        &self.excluded_at
    }

    /// Every constraint: gray letters, then contained letters, then green
    /// and yellow by ascending position.
    pub fn iter(&self) -> impl Iterator<Item = Constraint> + '_ {
        let excluded = self.excluded.iter().map(|&l| Constraint::Exclude(l));
        let required = self.required.iter().map(|&l| Constraint::Require(l));
        let fixed_at = self
            .fixed_at
            .iter()
            .map(|(&position, &letter)| Constraint::FixedAt { position, letter });
        let excluded_at = self
            .excluded_at
            .iter()
            .map(|(&position, &letter)| Constraint::ExcludedAt { position, letter });

        excluded.chain(required).chain(fixed_at).chain(excluded_at)
    }

    /// Check if a word satisfies all constraints
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        self.iter().all(|constraint| constraint.matches(word))
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<T: IntoIterator<Item = Constraint>>(iter: T) -> Self {
        let mut set = Self::new();
        for constraint in iter {
            set.insert(constraint);
        }
        set
    }
}
