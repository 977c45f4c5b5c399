//! Loading and normalizing the word list.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::error::DictionaryLoadError;

/// The canonical word collection: trimmed, lower-cased, unique and sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from raw lines.
    ///
    /// Blank lines are dropped and duplicates (after lower-casing) collapse
    /// into one entry.
    pub fn load<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: BTreeSet<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Read a dictionary from any buffered source. `path` is only used to
    /// label errors.
    pub fn from_reader<R: BufRead>(reader: R, path: &Path) -> Result<Self, DictionaryLoadError> {
        let lines = reader
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| DictionaryLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let dictionary = Self::load(lines);
        if dictionary.is_empty() {
            return Err(DictionaryLoadError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(dictionary)
    }

    /// Load the word list stored at `path`, one word per line.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_reader(BufReader::new(file), path)?;
        info!(words = dictionary.len(), path = %path.display(), "loaded dictionary");
        Ok(dictionary)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|candidate| candidate.as_str().cmp(word))
            .is_ok()
    }
}
