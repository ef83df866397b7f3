use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use crate::error::{Error, Result};

/// A candidate word. Reference-counted so that copying a domain copies
/// pointers, not text.
pub type Word = Arc<str>;

/// The flat list of candidate words shared by every slot.
///
/// Words are normalised to ASCII uppercase on load; entries containing
/// anything other than ASCII letters are skipped with a warning, and
/// duplicates collapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: im::HashSet<Word>,
}

impl WordList {
    /// Parses a word list, one candidate per line.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_words(text.lines())
    }

    /// Reads and parses a word list from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    /// Builds a word list from any iterable of strings, applying the same
    /// normalisation as [`WordList::parse`].
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalised = im::HashSet::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            if !word.chars().all(|c| c.is_ascii_alphabetic()) {
                warn!(word, "skipping non-alphabetic word");
                continue;
            }
            normalised.insert(Word::from(word.to_ascii_uppercase()));
        }

        if normalised.is_empty() {
            return Err(Error::InvalidWordList(
                "word list contains no usable words".to_string(),
            ));
        }
        Ok(Self { words: normalised })
    }

    pub fn words(&self) -> &im::HashSet<Word> {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_to_uppercase_and_deduplicates() {
        let list = WordList::parse("cat\nCAT\n dog \n").unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.words().contains("CAT"));
        assert!(list.words().contains("DOG"));
    }

    #[test]
    fn skips_non_alphabetic_entries() {
        let list = WordList::parse("cat\nd0g\nit's\nbird\n").unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.words().contains("BIRD"));
    }

    #[test]
    fn rejects_a_list_with_no_usable_words() {
        assert!(matches!(
            WordList::parse("123\n\n"),
            Err(Error::InvalidWordList(_))
        ));
    }
}
