use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

use crate::error::{GameError, Result};

/// Answers whether a string is a recognized English word
pub trait DictionaryOracle {
    fn is_real_word(&self, word: &str) -> bool;
}

#[derive(Debug)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| GameError::DictionaryUnavailable {
                path: path.to_path_buf(),
                source,
            })?;

        let dictionary = Self::from_words(content.lines());
        tracing::info!("Loaded {} words into dictionary", dictionary.len());

        Ok(dictionary)
    }

    /// Build a dictionary from an in-memory word list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// Create an empty dictionary, used when no word list could be loaded
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryOracle for Dictionary {
    fn is_real_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::empty();
        assert!(dict.is_empty());
        assert!(!dict.is_real_word("silk"));
    }

    #[test]
    fn test_membership_is_case_insensitive() {
        let dict = Dictionary::from_words(["Silk", "WORM", " milk "]);
        assert_eq!(dict.len(), 3);
        assert!(dict.is_real_word("silk"));
        assert!(dict.is_real_word("Worm"));
        assert!(dict.is_real_word("milk"));
        assert!(!dict.is_real_word("silkw"));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dict = Dictionary::from_words(["", "  ", "a"]);
        assert_eq!(dict.len(), 1);
        assert!(dict.is_real_word("a"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "silk\r\nworm\nSilkworm\n").unwrap();

        let dict = assert_ok!(Dictionary::load(file.path()).await);
        assert_eq!(dict.len(), 3);
        assert!(dict.is_real_word("silkworm"));
    }

    #[tokio::test]
    async fn test_load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-words.txt");

        let err = assert_err!(Dictionary::load(&path).await);
        assert!(matches!(err, GameError::DictionaryUnavailable { .. }));
        assert!(err.to_string().contains("missing-words.txt"));
    }
}
