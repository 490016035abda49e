use std::path::{Path, PathBuf};

use rand::{seq::IndexedRandom, Rng};
use tokio::fs;

use crate::error::{GameError, Result};

/// Candidate root words, loaded once at startup
#[derive(Debug, Clone)]
pub struct WordPool {
    source: PathBuf,
    words: Vec<String>,
}

impl WordPool {
    /// Load the `start` word list: one candidate root word per line
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| GameError::WordListUnavailable {
                path: path.to_path_buf(),
                source,
            })?;

        let pool = Self::from_lines(path, content.lines())?;
        tracing::info!(
            "Loaded {} root words from {}",
            pool.len(),
            path.display()
        );

        Ok(pool)
    }

    /// Build a pool from already-read lines; `source` names where they came from
    pub fn from_lines<P, I, S>(source: P, lines: I) -> Result<Self>
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let source = source.into();
        let words: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            return Err(GameError::EmptyWordList { path: source });
        }

        Ok(Self { source, words })
    }

    /// Pick a root word uniformly at random
    pub fn choose(&self, rng: &mut impl Rng) -> Result<&str> {
        self.words
            .choose(rng)
            .map(String::as_str)
            .ok_or_else(|| GameError::EmptyWordList {
                path: self.source.clone(),
            })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
