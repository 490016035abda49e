use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a game from starting
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Could not load word list from {}", .path.display())]
    WordListUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Word list at {} contains no words", .path.display())]
    EmptyWordList { path: PathBuf },

    #[error("Could not load dictionary from {}", .path.display())]
    DictionaryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;
