use serde::{Deserialize, Serialize};

use crate::game::scorer::ScoreStyle;

/// Everything a front end needs to draw the current round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub root_word: String,
    /// Most recent first
    pub used_words: Vec<String>,
    pub score: i32,
    pub score_style: ScoreStyle,
}
