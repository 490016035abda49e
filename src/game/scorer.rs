use serde::{Deserialize, Serialize};

use crate::{game::rules::RejectionReason, utils::letters::letter_count};

/// How the score should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStyle {
    /// Score above zero (green)
    Positive,
    /// Zero or below (red)
    Negative,
}

pub struct Scorer;

impl Scorer {
    /// Points gained for an accepted word.
    ///
    /// Scoring rules:
    /// - Accepted word: +1 per letter
    /// - Rejected word: -1 per letter
    /// - Submitting the root word itself: no change
    /// - The score has no floor
    pub fn award(word: &str) -> i32 {
        letter_count(word) as i32
    }

    /// Points lost for a rejected word (returned as a non-negative amount)
    pub fn penalty(word: &str, reason: RejectionReason) -> i32 {
        if reason.penalizes() {
            letter_count(word) as i32
        } else {
            0
        }
    }

    pub fn style(score: i32) -> ScoreStyle {
        if score > 0 {
            ScoreStyle::Positive
        } else {
            ScoreStyle::Negative
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_is_word_length() {
        assert_eq!(Scorer::award("silk"), 4);
        assert_eq!(Scorer::award("silkworm"), 8);
    }

    #[test]
    fn test_penalty_by_reason() {
        assert_eq!(Scorer::penalty("silkworms", RejectionReason::NotPossible), 9);
        assert_eq!(Scorer::penalty("silk", RejectionReason::AlreadyUsed), 4);
        assert_eq!(Scorer::penalty("ok", RejectionReason::TooShort), 2);
        assert_eq!(Scorer::penalty("slow", RejectionReason::NotAWord), 4);
        assert_eq!(Scorer::penalty("silkworm", RejectionReason::SameAsRoot), 0);
    }

    #[test]
    fn test_style_follows_sign() {
        assert_eq!(Scorer::style(1), ScoreStyle::Positive);
        assert_eq!(Scorer::style(42), ScoreStyle::Positive);
        assert_eq!(Scorer::style(0), ScoreStyle::Negative);
        assert_eq!(Scorer::style(-9), ScoreStyle::Negative);
    }
}
