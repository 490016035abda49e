use serde::{Deserialize, Serialize};

use crate::game::rules::RejectionReason;

/// Result of submitting a candidate word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Accepted {
        word: String,
        points: i32,
    },
    Rejected {
        word: String,
        reason: RejectionReason,
        title: String,
        message: String,
        /// Points taken off the score, zero when the rule carries no penalty
        penalty: i32,
    },
}

impl ValidationOutcome {
    pub fn rejected(word: impl Into<String>, reason: RejectionReason, penalty: i32) -> Self {
        Self::Rejected {
            word: word.into(),
            reason,
            title: reason.title().to_string(),
            message: reason.message().to_string(),
            penalty,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn reason(&self) -> Option<RejectionReason> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { reason, .. } => Some(*reason),
        }
    }

    /// Signed change this outcome made to the score
    pub fn score_delta(&self) -> i32 {
        match self {
            Self::Accepted { points, .. } => *points,
            Self::Rejected { penalty, .. } => -*penalty,
        }
    }
}
