use serde::{Deserialize, Serialize};

/// The two published flavours of the game.
///
/// They share the same rule set but disagree on the minimum word length, on
/// whether the dictionary lookup happens before the length and root-word
/// checks, and on what a restart resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Words of 3+ letters, length checked first, restart only rerolls the root word
    #[default]
    Shared,
    /// Words of 4+ letters, dictionary checked first, restart starts a new round
    Rescramble,
}

/// Order of the checks that follow originality and feasibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOrder {
    /// length, root word, dictionary
    LengthFirst,
    /// dictionary, length, root word
    DictionaryFirst,
}

/// What `restart` clears besides picking a new root word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartScope {
    /// Keep used words and score
    RerollOnly,
    /// Clear used words and reset the score to zero
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Fewest letters an accepted word may have
    pub min_word_length: usize,
    pub check_order: CheckOrder,
    pub restart_scope: RestartScope,
}

impl RuleSet {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Shared => Self {
                min_word_length: 3,
                check_order: CheckOrder::LengthFirst,
                restart_scope: RestartScope::RerollOnly,
            },
            Variant::Rescramble => Self {
                min_word_length: 4,
                check_order: CheckOrder::DictionaryFirst,
                restart_scope: RestartScope::Full,
            },
        }
    }

    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    pub fn with_check_order(mut self, check_order: CheckOrder) -> Self {
        self.check_order = check_order;
        self
    }

    pub fn with_restart_scope(mut self, restart_scope: RestartScope) -> Self {
        self.restart_scope = restart_scope;
        self
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

/// Why a candidate word was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    AlreadyUsed,
    NotPossible,
    TooShort,
    SameAsRoot,
    NotAWord,
}

impl RejectionReason {
    pub fn title(&self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already!",
            Self::NotPossible => "Word not recognized",
            Self::TooShort => "Word too small.",
            Self::SameAsRoot => "Thou shan't use that which is provided unto thee.",
            Self::NotAWord => "Word not possible",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Be more original!",
            Self::NotPossible => "You can't just make up words, ya know.",
            Self::TooShort => "Try a bigger word.",
            Self::SameAsRoot => "Thou must tryest harder. :)",
            Self::NotAWord => "That isn't a real word.",
        }
    }

    /// Whether this rejection costs the player the word's length in points
    pub fn penalizes(&self) -> bool {
        !matches!(self, Self::SameAsRoot)
    }
}
