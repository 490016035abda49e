use rand::Rng;

use crate::{
    dictionary::DictionaryOracle,
    error::Result,
    game::{
        rules::{RestartScope, RuleSet},
        scorer::Scorer,
        validator::WordValidator,
    },
    models::{SessionSnapshot, ValidationOutcome},
    utils::letters::normalize,
    words::WordPool,
};

/// State of one player's round: the root word, the words found so far and
/// the running score.
pub struct GameSession {
    root_word: String,
    /// Most recent first
    used_words: Vec<String>,
    score: i32,
    validator: WordValidator,
}

impl GameSession {
    /// Start a round with a random root word from the pool
    pub fn start(pool: &WordPool, rules: RuleSet, rng: &mut impl Rng) -> Result<Self> {
        let root_word = pool.choose(rng)?.to_string();
        tracing::info!("Starting game with root word '{}'", root_word);

        Ok(Self {
            root_word,
            used_words: Vec::new(),
            score: 0,
            validator: WordValidator::new(rules),
        })
    }

    /// Pick a new root word; depending on the rule set, also clear the used
    /// words and score.
    pub fn restart(&mut self, pool: &WordPool, rng: &mut impl Rng) -> Result<()> {
        let root_word = pool.choose(rng)?.to_string();

        if self.validator.rules().restart_scope == RestartScope::Full {
            self.used_words.clear();
            self.score = 0;
        }

        tracing::info!(
            "Restarted game: root word '{}' -> '{}' ({:?})",
            self.root_word,
            root_word,
            self.validator.rules().restart_scope
        );
        self.root_word = root_word;

        Ok(())
    }

    /// Validate a raw entry and apply its effect on the score and used words.
    ///
    /// Returns `None` when the entry is blank after normalization; nothing
    /// changes in that case.
    pub fn submit_word(
        &mut self,
        raw: &str,
        oracle: &dyn DictionaryOracle,
    ) -> Option<ValidationOutcome> {
        let word = normalize(raw);
        if word.is_empty() {
            return None;
        }

        let outcome = match self
            .validator
            .check(&word, &self.root_word, &self.used_words, oracle)
        {
            Some(reason) => {
                let penalty = Scorer::penalty(&word, reason);
                self.score -= penalty;
                ValidationOutcome::rejected(word, reason, penalty)
            }
            None => {
                let points = Scorer::award(&word);
                self.score += points;
                self.used_words.insert(0, word.clone());
                ValidationOutcome::Accepted { word, points }
            }
        };

        tracing::debug!(
            "Submission {:?} -> {:?}, score now {}",
            raw,
            outcome,
            self.score
        );

        Some(outcome)
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn rules(&self) -> &RuleSet {
        self.validator.rules()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            root_word: self.root_word.clone(),
            used_words: self.used_words.clone(),
            score: self.score,
            score_style: Scorer::style(self.score),
        }
    }
}
