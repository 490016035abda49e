use crate::{
    dictionary::DictionaryOracle,
    game::rules::{CheckOrder, RejectionReason, RuleSet},
    utils::letters::{can_draw_from, letter_count},
};

pub struct WordValidator {
    rules: RuleSet,
}

impl WordValidator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Run every rule against an already-normalized word and return the first
    /// one it breaks.
    ///
    /// Originality and feasibility always run first; the remaining checks
    /// follow the configured `CheckOrder`.
    pub fn check(
        &self,
        word: &str,
        root_word: &str,
        used_words: &[String],
        oracle: &dyn DictionaryOracle,
    ) -> Option<RejectionReason> {
        if !Self::is_original(word, used_words) {
            return Some(RejectionReason::AlreadyUsed);
        }

        if !Self::is_possible(word, root_word) {
            return Some(RejectionReason::NotPossible);
        }

        let dictionary =
            || (!Self::is_real_word(word, oracle)).then_some(RejectionReason::NotAWord);
        let length = || (!self.is_long_enough(word)).then_some(RejectionReason::TooShort);
        let identity =
            || Self::is_root_word(word, root_word).then_some(RejectionReason::SameAsRoot);

        match self.rules.check_order {
            CheckOrder::LengthFirst => length().or_else(identity).or_else(dictionary),
            CheckOrder::DictionaryFirst => dictionary().or_else(length).or_else(identity),
        }
    }

    /// Check the word has not been accepted already this round
    pub fn is_original(word: &str, used_words: &[String]) -> bool {
        !used_words.iter().any(|used| used == word)
    }

    /// Check every letter of the word can be taken from the root word
    pub fn is_possible(word: &str, root_word: &str) -> bool {
        can_draw_from(word, &root_word.to_lowercase())
    }

    pub fn is_long_enough(&self, word: &str) -> bool {
        letter_count(word) >= self.rules.min_word_length
    }

    pub fn is_root_word(word: &str, root_word: &str) -> bool {
        word == root_word
    }

    pub fn is_real_word(word: &str, oracle: &dyn DictionaryOracle) -> bool {
        oracle.is_real_word(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::game::rules::Variant;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["silk", "worm", "milk", "silkworm", "owl", "slim", "ok"])
    }

    fn used(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_is_original() {
        let used_words = used(&["silk", "worm"]);
        assert!(!WordValidator::is_original("silk", &used_words));
        assert!(WordValidator::is_original("milk", &used_words));
        assert!(WordValidator::is_original("silk", &[]));
    }

    #[test]
    fn test_is_possible() {
        assert!(WordValidator::is_possible("silk", "silkworm"));
        assert!(!WordValidator::is_possible("silkworms", "silkworm"));
        assert!(!WordValidator::is_possible("dog", "silkworm"));
    }

    #[test]
    fn test_minimum_length_is_inclusive() {
        let validator = WordValidator::new(RuleSet::for_variant(Variant::Shared));
        assert!(!validator.is_long_enough("ok"));
        assert!(validator.is_long_enough("owl"));

        let validator = WordValidator::new(RuleSet::for_variant(Variant::Rescramble));
        assert!(!validator.is_long_enough("owl"));
        assert!(validator.is_long_enough("silk"));
    }

    #[test]
    fn test_accepts_valid_word() {
        let validator = WordValidator::new(RuleSet::default());
        assert_eq!(validator.check("silk", "silkworm", &[], &dictionary()), None);
    }

    #[test]
    fn test_originality_checked_before_feasibility() {
        let validator = WordValidator::new(RuleSet::default());
        // "dog" is also impossible, but originality wins
        let used_words = used(&["dog"]);
        assert_eq!(
            validator.check("dog", "silkworm", &used_words, &dictionary()),
            Some(RejectionReason::AlreadyUsed)
        );
    }

    #[test]
    fn test_feasibility_checked_before_dictionary() {
        let validator = WordValidator::new(RuleSet::default());
        assert_eq!(
            validator.check("silkworms", "silkworm", &[], &dictionary()),
            Some(RejectionReason::NotPossible)
        );
    }

    #[test]
    fn test_length_first_order() {
        let validator = WordValidator::new(RuleSet::for_variant(Variant::Shared));
        let empty = Dictionary::empty();

        // Too short and not a word: length wins
        assert_eq!(
            validator.check("sk", "silkworm", &[], &empty),
            Some(RejectionReason::TooShort)
        );
        // Root word missing from the dictionary: identity wins
        assert_eq!(
            validator.check("silkworm", "silkworm", &[], &empty),
            Some(RejectionReason::SameAsRoot)
        );
        assert_eq!(
            validator.check("slow", "silkworm", &[], &empty),
            Some(RejectionReason::NotAWord)
        );
    }

    #[test]
    fn test_dictionary_first_order() {
        let validator = WordValidator::new(RuleSet::for_variant(Variant::Rescramble));
        let empty = Dictionary::empty();

        assert_eq!(
            validator.check("sk", "silkworm", &[], &empty),
            Some(RejectionReason::NotAWord)
        );
        assert_eq!(
            validator.check("silkworm", "silkworm", &[], &empty),
            Some(RejectionReason::NotAWord)
        );
        assert_eq!(
            validator.check("owl", "silkworm", &[], &dictionary()),
            Some(RejectionReason::TooShort)
        );
        assert_eq!(
            validator.check("silkworm", "silkworm", &[], &dictionary()),
            Some(RejectionReason::SameAsRoot)
        );
    }

    #[test]
    fn test_short_root_word_outcome_depends_on_variant() {
        let validator = WordValidator::new(RuleSet::for_variant(Variant::Rescramble));
        let dict = Dictionary::from_words(["cat"]);
        assert_eq!(
            validator.check("cat", "cat", &[], &dict),
            Some(RejectionReason::TooShort)
        );

        let validator = WordValidator::new(RuleSet::for_variant(Variant::Shared));
        assert_eq!(
            validator.check("cat", "cat", &[], &dict),
            Some(RejectionReason::SameAsRoot)
        );
    }
}
