/// Lowercase a raw entry and strip surrounding whitespace and newlines.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Number of letters in a word, as used for scoring and the length rule
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// Check whether every letter of `word` can be drawn from `source`.
///
/// Each letter of `word` consumes the first matching letter still left in a
/// working copy of `source`, so repeated letters need repeated matches.
pub fn can_draw_from(word: &str, source: &str) -> bool {
    let mut remaining: Vec<char> = source.chars().collect();

    for letter in word.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.remove(pos);
            }
            None => return false,
        }
    }

    true
}
