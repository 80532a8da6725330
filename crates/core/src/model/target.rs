//! Picks the word a player has to guess out of a headline body.
//!
//! The heuristic looks for a proper-noun-like word: Title-case, longer than
//! [`MIN_TARGET_LEN`] characters, and never the first word of the headline
//! (which is capitalised regardless of what it is).

/// Punctuation stripped from both ends of a word before it is considered.
const TRIM_CHARS: &[char] = &['.', ',', '?', '!', '"', '(', ')', '\u{2014}'];

/// A target must have strictly more characters than this.
pub const MIN_TARGET_LEN: usize = 4;

/// Strips surrounding punctuation from a single headline word.
#[must_use]
pub fn clean_word(word: &str) -> &str {
    word.trim_matches(TRIM_CHARS)
}

/// Returns true when the first letter is uppercase and no later letter is.
///
/// Leading non-letters such as quotes are skipped, so `"'Trumpism'"` qualifies.
/// Digits, hyphens and apostrophes after the first letter are allowed, so
/// `"Covid-19"` and `"Musk's"` both qualify while `"NASA"` and `"iPhone"` do not.
#[must_use]
pub fn is_title_case(word: &str) -> bool {
    let mut letters = word.chars().skip_while(|ch| !ch.is_alphabetic());
    let Some(first) = letters.next() else {
        return false;
    };
    first.is_uppercase() && letters.all(|ch| !ch.is_uppercase())
}

/// Derives the target word for a headline body, skipping its first word.
///
/// Returns `None` when no word qualifies; such headlines are not playable.
#[must_use]
pub fn derive_target(body: &str) -> Option<String> {
    body.split_whitespace()
        .skip(1)
        .map(clean_word)
        .find(|word| is_title_case(word) && word.chars().count() > MIN_TARGET_LEN)
        .map(str::to_owned)
}
