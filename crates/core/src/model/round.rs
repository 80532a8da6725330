/// Marker rendered for a letter the player has not earned yet.
pub const MASK_CHAR: char = '_';

/// Result of comparing a guess against the round's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
}

/// Reveal state for a single target word.
///
/// Each slot holds either nothing (masked) or the true character at that
/// position. Slots are filled left to right, one per wrong guess, and are
/// never masked again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    target: String,
    revealed: Vec<Option<char>>,
    wrong_guesses: u32,
}

impl RoundState {
    /// Starts a round with every position of `target` masked.
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let revealed = vec![None; target.chars().count()];
        Self {
            target,
            revealed,
            wrong_guesses: 0,
        }
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn revealed(&self) -> &[Option<char>] {
        &self.revealed
    }

    /// Number of characters in the target.
    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn masked_count(&self) -> usize {
        self.len() - self.revealed_count()
    }

    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.revealed.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    /// Case-insensitive comparison of the trimmed input against the target.
    #[must_use]
    pub fn is_match(&self, input: &str) -> bool {
        input.trim().to_lowercase() == self.target.to_lowercase()
    }

    /// Evaluates a guess; a miss reveals the next masked letter.
    pub fn check_guess(&mut self, input: &str) -> GuessOutcome {
        if self.is_match(input) {
            return GuessOutcome::Correct;
        }
        self.wrong_guesses = self.wrong_guesses.saturating_add(1);
        self.reveal_one_letter();
        GuessOutcome::Incorrect
    }

    /// Reveals the leftmost masked letter and returns it.
    ///
    /// No-op returning `None` once every letter is shown.
    pub fn reveal_one_letter(&mut self) -> Option<char> {
        let (slot, ch) = self
            .revealed
            .iter_mut()
            .zip(self.target.chars())
            .find(|(slot, _)| slot.is_none())?;
        *slot = Some(ch);
        Some(ch)
    }

    /// Compact hint such as `"R_____"`.
    #[must_use]
    pub fn hint(&self) -> String {
        self.revealed
            .iter()
            .map(|slot| slot.unwrap_or(MASK_CHAR))
            .collect()
    }

    /// Hint with a space between positions (`"R _ _ _ _ _"`), as shown in the headline.
    #[must_use]
    pub fn spaced_hint(&self) -> String {
        let mut out = String::with_capacity(self.len() * 2);
        for (idx, slot) in self.revealed.iter().enumerate() {
            if idx > 0 {
                out.push(' ');
            }
            out.push(slot.unwrap_or(MASK_CHAR));
        }
        out
    }
}

/// Replaces the first literal occurrence of `target` in `body` with `replacement`.
///
/// Later occurrences are left alone, including ones embedded in longer words.
#[must_use]
pub fn masked_headline(body: &str, target: &str, replacement: &str) -> String {
    if target.is_empty() {
        return body.to_string();
    }
    body.replacen(target, replacement, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_round_is_fully_masked() {
        let round = RoundState::new("Raises");
        assert_eq!(round.hint(), "______");
        assert_eq!(round.revealed_count(), 0);
        assert_eq!(round.masked_count(), 6);
        assert!(!round.is_fully_revealed());
    }

    #[test]
    fn wrong_guess_reveals_first_letter() {
        let mut round = RoundState::new("Raises");
        assert_eq!(round.check_guess("bananas"), GuessOutcome::Incorrect);
        assert_eq!(round.hint(), "R_____");
        assert_eq!(round.spaced_hint(), "R _ _ _ _ _");
        assert_eq!(round.wrong_guesses(), 1);
    }

    #[test]
    fn guess_is_trimmed_and_case_insensitive() {
        let mut round = RoundState::new("Raises");
        assert_eq!(round.check_guess("  rAISES \n"), GuessOutcome::Correct);
        assert_eq!(round.revealed_count(), 0);
        assert_eq!(round.wrong_guesses(), 0);
    }

    #[test]
    fn empty_guess_counts_as_incorrect() {
        let mut round = RoundState::new("Tesla");
        assert_eq!(round.check_guess(""), GuessOutcome::Incorrect);
        assert_eq!(round.hint(), "T____");
    }

    #[test]
    fn reveal_stops_once_everything_is_shown() {
        let mut round = RoundState::new("Raises");
        for _ in 0..6 {
            assert_eq!(round.check_guess("wrong"), GuessOutcome::Incorrect);
        }
        assert_eq!(round.hint(), "Raises");
        assert!(round.is_fully_revealed());

        let before = round.clone();
        assert_eq!(round.check_guess("still wrong"), GuessOutcome::Incorrect);
        assert_eq!(round.revealed(), before.revealed());
        assert_eq!(round.reveal_one_letter(), None);
        assert_eq!(round.hint(), "Raises");
    }

    #[test]
    fn revealed_count_never_decreases() {
        let mut round = RoundState::new("Ukraine");
        let mut last = round.revealed_count();
        for guess in ["a", "", "Ukrain", "kraine", "x", "y", "z", "w", "v"] {
            round.check_guess(guess);
            let now = round.revealed_count();
            assert!(now >= last);
            last = now;
        }
        assert!(round.is_fully_revealed());
    }

    #[test]
    fn fully_revealed_target_still_accepts_correct_guess() {
        let mut round = RoundState::new("Raises");
        while !round.is_fully_revealed() {
            round.reveal_one_letter();
        }
        assert_eq!(round.check_guess("RAISES"), GuessOutcome::Correct);
        assert_eq!(round.check_guess("raises"), GuessOutcome::Correct);
    }

    #[test]
    fn reveal_handles_multibyte_targets() {
        let mut round = RoundState::new("Zürich");
        assert_eq!(round.len(), 6);
        round.reveal_one_letter();
        round.reveal_one_letter();
        assert_eq!(round.hint(), "Zü____");
    }

    #[test]
    fn masking_replaces_only_first_occurrence() {
        assert_eq!(
            masked_headline("Paris hosts Paris summit", "Paris", "_ _ _ _ _"),
            "_ _ _ _ _ hosts Paris summit"
        );
        assert_eq!(
            masked_headline("Trumpets herald Trump visit", "Trump", "_ _ _ _ _"),
            "_ _ _ _ _ets herald Trump visit"
        );
        assert_eq!(masked_headline("Nothing here", "", "_"), "Nothing here");
    }
}
