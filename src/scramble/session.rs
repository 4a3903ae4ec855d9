//! Scramble game session: the unplayed pool plus at most one active round

use crate::content::{ContentPool, Scramble};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of checking a typed guess against the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Guess matches the word (case-insensitive)
    Correct,
    /// Guess has reached the word's length but does not match
    Wrong,
    /// Guess is too short to judge yet
    Pending,
}

/// One active word-scramble round
#[derive(Debug)]
pub struct ScrambleRound {
    scramble: Scramble,
    hints_revealed: usize,
    guesses: u32,
}

impl ScrambleRound {
    fn new(scramble: Scramble) -> Self {
        Self {
            scramble,
            hints_revealed: 0,
            guesses: 0,
        }
    }

    pub fn scramble(&self) -> &Scramble {
        &self.scramble
    }

    pub fn scrambled_text(&self) -> &str {
        &self.scramble.scrambled
    }

    pub fn word(&self) -> &str {
        &self.scramble.word
    }

    /// Full-length guesses checked so far this round
    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    pub fn hints_revealed(&self) -> usize {
        self.hints_revealed
    }

    /// Check a guess. Only a guess of the word's full length counts as an
    /// attempt; shorter input is still pending.
    pub fn submit_guess(&mut self, guess: &str) -> GuessOutcome {
        let word = &self.scramble.word;
        if guess.trim().eq_ignore_ascii_case(word) {
            self.guesses += 1;
            GuessOutcome::Correct
        } else if guess.trim().chars().count() == word.chars().count() {
            self.guesses += 1;
            GuessOutcome::Wrong
        } else {
            GuessOutcome::Pending
        }
    }

    /// Reveal the next letter of the answer, keeping at least one hidden.
    /// Returns false once no further hint is available.
    pub fn reveal_hint(&mut self) -> bool {
        let cap = self.scramble.word.chars().count().saturating_sub(1);
        if self.hints_revealed >= cap {
            return false;
        }
        self.hints_revealed += 1;
        tracing::info!(
            "revealed hint {}/{} for '{}'",
            self.hints_revealed,
            cap,
            self.scramble.word
        );
        true
    }

    /// The answer with only the revealed letters shown, e.g. `vo_____`
    pub fn hint_text(&self) -> String {
        self.scramble
            .word
            .chars()
            .enumerate()
            .map(|(i, c)| if i < self.hints_revealed { c } else { '_' })
            .collect()
    }
}

/// Driver state for the scramble game.
///
/// Mirrors the puzzle session: a pool of unplayed scrambles and a single
/// active round.
#[derive(Debug)]
pub struct ScrambleSession {
    pool: ContentPool<Scramble>,
    rng: StdRng,
    current: Option<ScrambleRound>,
}

impl ScrambleSession {
    pub fn new(scrambles: Vec<Scramble>) -> Self {
        Self::with_rng(scrambles, StdRng::from_entropy())
    }

    /// Deterministic session for replays and tests
    pub fn with_seed(scrambles: Vec<Scramble>, seed: u64) -> Self {
        Self::with_rng(scrambles, StdRng::seed_from_u64(seed))
    }

    fn with_rng(scrambles: Vec<Scramble>, rng: StdRng) -> Self {
        Self {
            pool: ContentPool::new(scrambles),
            rng,
            current: None,
        }
    }

    /// Scrambles still waiting to be played
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn current(&self) -> Option<&ScrambleRound> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut ScrambleRound> {
        self.current.as_mut()
    }

    /// Draw a random unplayed scramble and install it as the active
    /// round. Returns None once the pool is exhausted; keeps the active
    /// round (with a logged error) if one is still loaded.
    pub fn next_round(&mut self) -> Option<&ScrambleRound> {
        if self.current.is_some() {
            tracing::error!("next_round called while a scramble was still loaded");
            return self.current.as_ref();
        }

        let scramble = self.pool.draw(&mut self.rng)?;
        tracing::info!(
            "next scramble '{}' ({} left in pool)",
            scramble.scrambled,
            self.pool.len()
        );
        self.current = Some(ScrambleRound::new(scramble));
        self.current.as_ref()
    }

    /// Clear the active round, handing back the solved scramble for the
    /// description dialog
    pub fn finish_round(&mut self) -> Option<Scramble> {
        self.current.take().map(|round| round.scramble)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(word: &str, scrambled: &str) -> Scramble {
        Scramble {
            word: word.to_string(),
            scrambled: scrambled.to_string(),
            description: format!("about {}", word),
            image: None,
        }
    }

    fn round(word: &str) -> ScrambleRound {
        ScrambleRound::new(sample(word, "xxxx"))
    }

    #[test]
    fn test_guess_outcomes() {
        let mut round = round("volcano");

        assert_eq!(round.submit_guess("vol"), GuessOutcome::Pending);
        assert_eq!(round.submit_guess("volcani"), GuessOutcome::Wrong);
        assert_eq!(round.submit_guess("VolCANO"), GuessOutcome::Correct);
        // Pending input never counted as an attempt
        assert_eq!(round.guesses(), 2);
    }

    #[test]
    fn test_guess_ignores_surrounding_whitespace() {
        let mut round = round("listen");
        assert_eq!(round.submit_guess(" listen "), GuessOutcome::Correct);
    }

    #[test]
    fn test_hints_stop_short_of_the_answer() {
        let mut round = round("ab");
        assert!(round.reveal_hint());
        assert!(!round.reveal_hint());
        assert_eq!(round.hints_revealed(), 1);
        assert_eq!(round.hint_text(), "a_");
    }

    #[test]
    fn test_hint_text_masks_unrevealed_letters() {
        let mut round = round("volcano");
        assert_eq!(round.hint_text(), "_______");
        round.reveal_hint();
        round.reveal_hint();
        assert_eq!(round.hint_text(), "vo_____");
    }

    #[test]
    fn test_session_round_lifecycle() {
        let scrambles = vec![sample("listen", "silent"), sample("volcano", "clavono")];
        let mut session = ScrambleSession::with_seed(scrambles, 13);

        session.next_round().unwrap();
        assert_eq!(session.remaining(), 1);

        // Loading again keeps the active round
        let word = session.current().unwrap().word().to_string();
        let again = session.next_round().unwrap().word().to_string();
        assert_eq!(word, again);
        assert_eq!(session.remaining(), 1);

        session.finish_round().unwrap();
        session.next_round().unwrap();
        session.finish_round().unwrap();
        assert!(session.next_round().is_none());
    }
}
