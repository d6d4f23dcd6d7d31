//! Hangman module - word-guessing bookkeeping
//!
//! Pure state: a secret word, the set of guessed letters, and a mistake
//! counter. Guesses are case-insensitive ASCII letters; repeats are
//! ignored without penalty. Six distinct misses lose the round.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::InputFrame;

/// Misses allowed before the round is lost (one per gallows part)
pub const MAX_MISTAKES: u32 = 6;

/// Fixed word list; one entry is chosen per round.
pub const WORDS: [&str; 10] = [
    "TERMINAL",
    "PROGRAMMING",
    "HANGMAN",
    "COMPUTER",
    "KEYBOARD",
    "DEVELOPER",
    "SOFTWARE",
    "VARIABLE",
    "FUNCTION",
    "POINTER",
];

/// Round phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HangmanPhase {
    Playing,
    Won,
    Lost,
}

/// A single hangman round
#[derive(Debug, Clone)]
pub struct HangmanGame {
    secret: &'static str,
    /// One flag per secret letter; true once that letter is revealed
    revealed: ArrayVec<bool, 16>,
    /// Distinct lowercase letters guessed so far, in guess order
    used: ArrayVec<char, 26>,
    mistakes: u32,
    phase: HangmanPhase,
}

impl HangmanGame {
    /// Start a round with a word picked by the seeded RNG.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let word = WORDS[rng.next_range(WORDS.len() as u32) as usize];
        Self::with_word(word)
    }

    /// Start a round over a specific word (deterministic sessions).
    pub fn with_word(secret: &'static str) -> Self {
        let mut revealed = ArrayVec::new();
        for _ in secret.chars() {
            revealed.push(false);
        }
        Self {
            secret,
            revealed,
            used: ArrayVec::new(),
            mistakes: 0,
            phase: HangmanPhase::Playing,
        }
    }

    pub fn phase(&self) -> HangmanPhase {
        self.phase
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn used_letters(&self) -> &[char] {
        &self.used
    }

    /// The secret word; shown by the presentation layer after a loss.
    pub fn secret(&self) -> &'static str {
        self.secret
    }

    /// The word with unguessed letters masked as underscores.
    pub fn masked_word(&self) -> String {
        self.secret
            .chars()
            .zip(self.revealed.iter())
            .map(|(ch, &shown)| if shown { ch } else { '_' })
            .collect()
    }

    /// Apply one guessed letter. Non-letters and repeats are ignored; a
    /// miss costs a mistake. Updates the phase on win or loss.
    pub fn guess(&mut self, ch: char) {
        if self.phase != HangmanPhase::Playing || !ch.is_ascii_alphabetic() {
            return;
        }
        let letter = ch.to_ascii_lowercase();
        if self.used.contains(&letter) {
            return;
        }
        self.used.push(letter);

        let mut hit = false;
        for (i, secret_ch) in self.secret.chars().enumerate() {
            if secret_ch.to_ascii_lowercase() == letter {
                self.revealed[i] = true;
                hit = true;
            }
        }

        if !hit {
            self.mistakes += 1;
            if self.mistakes >= MAX_MISTAKES {
                self.phase = HangmanPhase::Lost;
            }
        } else if self.revealed.iter().all(|&shown| shown) {
            self.phase = HangmanPhase::Won;
        }
    }

    /// Consume the tick's typed characters as guesses.
    pub fn update(&mut self, input: &InputFrame) {
        for &ch in &input.chars {
            self.guess(ch);
        }
    }
}
