//! Game session state machine
//!
//! A session owns one puzzle and the accepted guesses made against it.
//! Rejected guesses leave the session untouched.

use super::source::{Puzzle, WordSource, WordValidator};
use crate::core::{
    Feedback, MAX_ATTEMPTS, Multiplier, Placement, Word, attempt_bonus, final_score, raw_score,
};
use crate::error::GameError;

/// One accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
    /// Raw score of the guess at the puzzle placement
    pub score: u32,
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Won {
        attempt_index: usize,
        raw_score: u32,
        bonus: f64,
        final_score: u32,
    },
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    puzzle: Puzzle,
    attempts: Vec<Attempt>,
    outcome: Outcome,
}

impl Session {
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let length = puzzle.target().len();
        if !puzzle.placement().fits(length) {
            tracing::warn!(
                length,
                placement = %puzzle.placement(),
                "word overruns the board, trailing squares score as plain"
            );
        }

        Self {
            puzzle,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            outcome: Outcome::InProgress,
        }
    }

    /// Start a game with the next puzzle from `source`
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce a puzzle.
    pub fn start<S: WordSource + ?Sized>(source: &mut S) -> Result<Self, GameError> {
        Ok(Self::new(source.next_puzzle()?))
    }

    /// Submit a guess
    ///
    /// # Errors
    ///
    /// Returns an error, without consuming an attempt, if the game is over,
    /// the guess has the wrong number of tokens, contains non-letters, or is
    /// rejected by `validator`.
    ///
    /// # Examples
    /// ```
    /// use anagramle::core::{Placement, Variant, Word};
    /// use anagramle::game::{AcceptAll, Outcome, Puzzle, Session};
    ///
    /// let target = Word::new("cat", Variant::English).unwrap();
    /// let mut session = Session::new(Puzzle::new(target, Placement::new(7, 7)));
    ///
    /// session.submit("cat", &AcceptAll).unwrap();
    /// assert!(matches!(session.outcome(), Outcome::Won { final_score: 30, .. }));
    /// ```
    pub fn submit<V: WordValidator + ?Sized>(
        &mut self,
        text: &str,
        validator: &V,
    ) -> Result<&Attempt, GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameOver);
        }

        let target = self.puzzle.target();
        let candidate = Word::unchecked(text, target.variant());
        if candidate.len() != target.len() {
            return Err(GameError::WrongLength {
                expected: target.len(),
                actual: candidate.len(),
            });
        }

        let guess = Word::new(text, target.variant()).map_err(|reason| GameError::InvalidWord {
            word: candidate.text().to_string(),
            reason,
        })?;

        if !validator.is_valid(&guess) {
            return Err(GameError::NotInDictionary(guess.text().to_string()));
        }

        let feedback = Feedback::calculate(target.tokens(), guess.tokens());
        let score = raw_score(guess.tokens(), guess.variant(), self.puzzle.placement());
        let attempt_index = self.attempts.len();

        tracing::debug!(
            attempt = attempt_index + 1,
            feedback = %feedback.to_codes(),
            score,
            "accepted guess"
        );

        if guess.tokens() == target.tokens() {
            self.outcome = Outcome::Won {
                attempt_index,
                raw_score: score,
                bonus: attempt_bonus(attempt_index),
                final_score: final_score(score, attempt_index),
            };
        } else if attempt_index + 1 >= MAX_ATTEMPTS {
            self.outcome = Outcome::Lost;
        }

        self.attempts.push(Attempt {
            guess,
            feedback,
            score,
        });

        Ok(&self.attempts[attempt_index])
    }

    /// Raw score of a partially typed guess, for a live preview
    #[must_use]
    pub fn preview_score(&self, partial: &str) -> u32 {
        let word = Word::unchecked(partial, self.variant());
        raw_score(word.tokens(), word.variant(), self.puzzle.placement())
    }

    /// Raw score of the target itself, the best a correct guess can earn
    #[must_use]
    pub fn target_score(&self) -> u32 {
        let target = self.puzzle.target();
        raw_score(target.tokens(), target.variant(), self.puzzle.placement())
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        self.puzzle.target()
    }

    #[inline]
    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.puzzle.placement()
    }

    #[inline]
    #[must_use]
    pub fn hints(&self) -> &[usize] {
        self.puzzle.hints()
    }

    #[inline]
    #[must_use]
    pub const fn variant(&self) -> crate::core::Variant {
        self.puzzle.target().variant()
    }

    /// Length of the target in tokens
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.puzzle.target().len()
    }

    /// Multipliers under the target
    #[must_use]
    pub fn window(&self) -> Vec<Multiplier> {
        self.placement().window(self.word_length())
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        if self.outcome.is_over() {
            0
        } else {
            MAX_ATTEMPTS - self.attempts.len()
        }
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_over()
    }
}
