//! Positional feedback for a guess
//!
//! Each guessed token is classified as:
//! - Correct: same token at the same position in the target
//! - Present: token occurs elsewhere in the target and an occurrence is still
//!   unclaimed
//! - Absent: no unclaimed occurrence remains
//!
//! Duplicates are resolved the Wordle way: exact matches claim their
//! occurrences first, then the remaining occurrences go to the leftmost
//! non-matching guesses.

use super::token::{Token, token_counts};
use std::fmt;

/// Classification of one guessed token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    Correct,
    Present,
    Absent,
}

impl LetterState {
    /// Emoji square for this state
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-character code (G, Y or -)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    fn from_code(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for a whole guess, one state per token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterState>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches as correct and remove them
    ///    from the pool of available target tokens
    /// 2. Second pass, left to right: a non-matching token is present while
    ///    the pool still holds an occurrence of it, consuming one; otherwise
    ///    it is absent
    ///
    /// # Panics
    /// Panics if `guess` and `target` differ in length. Callers validate guess
    /// length before asking for feedback.
    ///
    /// # Examples
    /// ```
    /// use anagramle::core::{tokenize, Feedback, Variant};
    ///
    /// let target = tokenize("speed", Variant::English);
    /// let guess = tokenize("eerie", Variant::English);
    /// let feedback = Feedback::calculate(&target, &guess);
    /// assert_eq!(feedback.to_codes(), "YY---");
    /// ```
    #[must_use]
    pub fn calculate(target: &[Token], guess: &[Token]) -> Self {
        assert_eq!(
            guess.len(),
            target.len(),
            "guess and target must have the same token length"
        );

        let mut states = vec![LetterState::Absent; guess.len()];
        let mut available = token_counts(target);

        // First pass: exact matches
        for (i, (g, t)) in guess.iter().zip(target).enumerate() {
            if g == t {
                states[i] = LetterState::Correct;
                if let Some(count) = available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present tokens, leftmost first
        for (i, g) in guess.iter().enumerate() {
            if states[i] == LetterState::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(g)
                && *count > 0
            {
                states[i] = LetterState::Present;
                *count -= 1;
            }
        }

        Self(states)
    }

    /// All-correct feedback for a word of `length` tokens
    #[must_use]
    pub fn perfect(length: usize) -> Self {
        Self(vec![LetterState::Correct; length])
    }

    #[inline]
    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every token is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterState::Correct)
    }

    /// Count the number of correct tokens
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterState::Correct)
    }

    /// Count the number of present tokens
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterState::Present)
    }

    fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use anagramle::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let states: Option<Vec<LetterState>> = s.chars().map(LetterState::from_code).collect();
        states.filter(|s| !s.is_empty()).map(Self)
    }

    /// Convert to an emoji string like "🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }

    /// Convert to a code string like "GY-"
    #[must_use]
    pub fn to_codes(&self) -> String {
        self.0.iter().map(|s| s.code()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
