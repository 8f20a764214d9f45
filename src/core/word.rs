//! Tokenized word representation
//!
//! A Word stores the uppercase text together with the tokens it splits into
//! for its variant.

use super::token::{Token, tokenize};
use super::Variant;
use std::fmt;

/// Shortest playable word, in tokens
pub const MIN_TOKENS: usize = 2;

/// Longest playable word, in tokens (one full board row)
pub const MAX_TOKENS: usize = 15;

/// A validated word, tokenized for one variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    variant: Variant,
    tokens: Vec<Token>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(
                    f,
                    "Word must be {MIN_TOKENS}-{MAX_TOKENS} letters long, got {len}"
                )
            }
            Self::InvalidCharacters => write!(f, "Word must contain only letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is trimmed and uppercased. Length is measured in tokens, so a
    /// Spanish word may contain more characters than its length.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The token count is outside `2..=15`
    /// - The text contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use anagramle::core::{Variant, Word};
    ///
    /// let word = Word::new("calle", Variant::Spanish).unwrap();
    /// assert_eq!(word.text(), "CALLE");
    /// assert_eq!(word.len(), 4);
    ///
    /// assert!(Word::new("a", Variant::English).is_err());
    /// assert!(Word::new("sh0rt", Variant::English).is_err());
    /// ```
    pub fn new(text: &str, variant: Variant) -> Result<Self, WordError> {
        let word = Self::unchecked(text, variant);

        if !word.text.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        if !(MIN_TOKENS..=MAX_TOKENS).contains(&word.tokens.len()) {
            return Err(WordError::InvalidLength(word.tokens.len()));
        }

        Ok(word)
    }

    /// Tokenize without validating length or characters
    ///
    /// Used for partially typed guesses, which may be empty or short.
    #[must_use]
    pub fn unchecked(text: &str, variant: Variant) -> Self {
        let text = text.trim().to_uppercase();
        let tokens = tokenize(&text, variant);
        Self {
            text,
            variant,
            tokens,
        }
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Get the word's tokens
    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Length in tokens
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
