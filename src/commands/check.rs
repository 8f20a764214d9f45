//! Feedback for a single guess against a known target

use crate::core::{Feedback, Variant, Word};
use crate::error::GameError;

/// Result of checking a guess
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub target: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Compute feedback for `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is malformed or the token lengths differ.
pub fn check_guess(target: &str, guess: &str, variant: Variant) -> Result<CheckResult, GameError> {
    let parse = |text: &str| {
        Word::new(text, variant).map_err(|reason| GameError::InvalidWord {
            word: text.to_string(),
            reason,
        })
    };
    let target = parse(target)?;
    let guess = parse(guess)?;

    if guess.len() != target.len() {
        return Err(GameError::WrongLength {
            expected: target.len(),
            actual: guess.len(),
        });
    }

    let feedback = Feedback::calculate(target.tokens(), guess.tokens());
    Ok(CheckResult {
        target,
        guess,
        feedback,
    })
}
