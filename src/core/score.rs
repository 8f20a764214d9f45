//! Scrabble-style scoring
//!
//! A guess is scored as if laid on the board at the session's placement:
//! letter multipliers apply per token, word multipliers compound and apply
//! once to the letter total. A winning guess additionally earns a bonus that
//! shrinks with every attempt used.

use super::board::Placement;
use super::letters::points;
use super::token::Token;
use super::Variant;

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// How a raw score was put together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    /// Sum of token points after letter multipliers
    pub letter_total: u32,
    /// Product of all word multipliers under the word
    pub word_multiplier: u32,
    /// `letter_total * word_multiplier`
    pub raw: u32,
}

/// Score `tokens` laid on the board at `placement`
///
/// # Examples
/// ```
/// use anagramle::core::{score_breakdown, tokenize, Placement, Variant};
///
/// // Q on the triple-word square at (0, 0), Z on the double letter at (0, 3)
/// let tokens = tokenize("quiz", Variant::English);
/// let breakdown = score_breakdown(&tokens, Variant::English, Placement::new(0, 0));
/// assert_eq!(breakdown.word_multiplier, 3);
/// ```
#[must_use]
pub fn score_breakdown(tokens: &[Token], variant: Variant, placement: Placement) -> ScoreBreakdown {
    let window = placement.window(tokens.len());
    let mut letter_total = 0;
    let mut word_multiplier = 1;

    for (token, multiplier) in tokens.iter().zip(&window) {
        letter_total += points(token, variant) * multiplier.letter_factor();
        word_multiplier *= multiplier.word_factor();
    }

    ScoreBreakdown {
        letter_total,
        word_multiplier,
        raw: letter_total * word_multiplier,
    }
}

/// Raw score of `tokens` at `placement`, before any attempt bonus
#[must_use]
pub fn raw_score(tokens: &[Token], variant: Variant, placement: Placement) -> u32 {
    score_breakdown(tokens, variant, placement).raw
}

/// Bonus multiplier for winning on `attempt_index` (0-based)
///
/// 3.0 for the first attempt, dropping by 0.5 per attempt to 0.5 on the
/// sixth. Indices outside the attempt budget earn nothing.
#[must_use]
pub fn attempt_bonus(attempt_index: usize) -> f64 {
    f64::from(bonus_halves(attempt_index)) / 2.0
}

/// Bonus expressed in halves: 6 for the first attempt down to 1
fn bonus_halves(attempt_index: usize) -> u32 {
    if attempt_index < MAX_ATTEMPTS {
        (MAX_ATTEMPTS - attempt_index) as u32
    } else {
        0
    }
}

/// Final score for a win on `attempt_index`: `raw * bonus`, rounded half up
///
/// Computed in half-units so the rounding is exact. Saturates at `u32::MAX`.
///
/// # Examples
/// ```
/// use anagramle::core::final_score;
///
/// assert_eq!(final_score(10, 0), 30);
/// assert_eq!(final_score(7, 5), 4);
/// ```
#[must_use]
pub fn final_score(raw: u32, attempt_index: usize) -> u32 {
    let halves = u64::from(raw) * u64::from(bonus_halves(attempt_index));
    u32::try_from(halves.div_ceil(2)).unwrap_or(u32::MAX)
}
