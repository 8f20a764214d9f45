//! Score a single word at a placement
//!
//! Shows how every token contributes and, for a given attempt, what a win
//! with this word would be worth.

use crate::core::{
    Multiplier, Placement, ScoreBreakdown, Token, Variant, Word, attempt_bonus, final_score,
    points, score_breakdown,
};
use crate::error::GameError;

/// One token on its square
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredToken {
    pub token: Token,
    /// Face value before any multiplier
    pub points: u32,
    pub multiplier: Multiplier,
}

impl ScoredToken {
    /// Value after the letter multiplier
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.points * self.multiplier.letter_factor()
    }
}

/// Bonus earned by winning on a given attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinBonus {
    pub attempt_index: usize,
    pub bonus: f64,
    pub final_score: u32,
}

/// Result of scoring a word
#[derive(Debug, Clone)]
pub struct ScoreReport {
    pub word: Word,
    pub placement: Placement,
    pub tokens: Vec<ScoredToken>,
    pub breakdown: ScoreBreakdown,
    pub win: Option<WinBonus>,
}

/// Score `text` at `placement`, optionally as a win on `attempt_index` (0-based)
///
/// # Errors
///
/// Returns `GameError::InvalidWord` if the text is not a playable word.
pub fn score_word(
    text: &str,
    variant: Variant,
    placement: Placement,
    attempt_index: Option<usize>,
) -> Result<ScoreReport, GameError> {
    let word = Word::new(text, variant).map_err(|reason| GameError::InvalidWord {
        word: text.to_string(),
        reason,
    })?;

    let window = placement.window(word.len());
    let tokens = word
        .tokens()
        .iter()
        .zip(window)
        .map(|(token, multiplier)| ScoredToken {
            token: token.clone(),
            points: points(token, variant),
            multiplier,
        })
        .collect();

    let breakdown = score_breakdown(word.tokens(), variant, placement);
    let win = attempt_index.map(|attempt_index| WinBonus {
        attempt_index,
        bonus: attempt_bonus(attempt_index),
        final_score: final_score(breakdown.raw, attempt_index),
    });

    Ok(ScoreReport {
        word,
        placement,
        tokens,
        breakdown,
        win,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_on_plain_squares() {
        let report = score_word("cat", Variant::English, Placement::new(4, 5), None).unwrap();
        assert_eq!(report.breakdown.raw, 5);
        assert_eq!(report.breakdown.word_multiplier, 1);
        assert!(report.win.is_none());

        let values: Vec<u32> = report.tokens.iter().map(ScoredToken::value).collect();
        assert_eq!(values, [3, 1, 1]);
    }

    #[test]
    fn letter_multiplier_shows_per_token() {
        // Q on the triple letter square at (1,5)
        let report = score_word("qi", Variant::English, Placement::new(1, 5), None).unwrap();
        assert_eq!(report.tokens[0].multiplier, Multiplier::TripleLetter);
        assert_eq!(report.tokens[0].value(), 30);
        assert_eq!(report.breakdown.raw, 31);
    }

    #[test]
    fn spanish_digraph_scores_as_one_token() {
        let report = score_word("churro", Variant::Spanish, Placement::new(4, 5), None).unwrap();
        let tokens: Vec<&str> = report.tokens.iter().map(|t| t.token.as_str()).collect();
        assert_eq!(tokens, ["CH", "U", "RR", "O"]);
        assert_eq!(report.breakdown.raw, 15);
    }

    #[test]
    fn win_bonus_applies_to_raw() {
        let report = score_word("cat", Variant::English, Placement::new(7, 7), Some(0)).unwrap();
        let win = report.win.unwrap();
        assert_eq!(report.breakdown.raw, 10);
        assert!((win.bonus - 3.0).abs() < f64::EPSILON);
        assert_eq!(win.final_score, 30);
    }

    #[test]
    fn invalid_word_rejected() {
        let result = score_word("c4t", Variant::English, Placement::new(0, 0), None);
        assert!(matches!(result, Err(GameError::InvalidWord { .. })));
    }
}
