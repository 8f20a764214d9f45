//! Placement analysis command
//!
//! Scores every dictionary word of a given length at one placement and ranks
//! them, the best possible targets for that spot on the board.

use crate::core::{Multiplier, Placement, ScoreBreakdown, score_breakdown};
use crate::wordlists::Dictionary;
use rayon::prelude::*;

/// A dictionary word with its score at the analyzed placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub breakdown: ScoreBreakdown,
}

/// Result of analyzing a placement
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub placement: Placement,
    pub length: usize,
    pub window: Vec<Multiplier>,
    pub total_candidates: usize,
    pub average_score: f64,
    /// Highest raw scores first
    pub best: Vec<ScoredWord>,
}

/// Rank the dictionary words of `length` tokens by raw score at `placement`
#[must_use]
pub fn analyze_placement(
    dictionary: &Dictionary,
    placement: Placement,
    length: usize,
    top: usize,
) -> AnalysisResult {
    let variant = dictionary.variant();
    let words = dictionary.words_of_length(length);

    let mut scored: Vec<ScoredWord> = words
        .par_iter()
        .map(|word| ScoredWord {
            word: word.text().to_string(),
            breakdown: score_breakdown(word.tokens(), variant, placement),
        })
        .collect();

    let total: u64 = scored.iter().map(|s| u64::from(s.breakdown.raw)).sum();
    let average_score = if scored.is_empty() {
        0.0
    } else {
        total as f64 / scored.len() as f64
    };

    scored.par_sort_unstable_by(|a, b| {
        b.breakdown
            .raw
            .cmp(&a.breakdown.raw)
            .then_with(|| a.word.cmp(&b.word))
    });
    scored.truncate(top);

    AnalysisResult {
        placement,
        length,
        window: placement.window(length),
        total_candidates: words.len(),
        average_score,
        best: scored,
    }
}
