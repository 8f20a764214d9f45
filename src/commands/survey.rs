//! Dictionary survey
//!
//! Scores every dictionary word at every placement where it fits and collects
//! statistics on how much the board and the word length matter.

use crate::core::{BOARD_SIZE, Placement, Word, raw_score};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Scores of one word across all of its placements
#[derive(Debug, Clone)]
pub struct WordSurvey {
    pub word: String,
    pub length: usize,
    pub placements: usize,
    pub min_score: u32,
    pub max_score: u32,
    pub best_placement: Placement,
    pub average_score: f64,
}

/// Per-length summary
#[derive(Debug, Clone, Default)]
pub struct LengthSummary {
    pub words: usize,
    pub average_score: f64,
    pub best: Option<(String, u32)>,
}

/// Statistics over the surveyed words
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_words: usize,
    pub placements_scored: usize,
    pub average_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub best: Option<(String, Placement, u32)>,
    pub by_length: BTreeMap<usize, LengthSummary>,
    /// Words with the widest spread between their best and worst placement
    pub most_board_sensitive: Vec<(String, u32, u32)>,
    pub total_time: Duration,
}

/// Every placement where a word of `length` tokens fits on the board
pub fn valid_placements(length: usize) -> impl Iterator<Item = Placement> {
    let columns = (BOARD_SIZE + 1).saturating_sub(length);
    (0..BOARD_SIZE)
        .flat_map(move |row| (0..columns).map(move |column| Placement::new(row, column)))
}

/// Score one word at all of its placements
#[must_use]
pub fn survey_word(word: &Word) -> WordSurvey {
    let mut placements = 0;
    let mut total = 0_u64;
    let mut min_score = u32::MAX;
    let mut max_score = 0;
    let mut best_placement = Placement::default();

    for placement in valid_placements(word.len()) {
        let score = raw_score(word.tokens(), word.variant(), placement);
        placements += 1;
        total += u64::from(score);
        min_score = min_score.min(score);
        if score > max_score {
            max_score = score;
            best_placement = placement;
        }
    }

    WordSurvey {
        word: word.text().to_string(),
        length: word.len(),
        placements,
        min_score: if placements == 0 { 0 } else { min_score },
        max_score,
        best_placement,
        average_score: if placements == 0 {
            0.0
        } else {
            total as f64 / placements as f64
        },
    }
}

/// Survey the dictionary (or its first `limit` words)
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
#[must_use]
pub fn run_survey(dictionary: &Dictionary, limit: Option<usize>) -> SurveyStatistics {
    let words: Vec<&Word> = dictionary
        .words()
        .take(limit.unwrap_or(dictionary.len()))
        .collect();

    println!("🎯 Surveying {} words...", words.len());

    let pb = ProgressBar::new(words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let results: Vec<WordSurvey> = words
        .par_iter()
        .map(|word| {
            let survey = survey_word(word);
            pb.inc(1);
            survey
        })
        .collect();
    pb.finish_with_message("Complete!");

    tracing::info!(words = results.len(), "survey finished");

    summarize(results, start.elapsed())
}

fn summarize(results: Vec<WordSurvey>, total_time: Duration) -> SurveyStatistics {
    let placements_scored = results.iter().map(|r| r.placements).sum();
    let average_score = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|r| r.average_score).sum::<f64>() / results.len() as f64
    };
    let min_score = results.iter().map(|r| r.min_score).min().unwrap_or(0);
    let max_score = results.iter().map(|r| r.max_score).max().unwrap_or(0);

    let best = results
        .iter()
        .max_by(|a, b| {
            a.max_score
                .cmp(&b.max_score)
                .then_with(|| b.word.cmp(&a.word))
        })
        .map(|r| (r.word.clone(), r.best_placement, r.max_score));

    let mut by_length: BTreeMap<usize, LengthSummary> = BTreeMap::new();
    for result in &results {
        let summary = by_length.entry(result.length).or_default();
        summary.words += 1;
        summary.average_score += result.average_score;
        if summary
            .best
            .as_ref()
            .is_none_or(|(_, score)| result.max_score > *score)
        {
            summary.best = Some((result.word.clone(), result.max_score));
        }
    }
    for summary in by_length.values_mut() {
        summary.average_score /= summary.words as f64;
    }

    let mut most_board_sensitive: Vec<(String, u32, u32)> = results
        .iter()
        .map(|r| (r.word.clone(), r.min_score, r.max_score))
        .collect();
    most_board_sensitive.sort_by(|a, b| {
        (b.2 - b.1)
            .cmp(&(a.2 - a.1))
            .then_with(|| a.0.cmp(&b.0))
    });
    most_board_sensitive.truncate(10);

    SurveyStatistics {
        total_words: results.len(),
        placements_scored,
        average_score,
        min_score,
        max_score,
        best,
        by_length,
        most_board_sensitive,
        total_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Language, Variant};
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn placement_counts() {
        assert_eq!(valid_placements(15).count(), 15);
        assert_eq!(valid_placements(2).count(), 15 * 14);
        assert!(valid_placements(5).all(|p| p.fits(5)));
    }

    #[test]
    fn survey_finds_best_square() {
        let word = Word::new("zzzz", Variant::English).unwrap();
        let survey = survey_word(&word);
        assert_eq!(survey.placements, 15 * 12);
        assert!(survey.max_score >= 40);
        assert!(survey.min_score <= survey.max_score);
        assert!(survey.average_score >= f64::from(survey.min_score));
        assert_eq!(
            raw_score(word.tokens(), word.variant(), survey.best_placement),
            survey.max_score
        );
    }

    #[test]
    fn full_row_word_has_one_column() {
        let word = Word::new("aaaaaaaaaaaaaaa", Variant::English).unwrap();
        let survey = survey_word(&word);
        assert_eq!(survey.placements, 15);
        // Row 0 has three triple word squares: 17 * 27
        assert_eq!(survey.max_score, 459);
        assert_eq!(survey.best_placement, Placement::new(0, 0));
    }

    #[test]
    fn summary_groups_by_length() {
        let words = words_from_slice(&["cat", "zax", "crane"], Variant::English);
        let dictionary = Dictionary::new(Language::English, words).unwrap();
        let results: Vec<WordSurvey> = dictionary.words().map(survey_word).collect();
        let stats = summarize(results, Duration::ZERO);

        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.by_length[&3].words, 2);
        assert_eq!(stats.by_length[&5].words, 1);
        assert_eq!(stats.by_length[&3].best.as_ref().unwrap().0, "ZAX");
        assert_eq!(stats.best.as_ref().unwrap().0, "ZAX");
        assert!(stats.most_board_sensitive.len() <= 10);
    }

    #[test]
    fn survey_respects_limit() {
        let dictionary = Dictionary::embedded(Language::English).unwrap();
        let stats = run_survey(&dictionary, Some(5));
        assert_eq!(stats.total_words, 5);
    }
}
