//! Puzzle selection
//!
//! A puzzle is the target word, where it sits on the board, and which of its
//! positions are revealed up front. Randomness comes from an injected RNG so a
//! seeded generator reproduces the same puzzles.

use crate::core::{BOARD_SIZE, Placement, Word};
use crate::error::GameError;
use crate::wordlists::Dictionary;
use rand::Rng;
use rand::seq::index;

/// Most tokens a player has to find without help; longer targets get hints
pub const MAX_HIDDEN_TOKENS: usize = 7;

/// Everything fixed at the start of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    target: Word,
    placement: Placement,
    hints: Vec<usize>,
}

impl Puzzle {
    /// A puzzle with no revealed positions
    #[must_use]
    pub const fn new(target: Word, placement: Placement) -> Self {
        Self {
            target,
            placement,
            hints: Vec::new(),
        }
    }

    /// Reveal the given positions; out-of-range and repeated positions are dropped
    #[must_use]
    pub fn with_hints(mut self, mut hints: Vec<usize>) -> Self {
        hints.retain(|&position| position < self.target.len());
        hints.sort_unstable();
        hints.dedup();
        self.hints = hints;
        self
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    /// Revealed positions, ascending
    #[inline]
    #[must_use]
    pub fn hints(&self) -> &[usize] {
        &self.hints
    }

    #[must_use]
    pub fn is_hint(&self, position: usize) -> bool {
        self.hints.binary_search(&position).is_ok()
    }
}

/// Produces puzzles for new games
pub trait WordSource {
    /// Select the next puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if no target word can be produced.
    fn next_puzzle(&mut self) -> Result<Puzzle, GameError>;
}

/// Decides whether a guess is an acceptable word
pub trait WordValidator {
    fn is_valid(&self, word: &Word) -> bool;
}

/// Validator for free play: every well-formed word is accepted
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl WordValidator for AcceptAll {
    fn is_valid(&self, _word: &Word) -> bool {
        true
    }
}

/// Random placement for a word of `length` tokens that never overruns the board
pub fn random_placement<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Placement {
    let row = rng.random_range(0..BOARD_SIZE);
    let start_column = rng.random_range(0..=BOARD_SIZE.saturating_sub(length));
    Placement::new(row, start_column)
}

/// Random distinct positions to reveal so at most `MAX_HIDDEN_TOKENS` remain
pub fn random_hints<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Vec<usize> {
    let count = length.saturating_sub(MAX_HIDDEN_TOKENS);
    if count == 0 {
        return Vec::new();
    }
    let mut hints = index::sample(rng, length, count).into_vec();
    hints.sort_unstable();
    hints
}

/// Draws random puzzles from a dictionary
pub struct DictionarySource<'a, R> {
    dictionary: &'a Dictionary,
    rng: R,
}

impl<'a, R: Rng> DictionarySource<'a, R> {
    pub const fn new(dictionary: &'a Dictionary, rng: R) -> Self {
        Self { dictionary, rng }
    }
}

impl<R: Rng> WordSource for DictionarySource<'_, R> {
    fn next_puzzle(&mut self) -> Result<Puzzle, GameError> {
        let target = self
            .dictionary
            .random_word(&mut self.rng)
            .ok_or_else(|| GameError::EmptyDictionary(self.dictionary.language().to_string()))?
            .clone();

        let placement = random_placement(target.len(), &mut self.rng);
        let hints = random_hints(target.len(), &mut self.rng);

        tracing::debug!(
            length = target.len(),
            row = placement.row,
            column = placement.start_column,
            hints = hints.len(),
            "selected puzzle"
        );

        Ok(Puzzle::new(target, placement).with_hints(hints))
    }
}

/// Always yields the same puzzle
#[derive(Debug, Clone)]
pub struct FixedSource {
    puzzle: Puzzle,
}

impl FixedSource {
    #[must_use]
    pub const fn new(puzzle: Puzzle) -> Self {
        Self { puzzle }
    }
}

impl WordSource for FixedSource {
    fn next_puzzle(&mut self) -> Result<Puzzle, GameError> {
        Ok(self.puzzle.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Language, Variant};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn placement_always_fits() {
        let mut rng = StdRng::seed_from_u64(1);
        for length in 2..=15 {
            for _ in 0..100 {
                let placement = random_placement(length, &mut rng);
                assert!(placement.fits(length), "{placement} overruns for {length}");
            }
        }
    }

    #[test]
    fn full_row_starts_at_first_column() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..20 {
            assert_eq!(random_placement(15, &mut rng).start_column, 0);
        }
    }

    #[test]
    fn short_words_get_no_hints() {
        let mut rng = StdRng::seed_from_u64(3);
        for length in 2..=MAX_HIDDEN_TOKENS {
            assert!(random_hints(length, &mut rng).is_empty());
        }
    }

    #[test]
    fn long_words_leave_seven_hidden() {
        let mut rng = StdRng::seed_from_u64(4);
        for length in 8..=15 {
            let hints = random_hints(length, &mut rng);
            assert_eq!(hints.len(), length - MAX_HIDDEN_TOKENS);
            assert!(hints.windows(2).all(|pair| pair[0] < pair[1]));
            assert!(hints.iter().all(|&position| position < length));
        }
    }

    #[test]
    fn with_hints_normalizes() {
        let target = Word::new("elephant", Variant::English).unwrap();
        let puzzle = Puzzle::new(target, Placement::new(0, 0)).with_hints(vec![5, 1, 5, 40]);
        assert_eq!(puzzle.hints(), [1, 5]);
        assert!(puzzle.is_hint(5));
        assert!(!puzzle.is_hint(0));
    }

    #[test]
    fn dictionary_source_is_reproducible() {
        let dictionary = Dictionary::embedded(Language::Spanish).unwrap();
        let mut first = DictionarySource::new(&dictionary, StdRng::seed_from_u64(9));
        let mut second = DictionarySource::new(&dictionary, StdRng::seed_from_u64(9));

        for _ in 0..10 {
            assert_eq!(first.next_puzzle().unwrap(), second.next_puzzle().unwrap());
        }
    }

    #[test]
    fn dictionary_source_puzzles_are_consistent() {
        let dictionary = Dictionary::embedded(Language::English).unwrap();
        let mut source = DictionarySource::new(&dictionary, StdRng::seed_from_u64(11));

        for _ in 0..100 {
            let puzzle = source.next_puzzle().unwrap();
            let length = puzzle.target().len();
            assert!(dictionary.contains(puzzle.target().text()));
            assert!(puzzle.placement().fits(length));
            assert_eq!(
                puzzle.hints().len(),
                length.saturating_sub(MAX_HIDDEN_TOKENS)
            );
        }
    }

    #[test]
    fn fixed_source_repeats() {
        let target = Word::new("crane", Variant::English).unwrap();
        let puzzle = Puzzle::new(target, Placement::new(7, 5));
        let mut source = FixedSource::new(puzzle.clone());
        assert_eq!(source.next_puzzle().unwrap(), puzzle);
        assert_eq!(source.next_puzzle().unwrap(), puzzle);
    }

    #[test]
    fn accept_all_accepts() {
        let word = Word::new("zzzz", Variant::English).unwrap();
        assert!(AcceptAll.is_valid(&word));
    }
}
