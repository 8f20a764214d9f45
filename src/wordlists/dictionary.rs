//! Dictionary lookup and random word selection
//!
//! A dictionary is built once per language and never mutated afterwards.
//! Words are bucketed by token length so that a random target can be drawn
//! uniformly over lengths first, then over the words of that length.

use super::embedded::{ENGLISH, ENGLISH_WORLD, SPANISH};
use super::loader::{load_from_file, words_from_slice};
use crate::core::{Language, Variant, Word};
use crate::error::GameError;
use crate::game::WordValidator;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::path::Path;

/// Immutable word set for one language
#[derive(Debug, Clone)]
pub struct Dictionary {
    language: Language,
    words: FxHashSet<String>,
    by_length: BTreeMap<usize, Vec<Word>>,
}

impl Dictionary {
    /// Build a dictionary from already tokenized words
    ///
    /// Duplicates are dropped. Words tokenized for another variant are
    /// re-tokenized for this language.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyDictionary` if no words remain.
    pub fn new(
        language: Language,
        words: impl IntoIterator<Item = Word>,
    ) -> Result<Self, GameError> {
        let variant = language.variant();
        let mut set = FxHashSet::default();
        let mut by_length: BTreeMap<usize, Vec<Word>> = BTreeMap::new();

        for word in words {
            let word = if word.variant() == variant {
                word
            } else {
                match Word::new(word.text(), variant) {
                    Ok(word) => word,
                    Err(_) => continue,
                }
            };

            if set.insert(word.text().to_string()) {
                by_length.entry(word.len()).or_default().push(word);
            }
        }

        if set.is_empty() {
            return Err(GameError::EmptyDictionary(language.name().to_string()));
        }

        tracing::info!(
            language = language.code(),
            words = set.len(),
            lengths = by_length.len(),
            "loaded dictionary"
        );

        Ok(Self {
            language,
            words: set,
            by_length,
        })
    }

    /// Build the dictionary compiled into the binary
    ///
    /// The international English list includes the North American one.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyDictionary` if the embedded list is empty.
    pub fn embedded(language: Language) -> Result<Self, GameError> {
        let variant = language.variant();
        let words = match language {
            Language::English => words_from_slice(ENGLISH, variant),
            Language::EnglishWorld => {
                let mut words = words_from_slice(ENGLISH, variant);
                words.extend(words_from_slice(ENGLISH_WORLD, variant));
                words
            }
            Language::Spanish => words_from_slice(SPANISH, variant),
        };
        Self::new(language, words)
    }

    /// Build a dictionary from a word file (one word per line)
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no playable words.
    pub fn from_file<P: AsRef<Path>>(language: Language, path: P) -> Result<Self, GameError> {
        let words = load_from_file(path, language.variant())?;
        Self::new(language, words)
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[inline]
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.language.variant()
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test
    ///
    /// # Examples
    /// ```
    /// use anagramle::core::Language;
    /// use anagramle::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded(Language::English).unwrap();
    /// assert!(dictionary.contains("crane"));
    /// assert!(!dictionary.contains("qwzxv"));
    /// ```
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.contains(&text.trim().to_uppercase())
    }

    /// Available token lengths with the number of words of each length
    pub fn lengths(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.by_length.iter().map(|(&len, words)| (len, words.len()))
    }

    /// All words of exactly `length` tokens
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[Word] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// All words, shortest first
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.by_length.values().flatten()
    }

    /// Pick a random word: a random length first, then a random word of it
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        let lengths: Vec<usize> = self.by_length.keys().copied().collect();
        let length = lengths.choose(rng)?;
        self.words_of_length(*length).choose(rng)
    }
}

impl WordValidator for Dictionary {
    fn is_valid(&self, word: &Word) -> bool {
        self.contains(word.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::new(
            Language::English,
            words_from_slice(words, Variant::English),
        )
        .unwrap()
    }

    #[test]
    fn embedded_dictionaries_load() {
        for language in Language::ALL {
            let dictionary = Dictionary::embedded(language).unwrap();
            assert!(!dictionary.is_empty());
            assert_eq!(dictionary.language(), language);
        }
    }

    #[test]
    fn world_list_extends_english() {
        let english = Dictionary::embedded(Language::English).unwrap();
        let world = Dictionary::embedded(Language::EnglishWorld).unwrap();

        assert!(world.len() > english.len());
        assert!(english.words().all(|w| world.contains(w.text())));
        assert!(world.contains("colour"));
        assert!(!english.contains("colour"));
    }

    #[test]
    fn embedded_lists_cover_common_words() {
        let english = Dictionary::embedded(Language::English).unwrap();
        for word in ["water", "table", "apple", "there", "world", "house", "crane"] {
            assert!(english.contains(word), "{word} missing from English");
        }

        let spanish = Dictionary::embedded(Language::Spanish).unwrap();
        for word in ["agua", "mesa", "casa", "calle", "perro", "niño"] {
            assert!(spanish.contains(word), "{word} missing from Spanish");
        }

        assert!(english.len() > 50_000);
        assert!(spanish.len() > 20_000);
    }

    #[test]
    fn contains_is_case_insensitive() {
        let dictionary = dictionary(&["crane", "slate"]);
        assert!(dictionary.contains("CRANE"));
        assert!(dictionary.contains("Slate"));
        assert!(dictionary.contains(" crane "));
        assert!(!dictionary.contains("irate"));
    }

    #[test]
    fn duplicates_are_dropped() {
        let dictionary = dictionary(&["crane", "CRANE", "Crane"]);
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.words_of_length(5).len(), 1);
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        let result = Dictionary::new(Language::English, Vec::new());
        assert!(matches!(result, Err(GameError::EmptyDictionary(_))));
    }

    #[test]
    fn spanish_buckets_by_token_length() {
        let words = words_from_slice(&["calle", "perro", "casas"], Variant::Spanish);
        let dictionary = Dictionary::new(Language::Spanish, words).unwrap();

        let lengths: Vec<(usize, usize)> = dictionary.lengths().collect();
        // CALLE and PERRO are four tokens, CASAS is five
        assert_eq!(lengths, [(4, 2), (5, 1)]);
    }

    #[test]
    fn words_retokenized_for_language() {
        // Tokenized as English (5 tokens) but added to a Spanish dictionary
        let words = words_from_slice(&["calle"], Variant::English);
        let dictionary = Dictionary::new(Language::Spanish, words).unwrap();
        assert_eq!(dictionary.words_of_length(4).len(), 1);
        assert!(dictionary.words_of_length(5).is_empty());
    }

    #[test]
    fn embedded_words_are_playable_lengths() {
        for language in Language::ALL {
            let dictionary = Dictionary::embedded(language).unwrap();
            for (length, count) in dictionary.lengths() {
                assert!((2..=15).contains(&length));
                assert!(count > 0);
            }
        }
    }

    #[test]
    fn random_word_comes_from_dictionary() {
        let dictionary = Dictionary::embedded(Language::Spanish).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let word = dictionary.random_word(&mut rng).unwrap();
            assert!(dictionary.contains(word.text()));
            assert_eq!(word.variant(), Variant::Spanish);
        }
    }

    #[test]
    fn random_word_covers_every_length() {
        let dictionary = dictionary(&["ox", "cat", "dogs"]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = FxHashSet::default();
        for _ in 0..200 {
            seen.insert(dictionary.random_word(&mut rng).unwrap().len());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn validator_uses_membership() {
        let dictionary = dictionary(&["crane"]);
        let guess = Word::new("crane", Variant::English).unwrap();
        let other = Word::new("slate", Variant::English).unwrap();
        assert!(dictionary.is_valid(&guess));
        assert!(!dictionary.is_valid(&other));
    }
}
