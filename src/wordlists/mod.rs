//! Word lists and dictionaries
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! and the `Dictionary` built from them or from a file.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{
    ENGLISH, ENGLISH_COUNT, ENGLISH_WORLD, ENGLISH_WORLD_COUNT, SPANISH, SPANISH_COUNT,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Variant, token_len};

    #[test]
    fn counts_match_consts() {
        assert_eq!(ENGLISH.len(), ENGLISH_COUNT);
        assert_eq!(ENGLISH_WORLD.len(), ENGLISH_WORLD_COUNT);
        assert_eq!(SPANISH.len(), SPANISH_COUNT);
    }

    #[test]
    fn english_words_are_valid() {
        for &word in ENGLISH.iter().chain(ENGLISH_WORLD) {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
            let len = token_len(word, Variant::English);
            assert!((2..=15).contains(&len), "Word '{word}' has length {len}");
        }
    }

    #[test]
    fn spanish_words_are_valid() {
        for &word in SPANISH {
            assert!(
                word.chars().all(char::is_lowercase),
                "Word '{word}' contains non-lowercase chars"
            );
            let len = token_len(word, Variant::Spanish);
            assert!((2..=15).contains(&len), "Word '{word}' has length {len}");
        }
    }

    #[test]
    fn spanish_list_exercises_digraphs() {
        let with_digraphs = SPANISH
            .iter()
            .copied()
            .filter(|word| token_len(word, Variant::Spanish) < word.chars().count())
            .count();
        assert!(with_digraphs >= 10);
    }

    #[test]
    fn world_additions_not_in_north_american_list() {
        let english: std::collections::HashSet<_> = ENGLISH.iter().collect();
        for word in ENGLISH_WORLD {
            assert!(!english.contains(word), "'{word}' is already in ENGLISH");
        }
    }
}
