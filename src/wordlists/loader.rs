//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::{Variant, Word};
use crate::error::GameError;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Returns valid Word instances for `variant`, skipping blank lines, comment
/// lines starting with `#`, and entries that are not playable words.
///
/// # Errors
///
/// Returns `GameError::DictionaryRead` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use anagramle::core::Variant;
/// use anagramle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("dict/fise-2.txt", Variant::Spanish).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, variant: Variant) -> Result<Vec<Word>, GameError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GameError::DictionaryRead {
        path: path.display().to_string(),
        source,
    })?;

    Ok(words_from_lines(content.lines(), variant))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use anagramle::core::Variant;
/// use anagramle::wordlists::loader::words_from_slice;
/// use anagramle::wordlists::ENGLISH;
///
/// let words = words_from_slice(ENGLISH, Variant::English);
/// assert_eq!(words.len(), ENGLISH.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], variant: Variant) -> Vec<Word> {
    words_from_lines(slice.iter().copied(), variant)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>, variant: Variant) -> Vec<Word> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| Word::new(line, variant).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input, Variant::English);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "a", "thisiswaytoolongtoplay", "c4t", "slate", ""];
        let words = words_from_slice(input, Variant::English);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_uses_token_length() {
        // 16 letters, but 15 tokens in Spanish
        let input = &["chaaaaaaaaaaaaaa"];
        assert!(words_from_slice(input, Variant::English).is_empty());
        assert_eq!(words_from_slice(input, Variant::Spanish).len(), 1);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input, Variant::English).is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# comment\ncasa\n\n  perro  \nx").unwrap();

        let words = load_from_file(file.path(), Variant::Spanish).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CASA", "PERRO"]);
    }

    #[test]
    fn load_from_missing_file() {
        let result = load_from_file("/definitely/not/here.txt", Variant::English);
        assert!(matches!(result, Err(GameError::DictionaryRead { .. })));
    }
}
