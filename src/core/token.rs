//! Word tokenization
//!
//! A token is the unit that is compared and scored. English words have one
//! token per letter. Spanish words treat the digraphs CH, LL and RR as a single
//! token, so `"CALLE"` is four tokens long: `C A LL E`.

use super::Variant;
use rustc_hash::FxHashMap;
use std::fmt;

/// Two-letter sequences that form a single Spanish token
pub const DIGRAPHS: [&str; 3] = ["CH", "LL", "RR"];

/// A single scoring unit (one letter or one digraph), always uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(String);

impl Token {
    /// Create a token from its text, normalizing to uppercase
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self(text.to_uppercase())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<char> for Token {
    fn from(c: char) -> Self {
        Self(c.to_uppercase().collect())
    }
}

/// Split a word into tokens for the given variant
///
/// Never fails; an empty word yields no tokens.
///
/// # Examples
/// ```
/// use anagramle::core::{tokenize, Variant};
///
/// let tokens = tokenize("calle", Variant::Spanish);
/// let text: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
/// assert_eq!(text, ["C", "A", "LL", "E"]);
///
/// assert_eq!(tokenize("calle", Variant::English).len(), 5);
/// ```
#[must_use]
pub fn tokenize(word: &str, variant: Variant) -> Vec<Token> {
    match variant {
        Variant::English => word.chars().map(Token::from).collect(),
        Variant::Spanish => tokenize_digraphs(word),
    }
}

/// Token count of a word, the canonical word length used for bucketing and
/// guess validation
#[must_use]
pub fn token_len(word: &str, variant: Variant) -> usize {
    tokenize(word, variant).len()
}

fn tokenize_digraphs(word: &str) -> Vec<Token> {
    let chars: Vec<char> = word.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if let Some(&next) = chars.get(i + 1) {
            let pair: String = [chars[i], next]
                .iter()
                .flat_map(|c| c.to_uppercase())
                .collect();
            if DIGRAPHS.contains(&pair.as_str()) {
                tokens.push(Token(pair));
                i += 2;
                continue;
            }
        }
        tokens.push(Token::from(chars[i]));
        i += 1;
    }

    tokens
}

/// Count the occurrences of each token
#[must_use]
pub fn token_counts(tokens: &[Token]) -> FxHashMap<&Token, usize> {
    let mut counts = FxHashMap::default();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

/// Join tokens back into their uppercase text
#[must_use]
pub fn join(tokens: &[Token]) -> String {
    tokens.iter().map(Token::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn english_one_token_per_char() {
        let tokens = tokenize("chill", Variant::English);
        assert_eq!(texts(&tokens), ["C", "H", "I", "L", "L"]);
    }

    #[test]
    fn spanish_digraphs() {
        assert_eq!(
            texts(&tokenize("CHURRO", Variant::Spanish)),
            ["CH", "U", "RR", "O"]
        );
        assert_eq!(
            texts(&tokenize("llave", Variant::Spanish)),
            ["LL", "A", "V", "E"]
        );
    }

    #[test]
    fn spanish_digraphs_case_insensitive() {
        assert_eq!(texts(&tokenize("cH", Variant::Spanish)), ["CH"]);
        assert_eq!(texts(&tokenize("Ll", Variant::Spanish)), ["LL"]);
    }

    #[test]
    fn spanish_greedy_left_to_right() {
        // LLL scans as LL then L
        assert_eq!(texts(&tokenize("LLL", Variant::Spanish)), ["LL", "L"]);
        // RRR likewise
        assert_eq!(texts(&tokenize("ARRR", Variant::Spanish)), ["A", "RR", "R"]);
    }

    #[test]
    fn spanish_enye_uppercased() {
        assert_eq!(texts(&tokenize("niño", Variant::Spanish)), ["N", "I", "Ñ", "O"]);
    }

    #[test]
    fn empty_word() {
        assert!(tokenize("", Variant::English).is_empty());
        assert!(tokenize("", Variant::Spanish).is_empty());
    }

    #[test]
    fn tokenize_is_idempotent_and_never_longer() {
        for word in ["perro", "chorrillo", "calle", "hello", "a", "rrrr", "chch"] {
            for variant in [Variant::English, Variant::Spanish] {
                let first = tokenize(word, variant);
                let second = tokenize(word, variant);
                assert_eq!(first, second);
                assert!(first.len() <= word.chars().count());

                // Re-tokenizing the joined text gives the same tokens
                assert_eq!(tokenize(&join(&first), variant), first);
            }
        }
    }

    #[test]
    fn token_len_counts_digraphs_once() {
        assert_eq!(token_len("chorrillo", Variant::Spanish), 6);
        assert_eq!(token_len("chorrillo", Variant::English), 9);
    }

    #[test]
    fn token_properties() {
        let ch = Token::new("ch");
        assert_eq!(ch.as_str(), "CH");
        assert_eq!(Token::from('ñ').as_str(), "Ñ");
        assert_eq!(format!("{ch}"), "CH");
    }

    #[test]
    fn counts_digraphs_as_single_tokens() {
        let tokens = tokenize("chorrillo", Variant::Spanish);
        let counts = token_counts(&tokens);
        assert_eq!(counts.get(&Token::new("ll")), Some(&1));
        assert_eq!(counts.get(&Token::new("o")), Some(&2));
        assert_eq!(counts.get(&Token::new("l")), None);
        assert_eq!(counts.len(), 5);
    }
}
