//! Scrabble letter values
//!
//! One static table per variant. Unknown tokens are worth nothing rather
//! than being an error, so a stray dictionary entry never breaks scoring.

use super::Variant;
use super::token::Token;

/// token label, points
pub type LetterValue = (&'static str, u32);

#[rustfmt::skip]
const ENGLISH: &[LetterValue] = &[
    ("A", 1), ("E", 1), ("I", 1), ("O", 1), ("U", 1),
    ("L", 1), ("N", 1), ("S", 1), ("T", 1), ("R", 1),
    ("D", 2), ("G", 2),
    ("B", 3), ("C", 3), ("M", 3), ("P", 3),
    ("F", 4), ("H", 4), ("V", 4), ("W", 4), ("Y", 4),
    ("K", 5),
    ("J", 8), ("X", 8),
    ("Q", 10), ("Z", 10),
];

#[rustfmt::skip]
const SPANISH: &[LetterValue] = &[
    ("A", 1), ("E", 1), ("O", 1), ("I", 1), ("S", 1),
    ("N", 1), ("L", 1), ("R", 1), ("U", 1), ("T", 1),
    ("D", 2), ("G", 2), ("C", 2),
    ("B", 3), ("M", 3), ("P", 3),
    ("H", 4), ("F", 4), ("V", 4), ("Y", 4),
    ("Q", 5), ("CH", 5),
    ("J", 8), ("Ñ", 8), ("X", 8), ("LL", 8), ("RR", 8),
    ("Z", 10),
];

/// The full letter-value table for a variant, in display order
#[must_use]
pub const fn table(variant: Variant) -> &'static [LetterValue] {
    match variant {
        Variant::English => ENGLISH,
        Variant::Spanish => SPANISH,
    }
}

/// Points for a token text, or 0 if the token is not in the table
#[must_use]
pub fn points_of(token: &str, variant: Variant) -> u32 {
    table(variant)
        .iter()
        .find(|(label, _)| *label == token)
        .map_or(0, |&(_, points)| points)
}

/// Points for a token, or 0 if the token is not in the table
///
/// # Examples
/// ```
/// use anagramle::core::{points, Token, Variant};
///
/// assert_eq!(points(&Token::new("q"), Variant::English), 10);
/// assert_eq!(points(&Token::new("ch"), Variant::Spanish), 5);
/// assert_eq!(points(&Token::new("ch"), Variant::English), 0);
/// ```
#[must_use]
pub fn points(token: &Token, variant: Variant) -> u32 {
    points_of(token.as_str(), variant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenize;

    #[test]
    fn english_values() {
        let cases = [
            ("A", 1),
            ("R", 1),
            ("D", 2),
            ("M", 3),
            ("W", 4),
            ("K", 5),
            ("X", 8),
            ("Z", 10),
        ];
        for (token, expected) in cases {
            assert_eq!(points_of(token, Variant::English), expected, "{token}");
        }
    }

    #[test]
    fn spanish_values() {
        let cases = [
            ("C", 2),
            ("Q", 5),
            ("CH", 5),
            ("Ñ", 8),
            ("LL", 8),
            ("RR", 8),
            ("Z", 10),
        ];
        for (token, expected) in cases {
            assert_eq!(points_of(token, Variant::Spanish), expected, "{token}");
        }
    }

    #[test]
    fn spanish_table_has_no_k_or_w() {
        assert_eq!(points_of("K", Variant::Spanish), 0);
        assert_eq!(points_of("W", Variant::Spanish), 0);
    }

    #[test]
    fn unknown_tokens_score_zero() {
        assert_eq!(points_of("", Variant::English), 0);
        assert_eq!(points_of("7", Variant::English), 0);
        assert_eq!(points_of("Ñ", Variant::English), 0);
        assert_eq!(points_of("a", Variant::English), 0); // tables are uppercase
    }

    #[test]
    fn every_table_entry_in_range() {
        for variant in [Variant::English, Variant::Spanish] {
            for &(label, value) in table(variant) {
                assert!((1..=10).contains(&value), "{label} = {value}");
            }
        }
        assert_eq!(table(Variant::English).len(), 26);
        assert_eq!(table(Variant::Spanish).len(), 28);
    }

    #[test]
    fn tokens_from_tokenizer_are_found() {
        let total: u32 = tokenize("churro", Variant::Spanish)
            .iter()
            .map(|t| points(t, Variant::Spanish))
            .sum();
        // CH(5) + U(1) + RR(8) + O(1)
        assert_eq!(total, 15);
    }
}
