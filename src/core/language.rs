//! Supported languages and their tokenization/scoring schemes

use std::fmt;
use std::str::FromStr;

/// Tokenization and letter-value scheme
///
/// `English` splits words into single characters. `Spanish` additionally treats
/// the digraphs CH, LL and RR as single tokens and uses the Spanish tile values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    English,
    Spanish,
}

/// A playable language: a dictionary plus the variant used to score it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// North American tournament list
    #[default]
    English,
    /// International (SOWPODS-style) list
    EnglishWorld,
    Spanish,
}

impl Language {
    /// All supported languages, in menu order
    pub const ALL: [Self; 3] = [Self::English, Self::EnglishWorld, Self::Spanish];

    /// Scoring and tokenization scheme for this language
    #[must_use]
    pub const fn variant(self) -> Variant {
        match self {
            Self::English | Self::EnglishWorld => Variant::English,
            Self::Spanish => Variant::Spanish,
        }
    }

    /// Short code accepted on the command line
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::EnglishWorld => "en-world",
            Self::Spanish => "es",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English (US)",
            Self::EnglishWorld => "English (World)",
            Self::Spanish => "Español",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "en-world" | "world" | "sowpods" => Ok(Self::EnglishWorld),
            "es" | "spanish" | "español" => Ok(Self::Spanish),
            _ => Err(format!("Unknown language '{s}' (expected en, en-world or es)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_languages_share_variant() {
        assert_eq!(Language::English.variant(), Variant::English);
        assert_eq!(Language::EnglishWorld.variant(), Variant::English);
        assert_eq!(Language::Spanish.variant(), Variant::Spanish);
    }

    #[test]
    fn parse_codes() {
        for language in Language::ALL {
            assert_eq!(language.code().parse::<Language>(), Ok(language));
        }
        assert_eq!("ES".parse::<Language>(), Ok(Language::Spanish));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }
}
