use crate::core::WordError;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors returned by the dictionary, word source and game session
pub enum GameError {
    /// Error reading a dictionary file
    #[error("Dictionary \"{path}\" could not be read")]
    DictionaryRead {
        path: String,
        source: std::io::Error,
    },

    /// No playable words were found for the language
    #[error("Dictionary for {0} has no playable words")]
    EmptyDictionary(String),

    /// The text is not a well-formed word
    #[error("Invalid word \"{word}\": {reason}")]
    InvalidWord { word: String, reason: WordError },

    /// A guess with the wrong number of tokens
    #[error("Guess must be {expected} letters long, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// The dictionary rejected the guess
    #[error("Word not in dictionary: {0}")]
    NotInDictionary(String),

    /// The game has already been won or lost
    #[error("The game is over")]
    GameOver,
}
