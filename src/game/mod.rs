//! Game flow: puzzle selection and the attempt loop
//!
//! The dictionary and the RNG are injected; nothing here is global.

mod session;
mod source;

pub use session::{Attempt, Outcome, Session};
pub use source::{
    AcceptAll, DictionarySource, FixedSource, MAX_HIDDEN_TOKENS, Puzzle, WordSource,
    WordValidator, random_hints, random_placement,
};
