//! Core scoring and feedback engine
//!
//! Pure functions over tokens: no I/O, no randomness, no shared mutable state.
//! The letter tables and the board are static data.

mod board;
mod feedback;
mod language;
mod letters;
mod score;
mod token;
mod word;

pub use board::{BOARD, BOARD_SIZE, Multiplier, Placement, cell, multiplier_window};
pub use feedback::{Feedback, LetterState};
pub use language::{Language, Variant};
pub use letters::{LetterValue, points, points_of, table as letter_table};
pub use score::{
    MAX_ATTEMPTS, ScoreBreakdown, attempt_bonus, final_score, raw_score,
    score_breakdown,
};
pub use token::{DIGRAPHS, Token, join, token_counts, token_len, tokenize};
pub use word::{MAX_TOKENS, MIN_TOKENS, Word, WordError};
