//! Anagramle
//!
//! A word puzzle that combines Wordle feedback with Scrabble scoring. The
//! target word sits somewhere on a Scrabble board; every guess is scored by the
//! squares under it, and a win is worth more the fewer attempts it took.
//!
//! # Quick Start
//!
//! ```rust
//! use anagramle::core::{Feedback, Placement, Variant, raw_score, tokenize};
//!
//! let target = tokenize("calle", Variant::Spanish);
//! let guess = tokenize("valla", Variant::Spanish);
//!
//! // CALLE is four tokens: C A LL E
//! let feedback = Feedback::calculate(&target, &guess);
//! assert_eq!(feedback.to_codes(), "-GG-");
//!
//! let score = raw_score(&guess, Variant::Spanish, Placement::new(7, 7));
//! println!("{feedback} worth {score} points");
//! ```

// Core domain types: tokens, feedback, board and scoring
pub mod core;

// Error types
pub mod error;

// Puzzle selection and sessions
pub mod game;

// Word lists and dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic logging
pub mod logging;
