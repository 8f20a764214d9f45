//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterState, Multiplier, Token};
use colored::{ColoredString, Colorize};

/// Render one token as a colored tile
#[must_use]
pub fn tile(token: &Token, state: LetterState) -> ColoredString {
    let text = format!(" {:<2}", token.as_str());
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
    }
}

/// Render a guess as colored tiles
#[must_use]
pub fn colored_guess(tokens: &[Token], feedback: &Feedback) -> String {
    tokens
        .iter()
        .zip(feedback.states())
        .map(|(token, &state)| tile(token, state).to_string())
        .collect()
}

/// Board square label, padded to two columns and colored like a Scrabble board
#[must_use]
pub fn multiplier_label(multiplier: Multiplier) -> ColoredString {
    match multiplier {
        Multiplier::TripleWord => "3W".white().on_red().bold(),
        Multiplier::DoubleWord => "2W".black().on_magenta(),
        Multiplier::TripleLetter => "3L".white().on_blue().bold(),
        Multiplier::DoubleLetter => "2L".black().on_cyan(),
        Multiplier::None => "··".bright_black(),
    }
}

/// Squares under a word, one label per token
#[must_use]
pub fn multiplier_row(window: &[Multiplier]) -> String {
    window
        .iter()
        .map(|&m| format!(" {}", multiplier_label(m)))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
