//! The 15x15 multiplier board
//!
//! Only the bonus squares matter: a word is laid horizontally on one row and
//! each of its tokens picks up the multiplier of the square underneath.

use std::fmt;

/// Board width and height
pub const BOARD_SIZE: usize = 15;

/// Bonus square type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Multiplier {
    #[default]
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Multiplier {
    /// Factor applied to the token's points
    #[must_use]
    pub const fn letter_factor(self) -> u32 {
        match self {
            Self::DoubleLetter => 2,
            Self::TripleLetter => 3,
            _ => 1,
        }
    }

    /// Factor applied to the whole word
    #[must_use]
    pub const fn word_factor(self) -> u32 {
        match self {
            Self::DoubleWord => 2,
            Self::TripleWord => 3,
            _ => 1,
        }
    }

    /// Short board label ("3W", "2L", ...), empty for plain squares
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "",
            Self::DoubleLetter => "2L",
            Self::TripleLetter => "3L",
            Self::DoubleWord => "2W",
            Self::TripleWord => "3W",
        }
    }

    /// Long name used in legends
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "No bonus",
            Self::DoubleLetter => "Double Letter Score",
            Self::TripleLetter => "Triple Letter Score",
            Self::DoubleWord => "Double Word Score",
            Self::TripleWord => "Triple Word Score",
        }
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("--"),
            other => f.write_str(other.label()),
        }
    }
}

const NO: Multiplier = Multiplier::None;
const DL: Multiplier = Multiplier::DoubleLetter;
const TL: Multiplier = Multiplier::TripleLetter;
const DW: Multiplier = Multiplier::DoubleWord;
const TW: Multiplier = Multiplier::TripleWord;

/// The fixed board, indexed `[row][column]`
#[rustfmt::skip]
pub const BOARD: [[Multiplier; BOARD_SIZE]; BOARD_SIZE] = [
    [TW, NO, NO, DL, NO, NO, NO, TW, NO, NO, NO, DL, NO, NO, TW],
    [NO, DW, NO, NO, NO, TL, NO, NO, NO, TL, NO, NO, NO, DW, NO],
    [NO, NO, DW, NO, NO, NO, DL, NO, DL, NO, NO, NO, DW, NO, NO],
    [DL, NO, NO, DW, NO, NO, NO, DL, NO, NO, NO, DW, NO, NO, DL],
    [NO, NO, NO, NO, DW, NO, NO, NO, NO, NO, DW, NO, NO, NO, NO],
    [NO, TL, NO, NO, NO, TL, NO, NO, NO, TL, NO, NO, NO, TL, NO],
    [NO, NO, DL, NO, NO, NO, DL, NO, DL, NO, NO, NO, DL, NO, NO],
    [TW, NO, NO, DL, NO, NO, NO, DW, NO, NO, NO, DL, NO, NO, TW],
    [NO, NO, DL, NO, NO, NO, DL, NO, DL, NO, NO, NO, DL, NO, NO],
    [NO, TL, NO, NO, NO, TL, NO, NO, NO, TL, NO, NO, NO, TL, NO],
    [NO, NO, NO, NO, DW, NO, NO, NO, NO, NO, DW, NO, NO, NO, NO],
    [DL, NO, NO, DW, NO, NO, NO, DL, NO, NO, NO, DW, NO, NO, DL],
    [NO, NO, DW, NO, NO, NO, DL, NO, DL, NO, NO, NO, DW, NO, NO],
    [NO, DW, NO, NO, NO, TL, NO, NO, NO, TL, NO, NO, NO, DW, NO],
    [TW, NO, NO, DL, NO, NO, NO, TW, NO, NO, NO, DL, NO, NO, TW],
];

/// Multiplier at `(row, column)`, or `None` off the board
#[must_use]
pub fn cell(row: usize, column: usize) -> Multiplier {
    BOARD
        .get(row)
        .and_then(|cells| cells.get(column))
        .copied()
        .unwrap_or_default()
}

/// Where a word sits on the board: a row and the column of its first token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Placement {
    pub row: usize,
    pub start_column: usize,
}

impl Placement {
    #[must_use]
    pub const fn new(row: usize, start_column: usize) -> Self {
        Self { row, start_column }
    }

    /// Whether a word of `length` tokens fits on the board at this placement
    #[must_use]
    pub const fn fits(self, length: usize) -> bool {
        self.row < BOARD_SIZE && self.start_column.saturating_add(length) <= BOARD_SIZE
    }

    /// Multipliers under a word of `length` tokens at this placement
    #[must_use]
    pub fn window(self, length: usize) -> Vec<Multiplier> {
        multiplier_window(length, self.row, self.start_column)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}", self.row + 1, self.start_column + 1)
    }
}

/// Multipliers under a word of `word_length` tokens starting at
/// `(row, start_column)`
///
/// The result always has exactly `word_length` entries. Squares that fall off
/// the right edge (or a row past the bottom) count as plain squares.
///
/// # Examples
/// ```
/// use anagramle::core::{multiplier_window, Multiplier};
///
/// let window = multiplier_window(3, 0, 13);
/// assert_eq!(window, [Multiplier::None, Multiplier::TripleWord, Multiplier::None]);
/// ```
#[must_use]
pub fn multiplier_window(word_length: usize, row: usize, start_column: usize) -> Vec<Multiplier> {
    (0..word_length)
        .map(|offset| cell(row, start_column.saturating_add(offset)))
        .collect()
}
