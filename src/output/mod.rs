//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_board, print_check_result, print_letter_values,
    print_score_report, print_survey_statistics,
};
