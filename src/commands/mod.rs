//! Command implementations

pub mod analyze;
pub mod check;
pub mod score;
pub mod simple;
pub mod survey;

pub use analyze::{AnalysisResult, ScoredWord, analyze_placement};
pub use check::{CheckResult, check_guess};
pub use score::{ScoreReport, ScoredToken, WinBonus, score_word};
pub use simple::run_simple;
pub use survey::{SurveyStatistics, run_survey};
