//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, multiplier_label, tile};
use crate::commands::{AnalysisResult, CheckResult, ScoreReport, SurveyStatistics};
use crate::core::{
    BOARD_SIZE, LetterState, Multiplier, Placement, Token, Variant, cell, letter_table,
};
use colored::Colorize;

/// Print the result of scoring a word
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Scoring: {} at {}",
        report.word.text().bright_yellow().bold(),
        report.placement
    );
    println!("{}", "─".repeat(60).cyan());

    for scored in &report.tokens {
        let factor = scored.multiplier.letter_factor();
        let square = multiplier_label(scored.multiplier);
        if factor > 1 {
            println!(
                "  {:<3} {square}  {} × {} = {}",
                scored.token.as_str(),
                scored.points,
                factor,
                scored.value()
            );
        } else {
            println!("  {:<3} {square}  {}", scored.token.as_str(), scored.value());
        }
    }

    let breakdown = report.breakdown;
    println!("\n   Letters:         {}", breakdown.letter_total);
    println!("   Word multiplier: ×{}", breakdown.word_multiplier);
    println!(
        "   Raw score:       {}",
        breakdown.raw.to_string().bright_yellow().bold()
    );

    if let Some(win) = report.win {
        println!(
            "\n🏆 Won on attempt {}: {} × {:.1} = {}",
            win.attempt_index + 1,
            breakdown.raw,
            win.bonus,
            win.final_score.to_string().bright_green().bold()
        );
    }
}

/// Print the feedback for a checked guess
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{}  {}",
        colored_guess(result.guess.tokens(), &result.feedback),
        result.feedback
    );
    println!(
        "   Correct: {}   Present: {}   Absent: {}",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_present().to_string().yellow(),
        result.feedback.len()
            - result.feedback.count_correct()
            - result.feedback.count_present()
    );
    if result.feedback.is_perfect() {
        println!("{}", "✅ That's the word!".green().bold());
    }
}

/// Render the board, highlighting the squares under a word if given
#[must_use]
pub fn board_lines(highlight: Option<(Placement, usize)>) -> Vec<String> {
    let highlighted = |row: usize, column: usize| {
        highlight.is_some_and(|(placement, length)| {
            row == placement.row
                && column >= placement.start_column
                && column < placement.start_column.saturating_add(length)
        })
    };

    let header: String = (0..BOARD_SIZE).map(|c| format!("{:>3}", c + 1)).collect();
    let mut lines = vec![format!("    {header}")];

    for row in 0..BOARD_SIZE {
        let squares: String = (0..BOARD_SIZE)
            .map(|column| {
                let label = multiplier_label(cell(row, column));
                if highlighted(row, column) {
                    format!(" {}", label.underline().reversed())
                } else {
                    format!(" {label}")
                }
            })
            .collect();
        lines.push(format!("{:>3} {squares}", row + 1));
    }

    lines
}

/// Print the board with a legend
pub fn print_board(highlight: Option<(Placement, usize)>) {
    println!();
    for line in board_lines(highlight) {
        println!("{line}");
    }
    println!();
    for multiplier in [
        Multiplier::TripleWord,
        Multiplier::DoubleWord,
        Multiplier::TripleLetter,
        Multiplier::DoubleLetter,
    ] {
        println!("   {} {}", multiplier_label(multiplier), multiplier.name());
    }

    if let Some((placement, length)) = highlight {
        if placement.fits(length) {
            println!("   Highlighted: {length} squares at {placement}");
        } else {
            println!(
                "   {}",
                format!("A {length}-letter word at {placement} runs off the board").yellow()
            );
        }
    }
}

/// Print the tile values for a variant
pub fn print_letter_values(variant: Variant) {
    println!("\n📖 {}", "Tile values".bright_cyan().bold());
    for row in letter_table(variant).chunks(7) {
        let line: String = row
            .iter()
            .map(|&(letter, points)| {
                format!(
                    "{}{points:<3}",
                    tile(&Token::new(letter), LetterState::Absent)
                )
            })
            .collect();
        println!("  {line}");
    }
}

/// Print the result of placement analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}-letter words at {} ",
        "PLACEMENT ANALYSIS:".bright_cyan().bold(),
        result.length,
        result.placement
    );
    println!("{}", "═".repeat(60).cyan());

    let squares: String = result
        .window
        .iter()
        .map(|&m| format!(" {}", multiplier_label(m)))
        .collect();
    println!("\n   Squares:  {squares}");
    println!("   Words:     {}", result.total_candidates);
    println!("   Average:   {:.1} points", result.average_score);

    if result.best.is_empty() {
        println!("\n   No words of that length in the dictionary.");
        return;
    }

    let top = result.best.first().map_or(1, |s| s.breakdown.raw.max(1));
    println!("\n📈 {}", "Best words:".bright_cyan().bold());
    for (i, scored) in result.best.iter().enumerate() {
        let bar = create_progress_bar(f64::from(scored.breakdown.raw), f64::from(top), 20);
        println!(
            "  {:>2}. {:<15} [{}] {:>4}  ({} × {})",
            i + 1,
            scored.word,
            bar.green(),
            scored.breakdown.raw,
            scored.breakdown.letter_total,
            scored.breakdown.word_multiplier
        );
    }
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Survey Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Words surveyed:      {}", stats.total_words);
    println!("  Placements scored:   {}", stats.placements_scored);
    println!(
        "  Average raw score:   {}",
        format!("{:.2}", stats.average_score).bright_yellow().bold()
    );
    println!("  Lowest / highest:    {} / {}", stats.min_score, stats.max_score);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if let Some((word, placement, score)) = &stats.best {
        println!("\n✨ {}", "Best Placement".green().bold());
        println!(
            "  {} at {} for {} points",
            word.bright_green(),
            placement,
            score
        );
    }

    println!("\n📈 {}", "By Length".bright_cyan().bold());
    let max_average = stats
        .by_length
        .values()
        .map(|s| s.average_score)
        .fold(0.0, f64::max);
    for (length, summary) in &stats.by_length {
        let bar = create_progress_bar(summary.average_score, max_average, 30);
        let best = summary
            .best
            .as_ref()
            .map(|(word, score)| format!("{word} {score}"))
            .unwrap_or_default();
        println!(
            "  {length:>2}: {} {:>4} words  avg {:>6.1}  best {}",
            bar.green(),
            summary.words,
            summary.average_score,
            best
        );
    }

    if !stats.most_board_sensitive.is_empty() {
        println!("\n🎯 {}", "Most Placement-Sensitive".yellow().bold());
        for (word, min, max) in stats.most_board_sensitive.iter().take(5) {
            println!("  {} ({min} to {max})", word.yellow());
        }
    }
}
