//! Simple interactive CLI mode
//!
//! Line-oriented game without the TUI: one guess per line.

use crate::core::{MAX_ATTEMPTS, Token, join};
use crate::error::GameError;
use crate::game::{Outcome, Session, WordSource, WordValidator};
use crate::output::formatters::{colored_guess, multiplier_row};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the word
/// source cannot produce a puzzle.
pub fn run_simple<S, V>(source: &mut S, validator: &V) -> Result<()>
where
    S: WordSource + ?Sized,
    V: WordValidator + ?Sized,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(&mut stdin.lock(), &mut stdout.lock(), source, validator)
}

/// Play games reading guesses from `input` until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure or if the source cannot produce a puzzle.
pub fn play<R, W, S, V>(input: &mut R, out: &mut W, source: &mut S, validator: &V) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: WordSource + ?Sized,
    V: WordValidator + ?Sized,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                   Anagramle - Simple Mode                    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the word in {MAX_ATTEMPTS} attempts. Every guess is scored")?;
    writeln!(out, "by the board squares under it; winning early multiplies the score.")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for a new word\n")?;

    let mut session = Session::start(source)?;
    print_puzzle(out, &session)?;

    loop {
        let prompt = format!(
            "Guess {}/{MAX_ATTEMPTS}",
            session.attempts().len() + 1
        );
        let Some(line) = read_line(input, out, &prompt)? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                writeln!(out, "The word was {}", session.target().text().bold())?;
                session = Session::start(source)?;
                writeln!(out, "\n🔄 New game started!\n")?;
                print_puzzle(out, &session)?;
                continue;
            }
            "" => continue,
            _ => {}
        }

        match session.submit(&line, validator) {
            Ok(attempt) => {
                writeln!(
                    out,
                    "  {}  {} pts",
                    colored_guess(attempt.guess.tokens(), &attempt.feedback),
                    attempt.score
                )?;
            }
            Err(
                e @ (GameError::WrongLength { .. }
                | GameError::NotInDictionary(_)
                | GameError::InvalidWord { .. }),
            ) => {
                writeln!(out, "❌ {e}")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        if !session.is_over() {
            continue;
        }

        print_outcome(out, &session)?;

        let again = read_line(input, out, "Play again? (yes/no)")?.unwrap_or_default();
        if !matches!(again.to_lowercase().as_str(), "yes" | "y") {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }

        session = Session::start(source)?;
        writeln!(out, "\n🔄 New game started!\n")?;
        print_puzzle(out, &session)?;
    }
}

fn print_puzzle<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "{} letters at {}",
        session.word_length(),
        session.placement()
    )?;
    writeln!(out, "Squares: {}", multiplier_row(&session.window()))?;

    if !session.hints().is_empty() {
        let revealed: Vec<Token> = session
            .target()
            .tokens()
            .iter()
            .enumerate()
            .map(|(i, token)| {
                if session.puzzle().is_hint(i) {
                    token.clone()
                } else {
                    Token::from('_')
                }
            })
            .collect();
        writeln!(out, "Hints:   {}", join_spaced(&revealed))?;
    }

    writeln!(out, "────────────────────────────────────────────────────────────")
}

fn print_outcome<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    match session.outcome() {
        Outcome::Won {
            attempt_index,
            raw_score,
            bonus,
            final_score,
        } => {
            writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
            writeln!(
                out,
                "{}",
                "    🎉 🎊 ✨  Y O U   W O N !  ✨ 🎊 🎉    "
                    .bright_green()
                    .bold()
            )?;
            writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
            let guesses = attempt_index + 1;
            writeln!(
                out,
                "\n  Solved in {} {}",
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            )?;
            writeln!(out, "  Score: {raw_score} × {bonus:.1} = {final_score} points")?;
        }
        Outcome::Lost => {
            writeln!(
                out,
                "\n❌ Out of attempts! The word was {}",
                join(session.target().tokens()).bright_yellow().bold()
            )?;
        }
        Outcome::InProgress => return Ok(()),
    }

    writeln!(out, "\n  Guess history:")?;
    for (i, attempt) in session.attempts().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            attempt.guess.text().bright_white().bold(),
            attempt.feedback
        )?;
    }
    writeln!(out)
}

fn join_spaced(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Placement, Variant, Word};
    use crate::game::{AcceptAll, FixedSource, Puzzle};

    fn run(target: &str, variant: Variant, input: &str) -> String {
        let target = Word::new(target, variant).unwrap();
        let mut source = FixedSource::new(Puzzle::new(target, Placement::new(7, 7)));
        let mut out = Vec::new();
        play(&mut input.as_bytes(), &mut out, &mut source, &AcceptAll).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn win_reports_final_score() {
        let output = run("cat", Variant::English, "dog\ncat\nno\n");
        assert!(output.contains("10 × 2.5 = 25 points"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn wrong_length_is_reported_and_not_counted() {
        let output = run("cat", Variant::English, "crane\ncat\nno\n");
        assert!(output.contains("Guess must be 3 letters long, got 5"));
        assert!(output.contains("10 × 3.0 = 30 points"));
    }

    #[test]
    fn loss_reveals_target() {
        let output = run("cat", Variant::English, "dog\ndog\ndog\ndog\ndog\ndog\nno\n");
        assert!(output.contains("Out of attempts"));
        assert!(output.contains("CAT"));
    }

    #[test]
    fn end_of_input_quits() {
        let output = run("calle", Variant::Spanish, "");
        assert!(output.contains("4 letters at row 8, column 8"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn quit_command() {
        let output = run("cat", Variant::English, "quit\n");
        assert!(output.contains("Thanks for playing"));
        assert!(!output.contains("Guess 2/6"));
    }

    #[test]
    fn hints_shown_for_long_words() {
        let target = Word::new("abcdefghi", Variant::English).unwrap();
        let puzzle = Puzzle::new(target, Placement::new(0, 0)).with_hints(vec![0, 8]);
        let mut source = FixedSource::new(puzzle);
        let mut out = Vec::new();
        play(&mut "q\n".as_bytes(), &mut out, &mut source, &AcceptAll).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Hints:   A _ _ _ _ _ _ _ I"));
    }
}
