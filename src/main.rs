//! Anagramle - CLI
//!
//! Word puzzle combining Wordle feedback with Scrabble scoring, with TUI and
//! CLI modes plus scoring analysis tools.

use anagramle::{
    commands::{analyze_placement, check_guess, run_simple, run_survey, score_word},
    core::{Language, MAX_TOKENS, Placement, Word},
    game::{
        AcceptAll, DictionarySource, FixedSource, Puzzle, WordSource, WordValidator,
        random_hints, random_placement,
    },
    logging,
    output::{
        print_analysis_result, print_board, print_check_result, print_letter_values,
        print_score_report, print_survey_statistics,
    },
    wordlists::Dictionary,
};
use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "anagramle",
    about = "Guess the word in six tries; the board squares under it set the score",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language: en (default), en-world, es
    #[arg(short, long, global = true, default_value = "en")]
    language: Language,

    /// Word list file (one word per line) replacing the built-in dictionary
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play(GameArgs),

    /// Simple CLI game (one guess per line, no TUI)
    Simple(GameArgs),

    /// Score a word at a board position
    Score {
        /// The word to score
        word: String,

        #[command(flatten)]
        position: PositionArgs,

        /// Show the final score for a win on this attempt (1-6)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=6))]
        attempt: Option<u8>,
    },

    /// Show the feedback a guess gets against a target
    Check {
        /// The secret word
        target: String,

        /// The guessed word
        guess: String,
    },

    /// Print the board, optionally highlighting where a word would sit
    Board {
        /// Row of the word (1-15)
        #[arg(short, long, requires = "col", value_parser = clap::value_parser!(u8).range(1..=15))]
        row: Option<u8>,

        /// Column of the first letter (1-15)
        #[arg(short, long, requires = "row", value_parser = clap::value_parser!(u8).range(1..=15))]
        col: Option<u8>,

        /// Word length to highlight
        #[arg(short = 'n', long, default_value = "5")]
        length: usize,
    },

    /// Rank dictionary words by score at a board position
    Analyze {
        #[command(flatten)]
        position: PositionArgs,

        /// Word length in letters (digraphs count once in Spanish)
        #[arg(short = 'n', long, default_value = "5")]
        length: usize,

        /// Number of words to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Score statistics for dictionary words over every board position
    Survey {
        /// Limit number of words to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

#[derive(Args, Clone, Copy)]
struct PositionArgs {
    /// Row (1-15)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=15))]
    row: u8,

    /// Column of the first letter (1-15)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=15))]
    col: u8,
}

impl PositionArgs {
    fn placement(self) -> Placement {
        to_placement(self.row, self.col)
    }
}

#[derive(Args, Clone, Default)]
struct GameArgs {
    /// Play this word instead of a random one
    #[arg(short, long)]
    word: Option<String>,

    /// Row of the word (1-15), random if omitted
    #[arg(short, long, requires = "word", value_parser = clap::value_parser!(u8).range(1..=15))]
    row: Option<u8>,

    /// Column of the first letter (1-15), random if omitted
    #[arg(short, long, requires = "word", value_parser = clap::value_parser!(u8).range(1..=15))]
    col: Option<u8>,

    /// Seed for reproducible puzzles
    #[arg(long)]
    seed: Option<u64>,

    /// Accept any well-formed guess, not only dictionary words
    #[arg(long)]
    free: bool,
}

fn to_placement(row: u8, col: u8) -> Placement {
    Placement::new(usize::from(row) - 1, usize::from(col) - 1)
}

/// Load the dictionary for the -l and -d flags
fn load_dictionary(language: Language, path: Option<&PathBuf>) -> Result<Dictionary> {
    match path {
        Some(path) => Dictionary::from_file(language, path)
            .with_context(|| format!("loading {} dictionary", language.name())),
        None => Dictionary::embedded(language).context("loading built-in dictionary"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    run(cli)
}

/// Dispatch a parsed command line
///
/// Only commands that draw or check words load the dictionary, so a bad
/// `--dictionary` path does not affect `score`, `check` or `board`.
fn run(cli: Cli) -> Result<()> {
    let language = cli.language;
    let variant = language.variant();
    let dictionary = || load_dictionary(language, cli.dictionary.as_ref());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play(GameArgs::default()));

    match command {
        Commands::Play(args) => run_play_command(&dictionary()?, &args),
        Commands::Simple(args) => run_simple_command(&dictionary()?, &args),
        Commands::Score {
            word,
            position,
            attempt,
        } => {
            let attempt_index = attempt.map(|n| usize::from(n) - 1);
            let report = score_word(&word, variant, position.placement(), attempt_index)?;
            print_score_report(&report);
            Ok(())
        }
        Commands::Check { target, guess } => {
            let result = check_guess(&target, &guess, variant)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Board { row, col, length } => {
            let highlight = row.zip(col).map(|(row, col)| (to_placement(row, col), length));
            print_board(highlight);
            print_letter_values(variant);
            Ok(())
        }
        Commands::Analyze {
            position,
            length,
            top,
        } => {
            if !(2..=MAX_TOKENS).contains(&length) {
                bail!("Length must be between 2 and {MAX_TOKENS}");
            }
            let dictionary = dictionary()?;
            let result = analyze_placement(&dictionary, position.placement(), length, top);
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Survey { limit } => {
            let dictionary = dictionary()?;
            println!("\n{}", "═".repeat(70));
            println!(" Anagramle Scoring Survey ");
            println!("{}", "═".repeat(70));
            println!(
                "\n{} dictionary: {} words",
                dictionary.language().name(),
                dictionary.len()
            );

            let stats = run_survey(&dictionary, limit);
            print_survey_statistics(&stats);
            Ok(())
        }
    }
}

/// Build the word source for a game: a fixed word if given, else random draws
fn word_source<'a>(
    dictionary: &'a Dictionary,
    args: &GameArgs,
) -> Result<Box<dyn WordSource + 'a>> {
    let mut rng = args
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let Some(text) = &args.word else {
        return Ok(Box::new(DictionarySource::new(dictionary, rng)));
    };

    let target = Word::new(text, dictionary.variant())
        .with_context(|| format!("invalid word \"{text}\""))?;
    if !dictionary.contains(target.text()) {
        tracing::warn!(word = target.text(), "playing a word that is not in the dictionary");
    }

    let placement = match (args.row, args.col) {
        (Some(row), Some(col)) => to_placement(row, col),
        (Some(row), None) => {
            let random = random_placement(target.len(), &mut rng);
            Placement::new(usize::from(row) - 1, random.start_column)
        }
        (None, Some(col)) => {
            let random = random_placement(target.len(), &mut rng);
            Placement::new(random.row, usize::from(col) - 1)
        }
        (None, None) => random_placement(target.len(), &mut rng),
    };
    let hints = random_hints(target.len(), &mut rng);

    Ok(Box::new(FixedSource::new(
        Puzzle::new(target, placement).with_hints(hints),
    )))
}

fn validator<'a>(dictionary: &'a Dictionary, args: &GameArgs) -> &'a dyn WordValidator {
    if args.free { &AcceptAll } else { dictionary }
}

fn run_simple_command(dictionary: &Dictionary, args: &GameArgs) -> Result<()> {
    let mut source = word_source(dictionary, args)?;
    run_simple(source.as_mut(), validator(dictionary, args))
}

fn run_play_command(dictionary: &Dictionary, args: &GameArgs) -> Result<()> {
    use anagramle::interactive::{App, run_tui};

    let source = word_source(dictionary, args)?;
    let app = App::new(source, validator(dictionary, args))?;
    run_tui(app)
}
