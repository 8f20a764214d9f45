//! TUI application state and logic

use crate::core::{MAX_ATTEMPTS, Token, join, tokenize};
use crate::error::GameError;
use crate::game::{Outcome, Session, WordSource, WordValidator};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    source: Box<dyn WordSource + 'a>,
    validator: &'a dyn WordValidator,
    pub session: Session,
    pub input: String,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub total_score: u32,
    pub best_score: u32,
    pub guess_distribution: [usize; MAX_ATTEMPTS],
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the word source cannot produce a puzzle.
    pub fn new(
        mut source: Box<dyn WordSource + 'a>,
        validator: &'a dyn WordValidator,
    ) -> Result<Self, GameError> {
        let session = Session::start(source.as_mut())?;

        let mut app = Self {
            source,
            validator,
            session,
            input: String::new(),
            input_mode: InputMode::Guessing,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            "Welcome! Guess the word; the squares under it set the score.",
            MessageStyle::Info,
        );
        app.announce_puzzle();
        Ok(app)
    }

    fn announce_puzzle(&mut self) {
        let text = format!(
            "{} letters at {}",
            self.session.word_length(),
            self.session.placement()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    /// Tokens typed so far
    #[must_use]
    pub fn input_tokens(&self) -> Vec<Token> {
        tokenize(&self.input, self.session.variant())
    }

    /// Raw score of the current input at the puzzle placement
    #[must_use]
    pub fn preview_score(&self) -> u32 {
        self.session.preview_score(&self.input)
    }

    /// Add a letter, unless it would make the guess longer than the target
    pub fn type_char(&mut self, c: char) {
        if self.input_mode != InputMode::Guessing || !c.is_alphabetic() {
            return;
        }

        let mut candidate = self.input.clone();
        candidate.extend(c.to_uppercase());
        if tokenize(&candidate, self.session.variant()).len() <= self.session.word_length() {
            self.input = candidate;
        }
    }

    /// Remove the last token, so a digraph is deleted as a whole
    pub fn backspace(&mut self) {
        let mut tokens = self.input_tokens();
        tokens.pop();
        self.input = join(&tokens);
    }

    pub fn submit_guess(&mut self) {
        if self.input_mode != InputMode::Guessing {
            return;
        }

        let guess = self.input.clone();
        match self.session.submit(&guess, self.validator) {
            Ok(attempt) => {
                let text = format!("{} scored {} points", attempt.guess, attempt.score);
                self.input.clear();
                self.add_message(&text, MessageStyle::Info);
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }

        if self.session.is_over() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        self.input_mode = InputMode::GameOver;
        self.stats.total_games += 1;

        match self.session.outcome() {
            Outcome::Won {
                attempt_index,
                raw_score,
                bonus,
                final_score,
            } => {
                self.stats.games_won += 1;
                self.stats.guess_distribution[attempt_index] += 1;
                self.stats.total_score += final_score;
                self.stats.best_score = self.stats.best_score.max(final_score);

                let celebration = match attempt_index {
                    0 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    1 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    2 => "✨ SPLENDID! Three guesses! ✨",
                    3 => "👏 GREAT JOB! Four guesses! 👏",
                    4 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message(
                    &format!("{raw_score} × {bonus:.1} = {final_score} points"),
                    MessageStyle::Success,
                );
            }
            Outcome::Lost => {
                let text = format!("Out of attempts! The word was {}", self.session.target());
                self.add_message(&text, MessageStyle::Error);
            }
            Outcome::InProgress => return,
        }

        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match Session::start(self.source.as_mut()) {
            Ok(session) => {
                self.session = session;
                self.input.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
                self.announce_puzzle();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.type_char(c),
                KeyCode::Backspace => self.backspace(),
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Placement, Variant, Word};
    use crate::game::{AcceptAll, FixedSource, Puzzle};

    fn app(target: &str, variant: Variant) -> App<'static> {
        let target = Word::new(target, variant).unwrap();
        let source = FixedSource::new(Puzzle::new(target, Placement::new(7, 7)));
        App::new(Box::new(source), &AcceptAll).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_stops_at_target_length() {
        let mut app = app("cat", Variant::English);
        type_word(&mut app, "dogs");
        assert_eq!(app.input, "DOG");
    }

    #[test]
    fn digraph_typing_and_backspace() {
        let mut app = app("calle", Variant::Spanish);
        type_word(&mut app, "vall");
        assert_eq!(app.input_tokens().len(), 3);

        // LL is one token, so one more letter still fits
        type_word(&mut app, "a");
        assert_eq!(app.input, "VALLA");

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "VA");
    }

    #[test]
    fn preview_follows_input() {
        let mut app = app("cat", Variant::English);
        assert_eq!(app.preview_score(), 0);
        type_word(&mut app, "q");
        // Q on the double word square at (7,7)
        assert_eq!(app.preview_score(), 20);
    }

    #[test]
    fn winning_records_stats() {
        let mut app = app("cat", Variant::English);
        type_word(&mut app, "dog");
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "cat");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert_eq!(app.stats.total_score, 25);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.session.attempts().is_empty());
    }

    #[test]
    fn short_guess_is_rejected() {
        let mut app = app("cat", Variant::English);
        type_word(&mut app, "ca");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input, "CA");
        assert!(app.session.attempts().is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn losing_reveals_target() {
        let mut app = app("cat", Variant::English);
        for _ in 0..MAX_ATTEMPTS {
            type_word(&mut app, "dog");
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("CAT")));

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn escape_quits_while_guessing() {
        let mut app = app("cat", Variant::English);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
