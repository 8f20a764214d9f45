//! TUI rendering with ratatui
//!
//! Board strip, guess grid, live score and game statistics.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterState, MAX_ATTEMPTS, Multiplier, Token, attempt_bonus, letter_table};
use crate::game::Outcome;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔠 ANAGRAMLE - Wordle meets Scrabble")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let grid_height = u16::try_from(MAX_ATTEMPTS * 2 + 2).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),           // Board strip
            Constraint::Length(grid_height), // Guesses
            Constraint::Min(0),              // Tile values
        ])
        .split(area);

    render_board_strip(f, app, chunks[0]);
    render_guesses(f, app, chunks[1]);
    render_letter_values(f, app, chunks[2]);
}

fn square_style(multiplier: Multiplier) -> Style {
    match multiplier {
        Multiplier::TripleWord => Style::default().fg(Color::White).bg(Color::Red),
        Multiplier::DoubleWord => Style::default().fg(Color::Black).bg(Color::Magenta),
        Multiplier::TripleLetter => Style::default().fg(Color::White).bg(Color::Blue),
        Multiplier::DoubleLetter => Style::default().fg(Color::Black).bg(Color::Cyan),
        Multiplier::None => Style::default().fg(Color::DarkGray),
    }
}

fn state_style(state: LetterState) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match state {
        LetterState::Correct => style.fg(Color::Black).bg(Color::Green),
        LetterState::Present => style.fg(Color::Black).bg(Color::Yellow),
        LetterState::Absent => style.fg(Color::White).bg(Color::DarkGray),
    }
}

fn cell_text(text: &str) -> String {
    format!(" {text:<2} ")
}

fn render_board_strip(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let window = session.window();

    let squares: Vec<Span> = window
        .iter()
        .map(|&m| {
            let label = if m == Multiplier::None { "··" } else { m.label() };
            Span::styled(cell_text(label), square_style(m))
        })
        .collect();

    // Hinted positions show the target token dimmed
    let hints: Vec<Span> = session
        .target()
        .tokens()
        .iter()
        .enumerate()
        .map(|(i, token)| {
            if session.puzzle().is_hint(i) {
                Span::styled(
                    cell_text(token.as_str()),
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::DIM),
                )
            } else {
                Span::raw(cell_text(""))
            }
        })
        .collect();

    let title = format!(" Board: {} ", session.placement());
    let paragraph = Paragraph::new(vec![Line::from(squares), Line::from(hints)]).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_guesses(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let length = session.word_length();
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for attempt in session.attempts() {
        let mut spans: Vec<Span> = attempt
            .guess
            .tokens()
            .iter()
            .zip(attempt.feedback.states())
            .map(|(token, &state)| Span::styled(cell_text(token.as_str()), state_style(state)))
            .collect();
        spans.push(Span::styled(
            format!("  {:>4} pts", attempt.score),
            Style::default().fg(Color::Cyan),
        ));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if app.input_mode == InputMode::Guessing {
        let typed = app.input_tokens();
        let mut spans: Vec<Span> = (0..length)
            .map(|i| {
                let text = typed.get(i).map_or("", Token::as_str);
                Span::styled(
                    cell_text(if text.is_empty() { "_" } else { text }),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        spans.push(Span::styled(
            format!("  {:>4} pts", app.preview_score()),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(format!(
                " Guesses ({}/{MAX_ATTEMPTS}) ",
                session.attempts().len()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_letter_values(f: &mut Frame, app: &App, area: Rect) {
    let spans: Vec<Span> = letter_table(app.session.variant())
        .iter()
        .map(|&(letter, points)| {
            Span::styled(
                format!("{letter}:{points} "),
                Style::default().fg(Color::Gray),
            )
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .title(" Tile Values ")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Bonus gauge
            Constraint::Length(8), // Score
            Constraint::Min(0),    // Messages
        ])
        .split(area);

    render_bonus(f, app, chunks[0]);
    render_score(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_bonus(f: &mut Frame, app: &App, area: Rect) {
    let attempt_index = app.session.attempts().len();
    let bonus = attempt_bonus(attempt_index);
    let percent = ((bonus / attempt_bonus(0)) * 100.0).clamp(0.0, 100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Win Bonus ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!(
            "×{bonus:.1} | {} attempts left",
            app.session.remaining_attempts()
        ));

    f.render_widget(gauge, area);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let content = match app.session.outcome() {
        Outcome::Won {
            attempt_index,
            raw_score,
            bonus,
            final_score,
        } => vec![
            Line::from(Span::styled(
                format!("Solved in {}!", attempt_index + 1),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Raw score:   {raw_score}")),
            Line::from(format!("Bonus:       ×{bonus:.1}")),
            Line::from(Span::styled(
                format!("Final score: {final_score}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ],
        Outcome::Lost => vec![
            Line::from(Span::styled(
                "Out of attempts",
                Style::default().fg(Color::Red),
            )),
            Line::from(vec![
                Span::raw("The word was "),
                Span::styled(
                    app.session.target().text().to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ],
        Outcome::InProgress => vec![
            Line::from(vec![
                Span::raw("Current guess: "),
                Span::styled(
                    format!("{} pts", app.preview_score()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!(
                "If correct:    {} pts",
                crate::core::final_score(app.preview_score(), app.session.attempts().len())
            )),
            Line::from(format!("Letters:       {}", app.session.word_length())),
            Line::from(format!("Hints:         {}", app.session.hints().len())),
        ],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type your guess | Enter to submit, Backspace to delete ",
            app.input.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let language = Paragraph::new(format!("Letters: {:?}", app.session.variant()))
        .alignment(Alignment::Center);
    f.render_widget(language, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let score_text = format!(
        "Total: {} | Best: {}",
        app.stats.total_score, app.stats.best_score
    );
    let score = Paragraph::new(score_text).alignment(Alignment::Center);
    f.render_widget(score, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Ctrl-N: New Game",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Placement, Variant, Word};
    use crate::game::{AcceptAll, FixedSource, Puzzle};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_and_guess_row() {
        let target = Word::new("calle", Variant::Spanish).unwrap();
        let source = FixedSource::new(Puzzle::new(target, Placement::new(7, 7)));
        let app = App::new(Box::new(source), &AcceptAll).unwrap();

        let screen = render(&app);
        assert!(screen.contains("ANAGRAMLE"));
        assert!(screen.contains("row 8, column 8"));
        assert!(screen.contains("2W"));
        assert!(screen.contains("Guesses (0/6)"));
    }
}
