//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Match, WORD_LENGTH};
use crate::game::KeyState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 LETTR - Daily Word Puzzle")
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

fn match_style(matched: Match) -> Style {
    match matched {
        Match::Exact => Style::new().fg(Color::Black).bg(Color::Green),
        Match::Vague => Style::new().fg(Color::Black).bg(Color::Yellow),
        Match::None => Style::new().fg(Color::White).bg(Color::DarkGray),
    }
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_uppercase()),
        style.add_modifier(Modifier::BOLD),
    )
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let puzzle = app.session.game_state().puzzle();
    let active = puzzle.active_row();

    let mut lines = vec![Line::from("")];
    for (i, row) in puzzle.rows().iter().enumerate() {
        let mut spans = vec![Span::raw("  ")];

        if row.is_filled() {
            for letter in row.letters() {
                spans.push(tile(letter.letter, match_style(letter.matched)));
                spans.push(Span::raw(" "));
            }
        } else if i == active && app.input_mode == InputMode::Guess {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            for slot in 0..WORD_LENGTH {
                let letter = typed.get(slot).copied().unwrap_or('·');
                spans.push(tile(letter, Style::default().fg(Color::Yellow)));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..WORD_LENGTH {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if let Some(solution) = app.session.game_state().revealed_solution() {
        lines.push(Line::from(vec![
            Span::raw("  Solution: "),
            Span::styled(
                solution.to_string().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Keyboard
            Constraint::Length(4), // Hints
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_hints(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn key_span(key: &KeyState) -> Span<'static> {
    let style = if key.used {
        match_style(key.matched)
    } else {
        Style::default().fg(Color::White)
    };
    tile(key.letter, style)
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.keyboard();
    let lines: Vec<Line> = keyboard
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = vec![Span::raw(" ".repeat(i + 1))];
            spans.extend(row.iter().map(key_span));
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let game = app.session.game_state();
    let hints: Vec<Span> = game
        .letter_hints()
        .into_iter()
        .map(|c| tile(c, Style::default().fg(Color::Black).bg(Color::Cyan)))
        .collect();

    let mut lines = vec![if hints.is_empty() {
        Line::from(Span::styled(
            "Press Tab to reveal a letter",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(hints)
    }];
    if game.solution_has_duplicate_letters() {
        lines.push(Line::from(Span::styled(
            "The solution contains duplicate letters",
            Style::default().fg(Color::Magenta),
        )));
    }

    let widget = Paragraph::new(lines).block(Block::default().title(" Hints ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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
        InputMode::RoundOver => (
            " Round over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guess => (
            " Enter Guess (5 letters) | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
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
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let language = Paragraph::new(format!("Language: {}", app.session.language()))
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

    let help = Paragraph::new("Esc: Quit | Tab: Hint | Ctrl+N: New | Ctrl+L: Language")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
