//! TUI application state and logic

use crate::core::{Language, PuzzleStatus, WORD_LENGTH, lowercase};
use crate::game::{Keyboard, form_for};
use crate::session::{Session, SessionStore};
use crate::wordlists::WordDatabase;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Instant;
use tracing::info;

/// Application state
pub struct App<'a> {
    pub db: &'a WordDatabase,
    pub store: SessionStore,
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guess,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl<'a> App<'a> {
    /// Open a session in `store` and start playing in `language`
    #[must_use]
    pub fn new(db: &'a WordDatabase, store: SessionStore, language: Language, mut rng: StdRng) -> Self {
        let session = store.resolve(None, language, db, Instant::now(), &mut rng);

        Self {
            db,
            store,
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the five-letter word in six tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter. Tab reveals a letter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guess,
            rng,
        }
    }

    /// Keyboard view of the current round
    #[must_use]
    pub fn keyboard(&self) -> Keyboard {
        Keyboard::new(
            self.session.language(),
            &self.session.game_state().puzzle().letter_guesses(),
        )
    }

    fn commit(&mut self) {
        self.session.touch(Instant::now());
        self.store.update_or_set(self.session.clone());
    }

    pub fn type_letter(&mut self, c: char) {
        if self.input_buffer.chars().count() < WORD_LENGTH && c.is_alphabetic() {
            self.input_buffer.push(lowercase(c));
        }
    }

    pub fn submit_guess(&mut self) {
        if self.input_buffer.chars().count() != WORD_LENGTH {
            self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
            return;
        }

        let form = form_for(&self.session.game_state().puzzle(), &self.input_buffer);
        if let Err(err) = self.session.submit(&form, self.db) {
            self.add_message(&capitalize(&err.to_string()), MessageStyle::Error);
            return;
        }

        self.input_buffer.clear();
        self.commit();

        let game = self.session.game_state();
        let guess_count = game.puzzle().active_row();
        let solution = game
            .revealed_solution()
            .map(|w| w.to_string().to_uppercase())
            .unwrap_or_default();

        match game.puzzle().status() {
            PuzzleStatus::Active => {}
            PuzzleStatus::Solved => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if guess_count <= 6 {
                    self.stats.guess_distribution[guess_count] += 1;
                }
                self.input_mode = InputMode::RoundOver;

                let celebration = match guess_count {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            PuzzleStatus::Lost => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::RoundOver;
                self.add_message(&format!("Out of guesses! The word was {solution}"), MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    pub fn reveal_hint(&mut self) {
        match self.session.reveal_hint(&mut self.rng) {
            Some(letter) => {
                self.commit();
                self.add_message(
                    &format!("Hint: the word contains {}", letter.to_uppercase()),
                    MessageStyle::Success,
                );
            }
            None => self.add_message("No more hints to provide", MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.start_round(self.session.language());
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Switch between English and German, starting a new round
    pub fn toggle_language(&mut self) {
        let language = match self.session.language() {
            Language::En => Language::De,
            Language::De => Language::En,
        };
        self.start_round(language);
        self.add_message(&format!("New game in '{language}'"), MessageStyle::Info);
    }

    fn start_round(&mut self, language: Language) {
        self.session.new_round(language, self.db, &mut self.rng);
        self.commit();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guess;
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
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    info!(session_id = %app.session.id(), "Starting TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
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
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            match (app.input_mode, key.code) {
                (_, KeyCode::Char('c')) if ctrl => app.should_quit = true,
                (_, KeyCode::Esc) => app.should_quit = true,
                (_, KeyCode::Char('n')) if ctrl => app.new_game(),
                (_, KeyCode::Char('l')) if ctrl => app.toggle_language(),
                (InputMode::RoundOver, KeyCode::Char('q')) => app.should_quit = true,
                (InputMode::RoundOver, KeyCode::Char('n')) => app.new_game(),
                (InputMode::RoundOver, _) => {}
                (InputMode::Guess, KeyCode::Tab) => app.reveal_hint(),
                (InputMode::Guess, KeyCode::Char(c)) => app.type_letter(c),
                (InputMode::Guess, KeyCode::Backspace) => {
                    app.input_buffer.pop();
                }
                (InputMode::Guess, KeyCode::Enter) => app.submit_guess(),
                (InputMode::Guess, _) => {}
            }
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
    use crate::core::{Match, Word};
    use crate::game::GameState;
    use crate::wordlists::{Collection, MemorySource, SourceLayout};
    use rand::SeedableRng;
    use std::collections::BTreeMap;

    fn db() -> WordDatabase {
        let source = MemorySource::new()
            .with_file("en.txt", "# metadata\ncrane\nroate\nslate\n")
            .with_file("de.txt", "# metadata\nkäsee\n");
        let mut layout = SourceLayout::new();
        layout.insert(
            Language::En,
            BTreeMap::from([(Collection::Common, vec!["en.txt".to_string()])]),
        );
        layout.insert(
            Language::De,
            BTreeMap::from([(Collection::Common, vec!["de.txt".to_string()])]),
        );
        WordDatabase::init(&source, &layout).unwrap()
    }

    fn app(db: &WordDatabase) -> App<'_> {
        let mut app = App::new(db, SessionStore::default(), Language::En, StdRng::seed_from_u64(1));
        app.session
            .set_game_state(GameState::with_solution(Word::new("roate").unwrap()));
        app
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.type_letter(c);
        }
    }

    #[test]
    fn typing_is_limited_to_five_letters() {
        let db = db();
        let mut app = app(&db);
        type_word(&mut app, "Cr4neXYZ");
        assert_eq!(app.input_buffer, "crnex");
    }

    #[test]
    fn each_key_adds_one_letter() {
        let db = db();
        let mut app = app(&db);
        type_word(&mut app, "İİİİİİ");
        assert_eq!(app.input_buffer, "iiiii");
        assert_eq!(app.input_buffer.chars().count(), WORD_LENGTH);
    }

    #[test]
    fn guess_is_evaluated_and_committed() {
        let db = db();
        let mut app = app(&db);
        type_word(&mut app, "crane");
        app.submit_guess();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.game_state().puzzle().active_row(), 1);
        assert_eq!(app.keyboard().key('a').unwrap().matched, Match::Exact);

        let stored = app.store.get_by_id(app.session.id()).unwrap();
        assert_eq!(stored.game_state().puzzle().active_row(), 1);
    }

    #[test]
    fn rejected_guess_keeps_input() {
        let db = db();
        let mut app = app(&db);
        type_word(&mut app, "zzzzz");
        app.submit_guess();

        assert_eq!(app.input_buffer, "zzzzz");
        assert_eq!(app.session.game_state().puzzle().active_row(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert!(app.messages.last().unwrap().text.starts_with('\''));
    }

    #[test]
    fn solving_counts_a_win() {
        let db = db();
        let mut app = app(&db);
        type_word(&mut app, "roate");
        app.submit_guess();

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.session.past_words(), vec![Word::new("roate").unwrap()]);
    }

    #[test]
    fn hints_run_out() {
        let db = db();
        let mut app = app(&db);
        for _ in 0..5 {
            app.reveal_hint();
        }
        assert_eq!(app.session.game_state().letter_hints().len(), 5);

        app.reveal_hint();
        assert_eq!(app.messages.last().unwrap().text, "No more hints to provide");
    }

    #[test]
    fn toggle_language_starts_german_round() {
        let db = db();
        let mut app = app(&db);
        app.toggle_language();

        assert_eq!(app.session.language(), Language::De);
        assert_eq!(app.session.game_state().active_solution().to_string(), "käsee");
        assert!(app.keyboard().key('ä').is_some());
    }
}
