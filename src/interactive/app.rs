//! TUI application state and logic

use crate::core::DIGIT_COUNT;
use crate::session::{GameSession, INCOMPLETE_GUESS_MESSAGE};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub session: GameSession,
    pub entry: [Option<u8>; DIGIT_COUNT],
    pub cursor: usize,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Entry,
    Annotate,
    WinCelebration,
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameSession::new())
    }
}

impl App {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            entry: [None; DIGIT_COUNT],
            cursor: 0,
            input_mode: InputMode::Entry,
            should_quit: false,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {
                    // In celebration mode, ignore other keys
                }
            },
            InputMode::Entry => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Tab => self.input_mode = InputMode::Annotate,
                KeyCode::Char(c) => {
                    if let Some(digit) = c.to_digit(10) {
                        self.input_digit(digit as u8);
                    }
                }
                KeyCode::Backspace => self.backspace(),
                KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
                KeyCode::Right => self.cursor = (self.cursor + 1).min(DIGIT_COUNT - 1),
                KeyCode::Enter => self.submit(),
                _ => {}
            },
            InputMode::Annotate => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Tab | KeyCode::Esc => self.input_mode = InputMode::Entry,
                KeyCode::Char(c) => {
                    if let Some(digit) = c.to_digit(10) {
                        self.session.toggle_digit_annotation(digit as u8);
                    }
                }
                _ => {}
            },
        }
    }

    /// Fill the box under the cursor and advance
    pub fn input_digit(&mut self, digit: u8) {
        self.entry[self.cursor] = Some(digit);
        if self.cursor < DIGIT_COUNT - 1 {
            self.cursor += 1;
        }
    }

    /// Clear the box under the cursor, or step back if it is already empty
    pub fn backspace(&mut self) {
        if self.entry[self.cursor].is_some() {
            self.entry[self.cursor] = None;
        } else if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Text typed so far, skipping empty boxes
    #[must_use]
    pub fn entry_text(&self) -> String {
        self.entry
            .iter()
            .flatten()
            .map(|&d| char::from(b'0' + d))
            .collect()
    }

    /// Submit the entry boxes as a guess
    ///
    /// The boxes keep their digits so the next guess can be an edit of this one.
    pub fn submit(&mut self) {
        let text = self.entry_text();
        self.cursor = 0;

        if text.len() != DIGIT_COUNT {
            self.session.set_message(INCOMPLETE_GUESS_MESSAGE);
            return;
        }

        if self.session.submit_guess(&text).is_ok() && self.session.is_solved() {
            debug!(guesses = self.session.guess_count(), "entering celebration");
            self.input_mode = InputMode::WinCelebration;
        }
    }

    /// Start over, showing the previous secret in the status line
    pub fn new_game(&mut self) {
        let previous = self.session.reveal_secret();
        self.session.new_game();
        self.session
            .set_message(format!("New game started. The last number was {previous}."));
        self.entry = [None; DIGIT_COUNT];
        self.cursor = 0;
        self.input_mode = InputMode::Entry;
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(secret) => println!("The number was {secret}."),
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

/// Event loop; returns the secret of the game in progress on quit
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<String> {
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

    Ok(app.session.reveal_secret())
}
