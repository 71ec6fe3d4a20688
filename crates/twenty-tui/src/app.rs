//! Application state: the live session, settings, transcript view, and
//! input line.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use twenty_core::{Catalogue, GameConfig, GameResult, Mode, QuestionOracle, Session, parse_answer};

use crate::shared::{OutputLine, OutputStyle};
use crate::views::{self, actions::Action};

/// Main application state.
pub struct TuiApp {
    /// Characters to play with.
    pub catalogue: Catalogue,
    /// Settings for the next game.
    pub config: GameConfig,
    /// The game being played.
    pub session: Session,
    /// Answers free-text questions in "You Guess" mode.
    pub oracle: Box<dyn QuestionOracle>,
    /// Short description of the oracle for the sidebar.
    pub oracle_label: String,
    /// Styled transcript lines.
    pub output_lines: Vec<OutputLine>,
    /// Scroll offset from the bottom (0 = fully scrolled down).
    pub output_scroll: u16,
    /// Current input text.
    pub input_text: String,
    /// Cursor position within input text (byte offset).
    pub input_cursor: usize,
    /// Whether the help popup is visible.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    shown: usize,
}

impl TuiApp {
    /// Create the app and start the first game.
    pub fn new(
        catalogue: Catalogue,
        config: GameConfig,
        oracle: Box<dyn QuestionOracle>,
        oracle_label: impl Into<String>,
    ) -> Result<Self, String> {
        let session = Session::new(&catalogue, config.clone())
            .map_err(|e| format!("failed to start game: {e}"))?;
        let mut app = Self {
            catalogue,
            config,
            session,
            oracle,
            oracle_label: oracle_label.into(),
            output_lines: Vec::new(),
            output_scroll: 0,
            input_text: String::new(),
            input_cursor: 0,
            show_help: false,
            should_quit: false,
            shown: 0,
        };
        app.start();
        Ok(app)
    }

    fn start(&mut self) {
        let result = self.session.start().map(|_| ());
        self.after(result);
    }

    /// Start over with a new secret and the same settings.
    pub fn new_game(&mut self) {
        self.session.reset();
        self.begin();
    }

    /// Rebuild the session from the current settings and start it. On
    /// failure the settings roll back to those of the running session.
    fn restart(&mut self) {
        match Session::new(&self.catalogue, self.config.clone()) {
            Ok(session) => {
                self.session = session;
                self.begin();
            }
            Err(e) => {
                self.config = self.session.config().clone();
                self.push_output(OutputStyle::Error, &e.to_string());
            }
        }
    }

    fn begin(&mut self) {
        self.shown = 0;
        self.push_output(
            OutputStyle::System,
            &format!(
                "--- New game: {} | {} ---",
                self.config.mode, self.config.difficulty
            ),
        );
        self.start();
    }

    /// Switch between "You Guess" and "I Guess" and start a new game.
    pub fn cycle_mode(&mut self) {
        self.config.mode = self.config.mode.toggled();
        self.restart();
    }

    /// Move to the next difficulty and start a new game.
    pub fn cycle_difficulty(&mut self) {
        let available = self.catalogue.difficulties();
        let mut next = self.config.difficulty.next();
        while !available.contains(&next) && next != self.config.difficulty {
            next = next.next();
        }
        self.config.difficulty = next;
        self.restart();
    }

    /// Move to the next question strategy and start a new game.
    pub fn cycle_strategy(&mut self) {
        self.config.strategy = self.config.strategy.next();
        self.restart();
    }

    /// Submit the input line as a question, guess, or hint request.
    pub fn submit_input(&mut self) {
        let input = self.input_text.trim().to_string();
        if input.is_empty() {
            if self.session.state().is_terminal() {
                self.new_game();
            }
            return;
        }
        self.input_text.clear();
        self.input_cursor = 0;

        let result = match self.session.mode() {
            Mode::HumanGuesses => self.session.submit(&input, self.oracle.as_ref()).map(|_| ()),
            Mode::SystemGuesses => match parse_answer(&input) {
                Some(yes) => self.session.answer(yes).map(|_| ()),
                None => {
                    self.push_output(OutputStyle::Error, "Answer with y or n.");
                    return;
                }
            },
        };
        self.after(result);
    }

    /// Answer the pending question in "I Guess" mode.
    pub fn answer(&mut self, yes: bool) {
        let result = self.session.answer(yes).map(|_| ());
        self.after(result);
    }

    /// Run a clicked action.
    pub fn run_action(&mut self, action: Action) {
        match action {
            Action::Hint => {
                let result = self.session.hint().map(|_| ());
                self.after(result);
            }
            Action::Guess => self.prefill_input("guess "),
            Action::Yes => self.answer(true),
            Action::No => self.answer(false),
            Action::NewGame => self.new_game(),
            Action::Mode => self.cycle_mode(),
            Action::Difficulty => self.cycle_difficulty(),
            Action::Strategy => self.cycle_strategy(),
            Action::Help => self.show_help = !self.show_help,
        }
    }

    fn after(&mut self, result: GameResult<()>) {
        self.sync();
        if let Err(e) = result {
            self.push_output(OutputStyle::Error, &e.to_string());
        }
    }

    /// Copy new transcript entries into the output panel.
    fn sync(&mut self) {
        let fresh: Vec<(OutputStyle, String)> = self
            .session
            .transcript()
            .since(self.shown)
            .iter()
            .map(|e| (OutputStyle::for_entry(e), e.text()))
            .collect();
        self.shown += fresh.len();
        for (style, text) in fresh {
            self.push_output(style, &text);
        }
    }

    /// Prefill the input (from a button click).
    pub fn prefill_input(&mut self, text: &str) {
        self.input_text = text.to_string();
        self.input_cursor = self.input_text.len();
    }

    /// Push a character at the cursor position.
    pub fn push_char(&mut self, c: char) {
        self.input_text.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.input_cursor > 0 {
            let prev = self.input_text[..self.input_cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.input_text.remove(prev);
            self.input_cursor = prev;
        }
    }

    /// Delete the character at the cursor.
    pub fn delete_char(&mut self) {
        if self.input_cursor < self.input_text.len() {
            self.input_text.remove(self.input_cursor);
        }
    }

    /// Move cursor left.
    pub fn cursor_left(&mut self) {
        if self.input_cursor > 0 {
            self.input_cursor = self.input_text[..self.input_cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    /// Move cursor right.
    pub fn cursor_right(&mut self) {
        if self.input_cursor < self.input_text.len() {
            self.input_cursor = self.input_text[self.input_cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.input_cursor + i)
                .unwrap_or(self.input_text.len());
        }
    }

    /// Scroll output up.
    pub fn scroll_up(&mut self) {
        self.output_scroll = self.output_scroll.saturating_add(1);
    }

    /// Scroll output down.
    pub fn scroll_down(&mut self) {
        self.output_scroll = self.output_scroll.saturating_sub(1);
    }

    fn push_output(&mut self, style: OutputStyle, text: &str) {
        for line in text.lines() {
            self.output_lines.push(OutputLine {
                style,
                text: line.to_string(),
            });
        }
        self.output_scroll = 0;
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::F(1) => self.show_help = !self.show_help,
            KeyCode::F(2) => self.cycle_mode(),
            KeyCode::F(3) => self.cycle_difficulty(),
            KeyCode::F(4) => self.cycle_strategy(),
            KeyCode::F(5) => self.new_game(),
            KeyCode::Up => self.scroll_up(),
            KeyCode::Down => self.scroll_down(),
            KeyCode::Esc => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.input_text.clear();
                    self.input_cursor = 0;
                }
            }
            _ => match self.session.mode() {
                Mode::HumanGuesses => self.handle_text_key(key),
                Mode::SystemGuesses => self.handle_answer_key(key),
            },
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete_char(),
            KeyCode::Left => self.cursor_left(),
            KeyCode::Right => self.cursor_right(),
            KeyCode::Home => self.input_cursor = 0,
            KeyCode::End => self.input_cursor = self.input_text.len(),
            KeyCode::Char('?') if self.input_text.is_empty() => {
                self.show_help = !self.show_help;
            }
            KeyCode::Char(c) => self.push_char(c),
            _ => {}
        }
    }

    fn handle_answer_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => self.answer(true),
            KeyCode::Char('n') | KeyCode::Char('N') => self.answer(false),
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Enter if self.session.state().is_terminal() => self.new_game(),
            _ => {}
        }
    }

    /// Handle a mouse event. `screen` is the full terminal area.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, screen: Rect) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let regions = views::layout(screen);
                if let Some(action) = views::actions::hit_test(
                    mouse.column,
                    mouse.row,
                    regions.actions,
                    self.session.mode(),
                ) {
                    self.run_action(action);
                }
            }
            MouseEventKind::ScrollUp => self.scroll_up(),
            MouseEventKind::ScrollDown => self.scroll_down(),
            _ => {}
        }
    }
}
