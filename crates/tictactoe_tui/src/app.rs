//! Application state and key handling.

use crate::input::{digit_square, move_cursor};
use crossterm::event::KeyCode;
use tictactoe::{GameState, GameStatus, Selection, Square, Symbol};
use tracing::{debug, instrument};

/// Longest name the rename editor accepts.
pub const MAX_NAME_LEN: usize = 20;

/// In-progress rename of one player.
///
/// Lives only in the front-end; the game sees the name once it is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEditor {
    symbol: Symbol,
    buffer: String,
}

impl NameEditor {
    /// Starts editing from the current name.
    pub fn new(symbol: Symbol, current: &str) -> Self {
        Self {
            symbol,
            buffer: current.to_string(),
        }
    }

    /// Symbol whose name is being edited.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Text typed so far.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Square,
    editor: Option<NameEditor>,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application around `game`.
    pub fn new(game: GameState) -> Self {
        let mut app = Self {
            game,
            cursor: Square::ALL[4],
            editor: None,
            status_message: String::new(),
            should_quit: false,
        };
        app.refresh_status();
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Square under the board cursor.
    pub fn cursor(&self) -> Square {
        self.cursor
    }

    /// The open rename editor, if any.
    pub fn editor(&self) -> Option<&NameEditor> {
        self.editor.as_ref()
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Checks if the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.editor.is_some() {
            self.handle_editor_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('x') | KeyCode::Char('X') => self.start_rename(Symbol::X),
            KeyCode::Char('o') | KeyCode::Char('O') => self.start_rename(Symbol::O),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Char(c) => {
                if let Some(square) = digit_square(c) {
                    self.cursor = square;
                    self.select(square);
                }
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    /// Claims `square` for the player to move.
    #[instrument(skip(self))]
    pub fn select(&mut self, square: Square) {
        match self.game.select_square(square) {
            Selection::Placed(mv) => {
                debug!(%mv, "Move accepted");
                self.refresh_status();
            }
            Selection::Occupied(square) => {
                self.status_message = format!("Square {} is already taken.", square);
            }
            Selection::GameOver => {
                self.status_message = "The game is over. Press 'r' for a rematch.".to_string();
            }
        }
    }

    /// Starts a rematch; player names are kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.restart();
        self.editor = None;
        self.refresh_status();
    }

    fn start_rename(&mut self, symbol: Symbol) {
        debug!(%symbol, "Editing player name");
        self.editor = Some(NameEditor::new(symbol, self.game.players().name(symbol)));
        self.status_message = format!("Editing {}: Enter to save, Esc to cancel.", symbol);
    }

    fn handle_editor_key(&mut self, key: KeyCode) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };

        match key {
            KeyCode::Enter => {
                let name = editor.buffer.trim().to_string();
                if name.is_empty() {
                    self.status_message = "A player needs a name.".to_string();
                    return;
                }
                let symbol = editor.symbol;
                self.editor = None;
                self.game.rename_identity(symbol, name);
                self.refresh_status();
            }
            KeyCode::Esc => {
                self.editor = None;
                self.refresh_status();
            }
            KeyCode::Backspace => {
                editor.buffer.pop();
            }
            KeyCode::Char(c) if editor.buffer.chars().count() < MAX_NAME_LEN => {
                editor.buffer.push(c);
            }
            _ => {}
        }
    }

    fn refresh_status(&mut self) {
        let players = self.game.players();
        self.status_message = match self.game.status() {
            GameStatus::InProgress => {
                let symbol = self.game.active_symbol();
                format!("{}'s turn ({}).", players.name(symbol), symbol)
            }
            GameStatus::Won(winner) => {
                format!("{} won! Press 'r' for a rematch or 'q' to quit.", winner)
            }
            GameStatus::Draw => "It's a draw! Press 'r' for a rematch or 'q' to quit.".to_string(),
        };
    }
}
