//! The owning game state and its mutation contract.
//!
//! `GameState` stores only the move list and the player names. Board,
//! active symbol, winner and draw are projected from them on every read;
//! nothing derived is ever cached, so stored and derived state cannot
//! diverge.

use super::invariants::{InvariantSet, MoveListInvariants};
use super::rules::{active_symbol, detect_winner, is_draw, project_board, winning_line};
use super::view::GameView;
use super::{Board, Move, MoveList, PlayerIdentity, PlayerRegistry, Square, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(PlayerIdentity),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Checks if the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// What happened to a square selection.
///
/// Rejections are silent no-ops; this only reports which case applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The move was recorded.
    Placed(Move),
    /// The square was already taken; nothing changed.
    Occupied(Square),
    /// The game had already ended; nothing changed.
    GameOver,
}

/// Complete game state: the move list plus the player registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    moves: MoveList,
    players: PlayerRegistry,
}

impl GameState {
    /// Creates a new game with the default player names.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game with the given player names.
    #[instrument]
    pub fn with_players(players: PlayerRegistry) -> Self {
        Self {
            moves: MoveList::new(),
            players,
        }
    }

    /// Claims `square` for the active symbol.
    ///
    /// No-op if the square is occupied or the game has ended.
    #[instrument(skip(self), fields(square = %square, moves = self.moves.len()))]
    pub fn select_square(&mut self, square: Square) -> Selection {
        let board = self.board();

        if winning_line(&board).is_some() || is_draw(&self.moves, &board) {
            debug!("Game already over, ignoring selection");
            return Selection::GameOver;
        }

        if !board.get(square).is_empty() {
            debug!("Square already occupied, ignoring selection");
            return Selection::Occupied(square);
        }

        let mv = Move::new(square, active_symbol(&self.moves));
        self.moves.push(mv);
        debug!(player = %mv.player, "Move placed");

        debug_assert!(
            MoveListInvariants::check_all(&self.moves).is_ok(),
            "Move list invariants violated"
        );

        Selection::Placed(mv)
    }

    /// Replaces the display name for `symbol`.
    #[instrument(skip(self, name))]
    pub fn rename_identity(&mut self, symbol: Symbol, name: impl Into<String>) {
        self.players.rename(symbol, name);
    }

    /// Clears the move list. Player names are kept.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.moves.clear();
    }

    /// The move history.
    pub fn moves(&self) -> &MoveList {
        &self.moves
    }

    /// The player registry.
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Projects the board from the move list.
    pub fn board(&self) -> Board {
        project_board(&self.moves)
    }

    /// The symbol due to move next.
    pub fn active_symbol(&self) -> Symbol {
        active_symbol(&self.moves)
    }

    /// The winning player, if any line is complete.
    pub fn winner(&self) -> Option<PlayerIdentity> {
        detect_winner(&self.board(), &self.players)
    }

    /// Checks if all squares are filled without a winner.
    pub fn is_draw(&self) -> bool {
        is_draw(&self.moves, &self.board())
    }

    /// Current status of the game.
    pub fn status(&self) -> GameStatus {
        let board = self.board();
        if let Some(winner) = detect_winner(&board, &self.players) {
            GameStatus::Won(winner)
        } else if is_draw(&self.moves, &board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Snapshot of every projection, for one render.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn view(&self) -> GameView {
        GameView::project(&self.moves, &self.players)
    }
}
