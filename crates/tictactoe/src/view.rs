//! Read-only snapshot handed to the presentation layer on each render.

use super::rules::{Line, active_symbol, is_draw, project_board, winning_line};
use super::{Board, Move, MoveList, PlayerIdentity, PlayerRegistry, Symbol};
use derive_getters::Getters;
use serde::Serialize;

/// Every projection of a [`crate::GameState`] at one point in time.
///
/// Built fresh from the move list and registry; holding one never affects
/// the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameView {
    /// Projected board.
    board: Board,
    /// Symbol due to move next.
    active_symbol: Symbol,
    /// Winner, if any line is complete.
    winner: Option<PlayerIdentity>,
    /// The completed line the winner holds.
    winning_line: Option<Line>,
    /// All squares filled and no winner.
    is_draw: bool,
    /// Moves newest-first, as the log lists them.
    log: Vec<Move>,
    /// Player names.
    players: PlayerRegistry,
}

impl GameView {
    pub(crate) fn project(moves: &MoveList, players: &PlayerRegistry) -> Self {
        let board = project_board(moves);
        let line = winning_line(&board);
        Self {
            active_symbol: active_symbol(moves),
            winner: line.map(|(_, symbol)| players.identity(symbol)),
            winning_line: line.map(|(line, _)| line),
            is_draw: is_draw(moves, &board),
            log: moves.recent_first().copied().collect(),
            players: players.clone(),
            board,
        }
    }

    /// Checks if the game has ended.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }
}
