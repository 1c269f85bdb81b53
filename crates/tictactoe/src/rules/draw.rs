//! Draw detection logic for tic-tac-toe.

use super::super::{Board, MoveList};
use super::win::winning_line;
use tracing::instrument;

/// Checks if the game is drawn: all nine moves played and no line completed.
#[instrument(skip(moves, board), fields(moves = moves.len()))]
pub fn is_draw(moves: &MoveList, board: &Board) -> bool {
    moves.is_complete() && winning_line(board).is_none()
}
