//! Board projection: replay a move list into a grid.

use super::super::{Board, Cell, MoveList};
use tracing::instrument;

/// Replays `moves` onto an empty board.
///
/// The result has exactly `moves.len()` occupied cells.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn project_board(moves: &MoveList) -> Board {
    let mut board = Board::new();
    for mv in moves {
        board.set(mv.square, Cell::Occupied(mv.player));
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Square, Symbol};

    #[test]
    fn test_empty_moves_empty_board() {
        let board = project_board(&MoveList::new());
        assert_eq!(board, Board::new());
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_each_move_lands_on_its_square() {
        let moves = [
            Move::new(Square::at(0, 2), Symbol::X),
            Move::new(Square::at(1, 1), Symbol::O),
            Move::new(Square::at(2, 0), Symbol::X),
            Move::new(Square::at(0, 0), Symbol::O),
        ];
        let list = MoveList::from_chronological(moves).unwrap();
        let board = project_board(&list);

        assert_eq!(board.occupied_count(), moves.len());
        for mv in moves {
            assert_eq!(board.get(mv.square), Cell::Occupied(mv.player));
        }
        assert_eq!(board.get(Square::at(2, 2)), Cell::Empty);
    }

    #[test]
    fn test_full_list_fills_board() {
        let list = MoveList::from_chronological(
            Square::ALL
                .iter()
                .enumerate()
                .map(|(i, square)| {
                    let player = if i % 2 == 0 { Symbol::X } else { Symbol::O };
                    Move::new(*square, player)
                }),
        )
        .unwrap();
        assert!(project_board(&list).is_full());
    }
}
