//! Alternating turn invariant: the two symbols take turns.

use super::super::MoveList;
use super::Invariant;

/// Invariant: players alternate turns.
///
/// Whichever symbol opened sets the baseline; after that no symbol moves
/// twice in a row.
pub struct AlternatingTurnInvariant;

impl Invariant<MoveList> for AlternatingTurnInvariant {
    fn holds(moves: &MoveList) -> bool {
        moves
            .chronological()
            .windows(2)
            .all(|pair| pair[0].player != pair[1].player)
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Move, Square, Symbol, active_symbol};

    #[test]
    fn test_empty_list_holds() {
        assert!(AlternatingTurnInvariant::holds(&MoveList::new()));
    }

    #[test]
    fn test_played_sequence_holds() {
        let mut game = GameState::new();
        for square in [Square::at(0, 0), Square::at(1, 1), Square::at(0, 2)] {
            game.select_square(square);
        }
        assert!(AlternatingTurnInvariant::holds(game.moves()));
        assert_eq!(active_symbol(game.moves()), Symbol::O);
    }

    #[test]
    fn test_o_opening_holds() {
        let moves = MoveList::from_chronological([
            Move::new(Square::at(0, 0), Symbol::O),
            Move::new(Square::at(1, 1), Symbol::X),
        ])
        .unwrap();
        assert!(AlternatingTurnInvariant::holds(&moves));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut moves = MoveList::new();
        moves.push(Move::new(Square::at(0, 0), Symbol::X));
        moves.push(Move::new(Square::at(1, 1), Symbol::X));
        assert!(!AlternatingTurnInvariant::holds(&moves));
    }
}
