//! Bounded length invariant: a game holds at most nine moves.

use super::super::MoveList;
use super::Invariant;

/// Invariant: the list never exceeds [`MoveList::CAPACITY`] moves.
pub struct BoundedLengthInvariant;

impl Invariant<MoveList> for BoundedLengthInvariant {
    fn holds(moves: &MoveList) -> bool {
        moves.len() <= MoveList::CAPACITY
    }

    fn description() -> &'static str {
        "A game has at most nine moves"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Square, Symbol};

    #[test]
    fn test_full_game_holds() {
        let mut moves = MoveList::new();
        for square in Square::ALL {
            moves.push(Move::new(square, Symbol::X));
        }
        assert!(BoundedLengthInvariant::holds(&moves));
    }

    #[test]
    fn test_overflow_violates() {
        let mut moves = MoveList::new();
        for square in Square::ALL {
            moves.push(Move::new(square, Symbol::X));
        }
        moves.push(Move::new(Square::at(0, 0), Symbol::O));
        assert!(!BoundedLengthInvariant::holds(&moves));
    }
}
