//! Unique squares invariant: no square is claimed twice.

use super::super::MoveList;
use super::Invariant;

/// Invariant: every move claims a different square.
///
/// Equivalently, the projected board has one occupied cell per move.
pub struct UniqueSquaresInvariant;

impl Invariant<MoveList> for UniqueSquaresInvariant {
    fn holds(moves: &MoveList) -> bool {
        let mut seen = [false; 9];
        moves.iter().all(|mv| {
            let index = mv.square.index();
            !std::mem::replace(&mut seen[index], true)
        })
    }

    fn description() -> &'static str {
        "Each square is claimed by at most one move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Square, Symbol, project_board};

    #[test]
    fn test_empty_list_holds() {
        assert!(UniqueSquaresInvariant::holds(&MoveList::new()));
    }

    #[test]
    fn test_distinct_squares_hold() {
        let moves = MoveList::from_chronological([
            Move::new(Square::at(0, 0), Symbol::X),
            Move::new(Square::at(0, 1), Symbol::O),
        ])
        .unwrap();
        assert!(UniqueSquaresInvariant::holds(&moves));
        assert_eq!(project_board(&moves).occupied_count(), moves.len());
    }

    #[test]
    fn test_repeated_square_violates() {
        let mut moves = MoveList::new();
        moves.push(Move::new(Square::at(2, 0), Symbol::X));
        moves.push(Move::new(Square::at(2, 0), Symbol::O));

        assert!(!UniqueSquaresInvariant::holds(&moves));
        // The projection loses a move once squares repeat.
        assert_ne!(project_board(&moves).occupied_count(), moves.len());
    }
}
