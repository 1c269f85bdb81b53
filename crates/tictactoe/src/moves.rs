//! The move list: the canonical history of a game.

use super::types::{Move, Square, Symbol};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Ordered history of moves.
///
/// Stored oldest-first. The log view, newest-first, is derived on demand
/// through [`MoveList::recent_first`].
///
/// Every square appears at most once, the two symbols strictly alternate
/// from whichever one opened, and the list never exceeds
/// [`MoveList::CAPACITY`] entries. The public constructors validate this;
/// inside the crate only [`crate::GameState::select_square`] appends.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Move>", into = "Vec<Move>")]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Maximum number of moves in one game.
    pub const CAPACITY: usize = 9;

    /// Creates an empty move list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from moves in the order they were played.
    #[instrument(skip(moves))]
    pub fn from_chronological(
        moves: impl IntoIterator<Item = Move>,
    ) -> Result<Self, MoveListError> {
        let moves: Vec<Move> = moves.into_iter().collect();
        if moves.len() > Self::CAPACITY {
            return Err(MoveListError::TooManyMoves { count: moves.len() });
        }

        let mut seen = [false; Self::CAPACITY];
        for mv in &moves {
            let slot = &mut seen[mv.square.index()];
            if *slot {
                return Err(MoveListError::DuplicateSquare { square: mv.square });
            }
            *slot = true;
        }

        if let Some(pair) = moves.windows(2).find(|pair| pair[0].player == pair[1].player) {
            let mv = pair[1];
            return Err(MoveListError::OutOfTurn {
                square: mv.square,
                player: mv.player,
            });
        }

        Ok(Self { moves })
    }

    /// Builds a list from moves given newest-first, the order the log displays.
    #[instrument(skip(moves))]
    pub fn from_recent_first(
        moves: impl IntoIterator<Item = Move>,
    ) -> Result<Self, MoveListError> {
        let mut moves: Vec<Move> = moves.into_iter().collect();
        moves.reverse();
        Self::from_chronological(moves)
    }

    /// Appends a move. The caller guarantees the square is free and the list has room.
    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn clear(&mut self) {
        self.moves.clear();
    }

    /// Number of moves played.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Checks if no move has been played.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Checks if all nine squares have been claimed.
    pub fn is_complete(&self) -> bool {
        self.moves.len() == Self::CAPACITY
    }

    /// The opening move of the game.
    pub fn first(&self) -> Option<&Move> {
        self.moves.first()
    }

    /// The most recent move.
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Moves in the order they were played.
    pub fn chronological(&self) -> &[Move] {
        &self.moves
    }

    /// Iterates moves oldest-first.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Iterates moves newest-first, as the move log shows them.
    pub fn recent_first(&self) -> std::iter::Rev<std::slice::Iter<'_, Move>> {
        self.moves.iter().rev()
    }

    /// Checks if a move on `square` has been recorded.
    pub fn contains(&self, square: Square) -> bool {
        self.moves.iter().any(|mv| mv.square == square)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl TryFrom<Vec<Move>> for MoveList {
    type Error = MoveListError;

    fn try_from(moves: Vec<Move>) -> Result<Self, Self::Error> {
        Self::from_chronological(moves)
    }
}

impl From<MoveList> for Vec<Move> {
    fn from(list: MoveList) -> Self {
        list.moves
    }
}

/// Rejected attempt to build a malformed move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveListError {
    /// Two moves claim the same square.
    #[display("Square {square} is claimed more than once")]
    DuplicateSquare {
        /// The repeated square.
        square: Square,
    },

    /// More moves than the board has squares.
    #[display("{count} moves exceed the 9 squares on the board")]
    TooManyMoves {
        /// Number of moves supplied.
        count: usize,
    },

    /// A symbol moves twice in a row.
    #[display("{player} cannot play {square}: it is not {player}'s turn")]
    OutOfTurn {
        /// Square of the offending move.
        square: Square,
        /// Symbol that moved out of turn.
        player: Symbol,
    },
}
