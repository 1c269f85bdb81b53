//! Tic-tac-toe derivation engine.
//!
//! A game is nothing but an ordered list of moves and a name for each
//! symbol. Everything else is projected from those two on demand:
//!
//! - **Board**: [`project_board`] replays the moves onto a 3x3 grid
//! - **Turn**: [`active_symbol`] alternates from whoever opened the game
//! - **Winner**: [`detect_winner`] scans the eight lines, first match wins
//! - **Draw**: [`is_draw`] is nine moves with no winner
//!
//! [`GameState`] owns the two pieces of state and exposes the mutation
//! contract (`select_square`, `rename_identity`, `restart`).
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameState, Square, Symbol};
//!
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     game.select_square(Square::new(row, col).unwrap());
//! }
//! assert_eq!(game.winner().map(|w| w.name().clone()), Some("Max".to_string()));
//! assert_eq!(game.active_symbol(), Symbol::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod invariants;
mod moves;
mod players;
mod rules;
mod state;
mod types;
mod view;

pub use invariants::{
    AlternatingTurnInvariant, BoundedLengthInvariant, Invariant, InvariantSet,
    InvariantViolation, MoveListInvariants, UniqueSquaresInvariant,
};
pub use moves::{MoveList, MoveListError};
pub use players::{DEFAULT_O_NAME, DEFAULT_X_NAME, PlayerIdentity, PlayerRegistry};
pub use rules::{Line, active_symbol, detect_winner, is_draw, project_board, winning_line};
pub use state::{GameStatus, GameState, Selection};
pub use types::{Board, Cell, Move, Square, SquareError, Symbol};
pub use view::GameView;
