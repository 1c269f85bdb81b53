//! Game rules for tic-tac-toe.
//!
//! Pure functions that project a move list onto the board, the next
//! symbol to move, the winner and the draw condition. Nothing here keeps
//! state; callers recompute on every read.

pub mod board;
pub mod draw;
pub mod turn;
pub mod win;

pub use board::project_board;
pub use draw::is_draw;
pub use turn::active_symbol;
pub use win::{Line, detect_winner, winning_line};
