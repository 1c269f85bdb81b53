//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, PlayerIdentity, PlayerRegistry, Square, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight winning lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// (0,0) to (2,2).
    MainDiagonal,
    /// (0,2) to (2,0).
    AntiDiagonal,
}

impl Line {
    /// All lines in scan order: rows, then columns, then diagonals.
    pub const ALL: [Line; 8] = [
        Line::TopRow,
        Line::MiddleRow,
        Line::BottomRow,
        Line::LeftColumn,
        Line::CenterColumn,
        Line::RightColumn,
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// The three squares making up this line.
    pub fn squares(self) -> [Square; 3] {
        match self {
            // Rows
            Line::TopRow => [Square::at(0, 0), Square::at(0, 1), Square::at(0, 2)],
            Line::MiddleRow => [Square::at(1, 0), Square::at(1, 1), Square::at(1, 2)],
            Line::BottomRow => [Square::at(2, 0), Square::at(2, 1), Square::at(2, 2)],
            // Columns
            Line::LeftColumn => [Square::at(0, 0), Square::at(1, 0), Square::at(2, 0)],
            Line::CenterColumn => [Square::at(0, 1), Square::at(1, 1), Square::at(2, 1)],
            Line::RightColumn => [Square::at(0, 2), Square::at(1, 2), Square::at(2, 2)],
            // Diagonals
            Line::MainDiagonal => [Square::at(0, 0), Square::at(1, 1), Square::at(2, 2)],
            Line::AntiDiagonal => [Square::at(0, 2), Square::at(1, 1), Square::at(2, 0)],
        }
    }

    /// Checks if `square` lies on this line.
    pub fn contains(self, square: Square) -> bool {
        self.squares().contains(&square)
    }
}

/// Finds the first completed line in scan order.
///
/// Returns the line and the symbol holding it, or `None` when no line has
/// three equal marks.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Symbol)> {
    for line in Line::ALL {
        let [a, b, c] = line.squares();
        let cell = board.get(a);
        if let Cell::Occupied(symbol) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return Some((line, symbol));
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns the identity registered for the winning symbol, `None` otherwise.
#[instrument(skip(board, players))]
pub fn detect_winner(board: &Board, players: &PlayerRegistry) -> Option<PlayerIdentity> {
    winning_line(board).map(|(_, symbol)| players.identity(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(squares: [Square; 3], symbol: Symbol) -> Board {
        let mut board = Board::new();
        for square in squares {
            board.set(square, Cell::Occupied(symbol));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(detect_winner(&board, &PlayerRegistry::default()), None);
    }

    #[test]
    fn test_every_line_wins() {
        let players = PlayerRegistry::default();
        for line in Line::ALL {
            for symbol in [Symbol::X, Symbol::O] {
                let board = board_with(line.squares(), symbol);
                assert_eq!(winning_line(&board), Some((line, symbol)), "{line:?}");
                assert_eq!(
                    detect_winner(&board, &players),
                    Some(players.identity(symbol))
                );
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Square::at(0, 0), Cell::Occupied(Symbol::X));
        board.set(Square::at(0, 1), Cell::Occupied(Symbol::X));
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = board_with(Line::MiddleRow.squares(), Symbol::O);
        board.set(Square::at(1, 2), Cell::Occupied(Symbol::X));
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_no_winner_on_draw_board() {
        // X O X / X O O / O X X
        let mut board = Board::new();
        let layout = [
            Symbol::X, Symbol::O, Symbol::X,
            Symbol::X, Symbol::O, Symbol::O,
            Symbol::O, Symbol::X, Symbol::X,
        ];
        for (square, symbol) in Square::ALL.iter().zip(layout) {
            board.set(*square, Cell::Occupied(symbol));
        }
        assert!(board.is_full());
        assert_eq!(detect_winner(&board, &PlayerRegistry::default()), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Top row and left column both complete; rows are scanned first.
        let mut board = board_with(Line::TopRow.squares(), Symbol::X);
        for square in Line::LeftColumn.squares() {
            board.set(square, Cell::Occupied(Symbol::X));
        }
        assert_eq!(winning_line(&board), Some((Line::TopRow, Symbol::X)));
    }

    #[test]
    fn test_winner_uses_registered_name() {
        let mut players = PlayerRegistry::default();
        players.rename(Symbol::O, "Alex");
        let board = board_with(Line::AntiDiagonal.squares(), Symbol::O);
        let winner = detect_winner(&board, &players).unwrap();
        assert_eq!(winner.name(), "Alex");
    }
}
