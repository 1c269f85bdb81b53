//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark placed on the board by a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Symbol {
    /// Symbol X (always moves first).
    X,
    /// Symbol O.
    O,
}

impl Symbol {
    /// The symbol that opens every game.
    pub const FIRST: Symbol = Symbol::X;

    /// Returns the opposing symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// Coordinate on the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{row},{col}")]
#[serde(try_from = "SquareRepr")]
pub struct Square {
    row: usize,
    col: usize,
}

#[derive(Deserialize)]
struct SquareRepr {
    row: usize,
    col: usize,
}

impl TryFrom<SquareRepr> for Square {
    type Error = SquareError;

    fn try_from(repr: SquareRepr) -> Result<Self, Self::Error> {
        Square::new(repr.row, repr.col)
    }
}

impl Square {
    /// Side length of the board.
    pub const SIDE: usize = 3;

    /// All 9 squares in row-major order.
    pub const ALL: [Square; 9] = [
        Square::at(0, 0),
        Square::at(0, 1),
        Square::at(0, 2),
        Square::at(1, 0),
        Square::at(1, 1),
        Square::at(1, 2),
        Square::at(2, 0),
        Square::at(2, 1),
        Square::at(2, 2),
    ];

    /// Creates a square, rejecting coordinates outside `0..3`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, SquareError> {
        if row < Self::SIDE && col < Self::SIDE {
            Ok(Self::at(row, col))
        } else {
            Err(SquareError::OutOfRange { row, col })
        }
    }

    /// Unchecked constructor for compile-time tables.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row * Self::SIDE + self.col
    }

    /// Creates a square from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Error raised for coordinates that fall off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SquareError {
    /// Row or column is not in `0..3`.
    #[display("Square ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// Content of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Square occupied by a symbol.
    Occupied(Symbol),
}

impl Cell {
    /// Returns the occupying symbol, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are always projected from a move list; nothing outside the
/// crate can write to one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given square.
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    pub(crate) fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.index()] = cell;
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the board as three rows of three cells.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        let c = &self.cells;
        [[c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]]]
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }
}

impl std::fmt::Display for Board {
    /// Empty cells show their 1-based board number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.rows().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Empty => write!(f, "{}", row * Square::SIDE + col + 1)?,
                    Cell::Occupied(symbol) => write!(f, "{symbol}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// A move: the symbol that claimed a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{player} selected {square}")]
pub struct Move {
    /// The square claimed.
    pub square: Square,
    /// The symbol placed on it.
    pub player: Symbol,
}

impl Move {
    /// Creates a new move.
    pub fn new(square: Square, player: Symbol) -> Self {
        Self { square, player }
    }

    /// Returns the square of this move.
    pub fn square(&self) -> Square {
        self.square
    }

    /// Returns the symbol placed by this move.
    pub fn player(&self) -> Symbol {
        self.player
    }
}
