//! The 3x3 board.
//!
//! `Board` is the single source of truth for marked cells and for terminal
//! classification. It is a small `Copy` value (nine cells plus a fill
//! count), so search code takes private copies by value and never touches
//! the caller's board.
//!
//! ## Text Form
//!
//! Boards print and parse as nine cell characters in row-major order,
//! `X`, `O`, or `.` for empty. Whitespace is ignored when parsing:
//!
//! ```
//! use rust_ttt::board::{Board, Coord};
//! use rust_ttt::core::Player;
//!
//! let board: Board = "XO. .X. ..O".parse().unwrap();
//! assert_eq!(board.filled(), 4);
//! assert!(board.is_empty_cell(Coord::new(0, 2).unwrap()));
//! assert_eq!(board.to_string(), "XO.\n.X.\n..O\n");
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

use crate::core::{EngineError, Player, Result};
use crate::rules::GameResult;

use super::coord::{Coord, CELLS};
use super::line::Line;

/// Occupant of one board position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has marked this cell.
    #[default]
    Empty,
    /// Marked by a player.
    Marked(Player),
}

impl Cell {
    /// The player occupying this cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(p) => Some(p),
        }
    }

    /// Check if nobody has marked this cell.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Legacy numeric encoding: 0 empty, otherwise the player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Marked(p) => p.number(),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marked(p) => p.symbol(),
        }
    }
}

/// Empty cells in row-major order. Never more than nine, so kept inline.
pub type EmptyCells = SmallVec<[Coord; CELLS]>;

/// 3x3 grid of cells, row-major, with a count of marked cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr", into = "BoardRepr")]
pub struct Board {
    cells: [Cell; CELLS],
    filled: u8,
}

/// Wire form of `Board`. The fill count is checked against the cells
/// before a `Board` is built from it.
#[derive(Serialize, Deserialize)]
struct BoardRepr {
    cells: [Cell; CELLS],
    filled: u8,
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        Self {
            cells: board.cells,
            filled: board.filled,
        }
    }
}

impl TryFrom<BoardRepr> for Board {
    type Error = EngineError;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        let marked = repr.cells.iter().filter(|cell| !cell.is_empty()).count();
        if marked != repr.filled as usize {
            return Err(EngineError::InvalidBoard(format!(
                "fill count {} does not match {} marked cells",
                repr.filled, marked
            )));
        }
        Ok(Self {
            cells: repr.cells,
            filled: repr.filled,
        })
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `player`'s mark at `coord`.
    ///
    /// Marking an occupied cell is rejected with `CellOccupied` and leaves
    /// the board untouched, so the fill count always equals the number of
    /// successful calls.
    pub fn mark(&mut self, coord: Coord, player: Player) -> Result<()> {
        let cell = &mut self.cells[coord.index()];
        if let Cell::Marked(owner) = *cell {
            warn!(%coord, %player, %owner, "rejected mark on occupied cell");
            return Err(EngineError::CellOccupied {
                row: coord.row(),
                col: coord.col(),
            });
        }
        *cell = Cell::Marked(player);
        self.filled += 1;
        Ok(())
    }

    /// Board with `player`'s mark added at an empty `coord`.
    ///
    /// Used by the search, which only ever offers empty cells.
    #[must_use]
    pub(crate) fn with_mark(mut self, coord: Coord, player: Player) -> Self {
        debug_assert!(self.is_empty_cell(coord));
        self.cells[coord.index()] = Cell::Marked(player);
        self.filled += 1;
        self
    }

    /// Get the cell at a coordinate.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Check if a cell is unmarked.
    #[must_use]
    pub fn is_empty_cell(&self, coord: Coord) -> bool {
        self.cell(coord).is_empty()
    }

    /// Empty coordinates in row-major order: row 0 left to right, then
    /// row 1, then row 2.
    ///
    /// The search breaks ties by this order, so it must not change.
    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        Coord::all().filter(|&c| self.is_empty_cell(c)).collect()
    }

    /// Number of marked cells (0-9).
    #[must_use]
    pub fn filled(&self) -> usize {
        self.filled as usize
    }

    /// Check if all nine cells are marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled as usize == CELLS
    }

    /// Check if no cell is marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// First completed line in classification order and its owner.
    ///
    /// Columns are checked before rows, rows before the diagonals.
    #[must_use]
    pub fn winning_line(&self) -> Option<(Line, Player)> {
        Line::ALL.into_iter().find_map(|line| {
            let [a, b, c] = line.cells().map(|coord| self.cell(coord));
            match a {
                Cell::Marked(p) if a == b && b == c => Some((line, p)),
                _ => None,
            }
        })
    }

    /// Classify the board.
    ///
    /// Returns `Some(Winner)` if a line is complete, `Some(Draw)` if the
    /// board is full without one, `None` while the game can continue.
    #[must_use]
    pub fn terminal_line(&self) -> Option<GameResult> {
        match self.winning_line() {
            Some((_, player)) => Some(GameResult::Winner(player)),
            None if self.is_full() => Some(GameResult::Draw),
            None => None,
        }
    }

    /// Check if the game cannot continue.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal_line().is_some()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(3) {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != CELLS {
            return Err(EngineError::InvalidBoard(format!(
                "expected {} cells, found {}",
                CELLS,
                symbols.len()
            )));
        }

        let mut board = Board::new();
        for (index, symbol) in symbols.into_iter().enumerate() {
            let player = match symbol.to_ascii_uppercase() {
                '.' | '_' | '-' => continue,
                'X' => Player::X,
                'O' => Player::O,
                other => {
                    return Err(EngineError::InvalidBoard(format!(
                        "unexpected cell symbol {:?}",
                        other
                    )))
                }
            };
            if let Some(coord) = Coord::from_index(index) {
                board.mark(coord, player)?;
            }
        }
        Ok(board)
    }
}
