//! Board coordinates.
//!
//! A `Coord` is always inside the 3x3 grid: the only constructors check
//! bounds, so code holding a `Coord` never has to.
//!
//! ```
//! use rust_ttt::board::Coord;
//!
//! let c = Coord::new(1, 2).unwrap();
//! assert_eq!(c.index(), 5);
//! assert_eq!(Coord::from_index(5), Some(c));
//! assert!(Coord::new(3, 0).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Result};

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// A (row, col) position on the board.
///
/// Serializes as a `(row, col)` pair and goes back through `Coord::new`
/// on the way in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate, rejecting anything outside [0,3)x[0,3).
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= SIZE || col >= SIZE {
            return Err(EngineError::OutOfBounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Build from indices already known to be in range.
    pub(super) const fn at(row: usize, col: usize) -> Self {
        debug_assert!(row < SIZE && col < SIZE);
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Coordinate for a row-major index in 0..9.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= CELLS {
            return None;
        }
        Some(Self {
            row: (index / SIZE) as u8,
            col: (index % SIZE) as u8,
        })
    }

    /// Row (0-2).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column (0-2).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index (0-8).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * SIZE + self.col as usize
    }

    /// All coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELLS).filter_map(Coord::from_index)
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = EngineError;

    fn try_from((row, col): (usize, usize)) -> Result<Self> {
        Coord::new(row, col)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row(), coord.col())
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
