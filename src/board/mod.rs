//! Board model: coordinates, cells, the grid, and winning lines.
//!
//! - `Coord`: bounds-checked (row, col) position
//! - `Cell`: empty or marked by a player
//! - `Board`: the 3x3 grid, fill count, terminal classification
//! - `Line`: the eight rows, columns, and diagonals

pub mod coord;
pub mod grid;
pub mod line;

pub use coord::{Coord, CELLS, SIZE};
pub use grid::{Board, Cell, EmptyCells};
pub use line::Line;
