//! The eight winning lines.
//!
//! Classification walks `Line::ALL` in a fixed order: the three columns,
//! then the three rows, then the main diagonal, then the anti-diagonal.
//! The order only decides which line is reported when several are
//! complete at once; it never changes who won.

use serde::{Deserialize, Serialize};

use super::coord::{Coord, SIZE};

/// A row, column, or diagonal of three cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Column 0-2, top to bottom.
    Column(u8),
    /// Row 0-2, left to right.
    Row(u8),
    /// (0,0) to (2,2).
    Diagonal,
    /// (2,0) to (0,2).
    AntiDiagonal,
}

impl Line {
    /// All lines in classification order.
    pub const ALL: [Line; 8] = [
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// The three cells of this line.
    ///
    /// Column and row indices past the board are clamped to the last
    /// column or row, so every returned `Coord` is on the board.
    #[must_use]
    pub fn cells(self) -> [Coord; 3] {
        let at = Coord::at;
        let clamp = |i: u8| (i as usize).min(SIZE - 1);
        match self {
            Line::Column(c) => {
                let c = clamp(c);
                [at(0, c), at(1, c), at(2, c)]
            }
            Line::Row(r) => {
                let r = clamp(r);
                [at(r, 0), at(r, 1), at(r, 2)]
            }
            Line::Diagonal => [at(0, 0), at(1, 1), at(2, 2)],
            Line::AntiDiagonal => [at(2, 0), at(1, 1), at(0, 2)],
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Column(c) => write!(f, "column {}", c),
            Line::Row(r) => write!(f, "row {}", r),
            Line::Diagonal => write!(f, "diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_columns_rows_diagonals() {
        assert!(matches!(Line::ALL[0], Line::Column(0)));
        assert!(matches!(Line::ALL[3], Line::Row(0)));
        assert_eq!(Line::ALL[6], Line::Diagonal);
        assert_eq!(Line::ALL[7], Line::AntiDiagonal);
    }

    #[test]
    fn test_every_cell_covered() {
        let mut counts = [0; 9];
        for line in Line::ALL {
            for cell in line.cells() {
                counts[cell.index()] += 1;
            }
        }
        // Center sits on 4 lines, corners on 3, edges on 2.
        assert_eq!(counts, [3, 2, 3, 2, 4, 2, 3, 2, 3]);
    }

    #[test]
    fn test_anti_diagonal_cells() {
        let cells: Vec<_> = Line::AntiDiagonal
            .cells()
            .iter()
            .map(|c| (c.row(), c.col()))
            .collect();
        assert_eq!(cells, vec![(2, 0), (1, 1), (0, 2)]);
    }

    #[test]
    fn test_out_of_range_index_stays_on_board() {
        assert_eq!(Line::Column(3).cells(), Line::Column(2).cells());
        assert_eq!(Line::Row(200).cells(), Line::Row(2).cells());

        let board = crate::board::Board::new();
        for coord in Line::Row(u8::MAX).cells() {
            assert!(coord.index() < 9);
            assert!(board.is_empty_cell(coord));
        }
    }
}
