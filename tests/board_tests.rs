//! Board classification and bookkeeping tests.

use rust_ttt::board::{Board, Cell, Coord, Line};
use rust_ttt::core::{EngineError, Player};
use rust_ttt::rules::GameResult;

fn at(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

// =============================================================================
// Terminal Classification
// =============================================================================

#[test]
fn test_every_line_wins_for_either_player() {
    for line in Line::ALL {
        for player in Player::ALL {
            let mut board = Board::new();
            for coord in line.cells() {
                board.mark(coord, player).unwrap();
            }

            assert_eq!(
                board.terminal_line(),
                Some(GameResult::Winner(player)),
                "{} filled by {} should win",
                line,
                player
            );
            assert_eq!(board.winning_line(), Some((line, player)));
        }
    }
}

#[test]
fn test_line_wins_with_other_marks_present() {
    // Column 2 for O, with X marks scattered elsewhere.
    let board: Board = "X.O XXO ..O".parse().unwrap();
    assert_eq!(board.terminal_line(), Some(GameResult::Winner(Player::O)));
    assert_eq!(board.winning_line(), Some((Line::Column(2), Player::O)));

    // Anti-diagonal for X.
    let board: Board = "OOX .X. XO.".parse().unwrap();
    assert_eq!(board.winning_line(), Some((Line::AntiDiagonal, Player::X)));
}

#[test]
fn test_full_board_without_line_is_draw() {
    for text in ["XOX XOO OXX", "XXO OOX XOX", "OXO XXO XOX"] {
        let board: Board = text.parse().unwrap();
        assert!(board.is_full(), "{}", text);
        assert_eq!(board.terminal_line(), Some(GameResult::Draw), "{}", text);
        assert!(board.is_terminal());
    }
}

#[test]
fn test_no_false_positives() {
    assert_eq!(Board::new().terminal_line(), None);

    for text in ["XO. ... ...", "XOX ... ...", "XO. OX. ...", "XOX OXO ...", "XX. OO. ..."] {
        let board: Board = text.parse().unwrap();
        assert_eq!(board.terminal_line(), None, "{}", text);
        assert!(!board.is_terminal());
    }
}

#[test]
fn test_mixed_line_is_not_a_win() {
    // Row 0 is full but mixed.
    let board: Board = "XXO ... ...".parse().unwrap();
    assert_eq!(board.winning_line(), None);
}

// =============================================================================
// Bookkeeping
// =============================================================================

#[test]
fn test_fill_count_tracks_marks() {
    let mut board = Board::new();
    let order = [(1, 1), (0, 0), (2, 2), (0, 2), (2, 0)];

    for (i, &(r, c)) in order.iter().enumerate() {
        let player = if i % 2 == 0 { Player::X } else { Player::O };
        board.mark(at(r, c), player).unwrap();
        assert_eq!(board.filled(), i + 1);
        assert_eq!(board.empty_cells().len(), 9 - (i + 1));
    }
    assert!(!board.is_empty());
    assert!(!board.is_full());
}

#[test]
fn test_remark_is_rejected_and_count_unchanged() {
    let mut board = Board::new();
    board.mark(at(1, 1), Player::X).unwrap();

    for player in Player::ALL {
        assert_eq!(
            board.mark(at(1, 1), player),
            Err(EngineError::CellOccupied { row: 1, col: 1 })
        );
    }

    assert_eq!(board.filled(), 1);
    assert_eq!(board.cell(at(1, 1)), Cell::Marked(Player::X));
}

#[test]
fn test_empty_cells_enumeration_order() {
    let board = Board::new();
    let cells: Vec<_> = board.empty_cells().iter().map(|c| c.index()).collect();
    assert_eq!(cells, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);

    let board: Board = "... .X. ..O".parse().unwrap();
    let cells: Vec<_> = board.empty_cells().iter().map(|c| c.index()).collect();
    assert_eq!(cells, vec![0, 1, 2, 3, 5, 6, 7]);
}

#[test]
fn test_full_and_empty_flags() {
    let mut board = Board::new();
    assert!(board.is_empty());

    for (i, coord) in Coord::all().enumerate() {
        let player = if i % 2 == 0 { Player::X } else { Player::O };
        board.mark(coord, player).unwrap();
    }

    assert!(board.is_full());
    assert!(board.empty_cells().is_empty());
}

#[test]
fn test_out_of_bounds_coordinates() {
    assert_eq!(
        Coord::new(3, 3),
        Err(EngineError::OutOfBounds { row: 3, col: 3 })
    );
    assert!(Coord::try_from((0, 5)).is_err());
}

#[test]
fn test_board_serialization() {
    let board: Board = "XO. .X. ..O".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let deserialized: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(board, deserialized);
    assert_eq!(deserialized.filled(), 4);
}

#[test]
fn test_deserialization_rejects_invalid_input() {
    assert!(serde_json::from_str::<Coord>("[7,7]").is_err());

    let board: Board = "X.. .O. ...".parse().unwrap();
    let mut value = serde_json::to_value(board).unwrap();
    value["filled"] = serde_json::json!(255);
    assert!(serde_json::from_value::<Board>(value.clone()).is_err());

    // A consistent count loads and stays markable.
    value["filled"] = serde_json::json!(2);
    let mut loaded: Board = serde_json::from_value(value).unwrap();
    loaded.mark(at(2, 2), Player::X).unwrap();
    assert_eq!(loaded.filled(), 3);
}
