//! Exhaustive minimax with alpha-beta pruning.
//!
//! ## Value Convention
//!
//! One player is the *maximizer* and the other the *minimizer*. A board
//! where the maximizer has a line is worth `+1`, one where the minimizer
//! has a line is worth `-1`, and a full board without a line is worth `0`.
//! There is no depth discount: a win in one ply and a forced win in five
//! are worth the same.
//!
//! ## Tie-Break
//!
//! Children are visited in `Board::empty_cells` order (row-major), and a
//! child only replaces the running best when it is strictly better. Among
//! equally valued moves the search therefore returns the one with the
//! lowest row-major index.
//!
//! ## Copies
//!
//! `Board` is `Copy`; every branch works on its own value and the board the
//! search was started from is never modified.

use crate::board::{Board, Coord};
use crate::core::Player;

use super::stats::SearchStats;

/// Value of a board won by the maximizer.
pub const WIN: i8 = 1;
/// Value of a drawn board.
pub const DRAW: i8 = 0;
/// Value of a board won by the minimizer.
pub const LOSS: i8 = -1;

/// Lower window bound. Below every reachable value.
pub const NEG_INF: i8 = i8::MIN;
/// Upper window bound. Above every reachable value.
pub const POS_INF: i8 = i8::MAX;

/// Which player fills which search role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roles {
    /// Player whose lines score `+1`.
    pub maximizer: Player,
    /// Player whose lines score `-1`.
    pub minimizer: Player,
}

impl Roles {
    /// Roles for an engine moving as `player`.
    ///
    /// The engine is the minimizer, so its own candidate moves are scored
    /// at the root and each reply is searched as the maximizer one ply
    /// down.
    #[must_use]
    pub const fn for_engine(player: Player) -> Self {
        Self {
            maximizer: player.opponent(),
            minimizer: player,
        }
    }

    /// Player to move for the given role flag.
    #[must_use]
    pub const fn mover(self, maximizing: bool) -> Player {
        if maximizing {
            self.maximizer
        } else {
            self.minimizer
        }
    }
}

/// Outcome of searching one position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Backed-up value (`LOSS`, `DRAW`, or `WIN`).
    pub value: i8,
    /// Move that produced `value`. `None` for terminal positions.
    pub best_move: Option<Coord>,
}

impl Evaluation {
    const fn leaf(value: i8) -> Self {
        Self {
            value,
            best_move: None,
        }
    }
}

/// Search `board` with the window (`alpha`, `beta`).
///
/// `maximizing` says which role is to move. The engine's top-level call is
/// `search(board, NEG_INF, POS_INF, false, Roles::for_engine(player), ..)`.
pub fn search(
    board: Board,
    alpha: i8,
    beta: i8,
    maximizing: bool,
    roles: Roles,
    stats: &mut SearchStats,
) -> Evaluation {
    search_at(board, alpha, beta, maximizing, roles, 0, stats)
}

fn search_at(
    board: Board,
    mut alpha: i8,
    mut beta: i8,
    maximizing: bool,
    roles: Roles,
    depth: u8,
    stats: &mut SearchStats,
) -> Evaluation {
    stats.nodes += 1;
    stats.max_depth = stats.max_depth.max(depth);

    match board.winning_line() {
        Some((_, winner)) => {
            stats.terminal_nodes += 1;
            let value = if winner == roles.maximizer { WIN } else { LOSS };
            return Evaluation::leaf(value);
        }
        None if board.is_full() => {
            stats.terminal_nodes += 1;
            return Evaluation::leaf(DRAW);
        }
        None => {}
    }

    let mover = roles.mover(maximizing);
    let mut best = Evaluation::leaf(if maximizing { NEG_INF } else { POS_INF });

    for coord in board.empty_cells() {
        let child = board.with_mark(coord, mover);
        let value = search_at(child, alpha, beta, !maximizing, roles, depth + 1, stats).value;

        if maximizing {
            if value > best.value {
                best = Evaluation {
                    value,
                    best_move: Some(coord),
                };
            }
            alpha = alpha.max(value);
        } else {
            if value < best.value {
                best = Evaluation {
                    value,
                    best_move: Some(coord),
                };
            }
            beta = beta.min(value);
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    best
}
