//! Move policies for the automated player.
//!
//! Policies are trait-based so the engine can switch between them at any
//! time without rebuilding anything:
//! - `RandomPolicy`: uniform over empty cells
//! - `MinimaxPolicy`: exhaustive alpha-beta search

use std::time::Instant;

use crate::board::{Board, Coord};
use crate::core::{GameRng, Player};

use super::minimax::{search, Evaluation, Roles, NEG_INF, POS_INF};
use super::stats::SearchStats;

/// Policy for choosing a move on behalf of `player`.
pub trait MovePolicy: Send + Sync {
    /// Choose an empty cell to mark.
    ///
    /// Returns `None` if the policy has no move to offer.
    fn select(&mut self, board: &Board, player: Player, rng: &mut GameRng) -> Option<Coord>;
}

/// Uniform random policy.
///
/// Every empty cell is equally likely. The board's terminal state is not
/// consulted.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn select(&mut self, board: &Board, _player: Player, rng: &mut GameRng) -> Option<Coord> {
        rng.choose(&board.empty_cells()).copied()
    }
}

/// Optimal policy: minimax with alpha-beta pruning.
///
/// Deterministic; keeps the statistics of its most recent search.
#[derive(Clone, Debug, Default)]
pub struct MinimaxPolicy {
    stats: SearchStats,
}

impl MinimaxPolicy {
    /// Create a new minimax policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `board` with `player` to move as the minimizer.
    pub fn evaluate(&mut self, board: &Board, player: Player) -> Evaluation {
        let start = Instant::now();
        self.stats.reset();

        let eval = search(
            *board,
            NEG_INF,
            POS_INF,
            false,
            Roles::for_engine(player),
            &mut self.stats,
        );

        self.stats.time_us = start.elapsed().as_micros() as u64;
        eval
    }

    /// Statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

impl MovePolicy for MinimaxPolicy {
    fn select(&mut self, board: &Board, player: Player, _rng: &mut GameRng) -> Option<Coord> {
        self.evaluate(board, player).best_move
    }
}
