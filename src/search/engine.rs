//! The decision engine: picks the automated player's move.
//!
//! Holds the configured difficulty and player plus the state the policies
//! need (a seeded RNG for `Random`, search statistics for `Optimal`).
//! Nothing carries over between calls that would change the answer: the
//! optimal move is re-derived from the given board every time.

use tracing::debug;

use crate::board::{Board, Coord};
use crate::core::{Difficulty, EngineConfig, EngineError, GameRng, GameRngState, Player, Result};

use super::minimax::Evaluation;
use super::policy::{MinimaxPolicy, MovePolicy, RandomPolicy};
use super::stats::SearchStats;

/// Automated opponent.
///
/// ```
/// use rust_ttt::board::{Board, Coord};
/// use rust_ttt::core::EngineConfig;
/// use rust_ttt::search::DecisionEngine;
///
/// let mut engine = DecisionEngine::new(EngineConfig::default());
/// let board: Board = "XX. OO. X..".parse().unwrap();
///
/// // O completes the middle row.
/// assert_eq!(engine.select_move(&board).unwrap(), Coord::new(1, 2).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct DecisionEngine {
    config: EngineConfig,
    rng: GameRng,
    random: RandomPolicy,
    minimax: MinimaxPolicy,
}

impl DecisionEngine {
    /// Create an engine from its configuration.
    pub fn new(config: EngineConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            random: RandomPolicy,
            minimax: MinimaxPolicy::new(),
        }
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// Change the difficulty. Takes effect on the next `select_move`.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    /// Player the engine moves for.
    #[must_use]
    pub fn player(&self) -> Player {
        self.config.player
    }

    /// Statistics of the last optimal search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        self.minimax.stats()
    }

    /// Snapshot of the random policy's RNG.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Restore the random policy's RNG from a snapshot.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    /// Choose the engine's move on `board`.
    ///
    /// ## Errors
    ///
    /// - `BoardFull` if there is no empty cell
    /// - `NoMoveFound` if the optimal search is handed a board that is
    ///   already won
    pub fn select_move(&mut self, board: &Board) -> Result<Coord> {
        if board.is_full() {
            return Err(EngineError::BoardFull);
        }

        let player = self.config.player;
        let coord = match self.config.difficulty {
            Difficulty::Random => {
                let coord = self
                    .random
                    .select(board, player, &mut self.rng)
                    .ok_or(EngineError::NoMoveFound)?;
                debug!(%player, %coord, "random move");
                coord
            }
            Difficulty::Optimal => {
                let coord = self
                    .minimax
                    .select(board, player, &mut self.rng)
                    .ok_or(EngineError::NoMoveFound)?;
                let stats = self.minimax.stats();
                debug!(
                    %player,
                    %coord,
                    nodes = stats.nodes,
                    cutoffs = stats.cutoffs,
                    nodes_per_sec = stats.nodes_per_second(),
                    "optimal move"
                );
                coord
            }
        };
        Ok(coord)
    }

    /// Run the optimal search and return its value alongside the move.
    ///
    /// Values are from the search's fixed convention: `-1` means the
    /// engine can force a win, `+1` that its opponent can.
    pub fn evaluate(&mut self, board: &Board) -> Result<Evaluation> {
        if board.is_full() {
            return Err(EngineError::BoardFull);
        }
        Ok(self.minimax.evaluate(board, self.config.player))
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
