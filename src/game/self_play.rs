//! Engine-vs-engine matches.
//!
//! Used to check the optimal policy end to end: two optimal engines must
//! draw, and an optimal engine must never lose to the random one.

use tracing::debug;

use crate::board::Board;
use crate::core::{EngineError, Player, Result};
use crate::search::DecisionEngine;

use super::record::{MatchRecord, MoveRecord};

/// Play a full game from the empty board, X moving first.
///
/// ## Errors
///
/// `PlayerMismatch` if `x_engine` does not play X or `o_engine` does not
/// play O.
pub fn play_match(x_engine: &mut DecisionEngine, o_engine: &mut DecisionEngine) -> Result<MatchRecord> {
    play_match_from(Board::new(), Player::X, x_engine, o_engine)
}

/// Play out a game from `board` with `to_move` on turn.
pub fn play_match_from(
    mut board: Board,
    mut to_move: Player,
    x_engine: &mut DecisionEngine,
    o_engine: &mut DecisionEngine,
) -> Result<MatchRecord> {
    for (engine, expected) in [(&*x_engine, Player::X), (&*o_engine, Player::O)] {
        if engine.player() != expected {
            return Err(EngineError::PlayerMismatch {
                expected,
                found: engine.player(),
            });
        }
    }

    let mut moves = Vec::new();
    let result = loop {
        if let Some(result) = board.terminal_line() {
            break result;
        }

        let engine = match to_move {
            Player::X => &mut *x_engine,
            Player::O => &mut *o_engine,
        };
        let coord = engine.select_move(&board)?;
        board.mark(coord, to_move)?;
        moves.push(MoveRecord {
            player: to_move,
            coord,
            move_number: moves.len(),
            by_engine: true,
        });
        to_move = to_move.opponent();
    };

    debug!(%result, moves = moves.len(), "match finished");
    Ok(MatchRecord { moves, result })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, EngineConfig};
    use crate::rules::GameResult;

    fn engine(player: Player, difficulty: Difficulty, seed: u64) -> DecisionEngine {
        DecisionEngine::new(
            EngineConfig::new()
                .with_player(player)
                .with_difficulty(difficulty)
                .with_seed(seed),
        )
    }

    #[test]
    fn test_optimal_self_play_draws() {
        let mut x = engine(Player::X, Difficulty::Optimal, 0);
        let mut o = engine(Player::O, Difficulty::Optimal, 0);

        let record = play_match(&mut x, &mut o).unwrap();

        assert_eq!(record.result, GameResult::Draw);
        assert_eq!(record.len(), 9);
        assert_eq!(record.moves[0].coord.index(), 0);
    }

    #[test]
    fn test_player_mismatch() {
        let mut x = engine(Player::O, Difficulty::Optimal, 0);
        let mut o = engine(Player::O, Difficulty::Optimal, 0);

        assert_eq!(
            play_match(&mut x, &mut o),
            Err(EngineError::PlayerMismatch {
                expected: Player::X,
                found: Player::O
            })
        );
    }

    #[test]
    fn test_play_from_decided_board() {
        let mut x = engine(Player::X, Difficulty::Random, 1);
        let mut o = engine(Player::O, Difficulty::Random, 2);
        let board: Board = "XXX OO. ...".parse().unwrap();

        let record = play_match_from(board, Player::O, &mut x, &mut o).unwrap();
        assert!(record.is_empty());
        assert_eq!(record.result, GameResult::Winner(Player::X));
    }
}
