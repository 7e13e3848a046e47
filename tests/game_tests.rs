//! Game orchestration tests: human moves, engine turns, resets.

use rust_ttt::board::{Coord, Line};
use rust_ttt::core::{Difficulty, EngineConfig, EngineError, GameConfig, GameMode, Player};
use rust_ttt::game::{Game, GameStatus};
use rust_ttt::rules::GameResult;

fn at(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

/// Human plays `moves` in order, letting the engine answer after each.
fn play_against_engine(game: &mut Game, moves: &[(usize, usize)]) -> Vec<Coord> {
    let mut replies = Vec::new();
    for &(r, c) in moves {
        if game.is_over() {
            break;
        }
        game.make_move(at(r, c)).unwrap();
        while game.is_engine_turn() {
            replies.push(game.play_engine_turn().unwrap());
        }
    }
    replies
}

#[test]
fn test_engine_answers_each_human_move() {
    let mut game = Game::default();
    let replies = play_against_engine(&mut game, &[(0, 0)]);

    assert_eq!(replies, vec![at(1, 1)]);
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.history().len(), 2);
    assert!(!game.history()[0].by_engine);
    assert!(game.history()[1].by_engine);
}

#[test]
fn test_engine_punishes_blunder() {
    let mut game = Game::default();
    // X ignores O's threat on row 1 to build its own on row 0.
    let replies = play_against_engine(&mut game, &[(0, 0), (2, 1), (0, 2), (1, 0), (2, 2)]);

    assert_eq!(replies, vec![at(1, 1), at(1, 0), at(1, 2)]);
    assert_eq!(
        game.status(),
        GameStatus::Over(GameResult::Winner(Player::O))
    );
    assert_eq!(game.winning_line(), Some((Line::Row(1), Player::O)));
}

#[test]
fn test_engine_moves_first_when_playing_x() {
    let config = GameConfig::new().with_engine(EngineConfig::new().with_player(Player::X));
    let mut game = Game::new(config);

    assert!(game.is_engine_turn());
    let opening = game.play_engine_turn().unwrap();
    assert_eq!(opening, at(0, 0));
    assert!(!game.is_engine_turn());
}

#[test]
fn test_first_player_opens_after_reset() {
    // O opens and the engine plays O, so the engine moves first.
    let config = GameConfig::new().with_first_player(Player::O);
    let mut game = Game::new(config);

    assert_eq!(game.current_player(), Player::O);
    assert_eq!(game.play_engine_turn().unwrap(), at(0, 0));
    assert_eq!(game.history()[0].player, Player::O);
    assert_eq!(game.current_player(), Player::X);

    game.reset();
    assert_eq!(game.current_player(), Player::O);
    assert!(game.is_engine_turn());
}

#[test]
fn test_human_cannot_move_after_game_over() {
    let mut game = Game::new(GameConfig::new().with_mode(GameMode::PlayerVsPlayer));
    for (r, c) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
        game.make_move(at(r, c)).unwrap();
    }

    assert_eq!(
        game.status(),
        GameStatus::Over(GameResult::Winner(Player::X))
    );
    assert_eq!(game.winning_line(), Some((Line::Diagonal, Player::X)));
    assert_eq!(game.make_move(at(2, 0)), Err(EngineError::GameOver));
    assert!(!game.is_engine_turn());
}

#[test]
fn test_engine_mode_toggle_mid_game() {
    let mut game = Game::new(GameConfig::new().with_mode(GameMode::PlayerVsPlayer));
    game.make_move(at(1, 1)).unwrap();
    assert!(!game.is_engine_turn());

    assert_eq!(game.toggle_mode(), GameMode::PlayerVsEngine);
    assert!(game.is_engine_turn());
    game.play_engine_turn().unwrap();

    assert_eq!(game.toggle_mode(), GameMode::PlayerVsPlayer);
    assert!(!game.is_engine_turn());
}

#[test]
fn test_difficulty_change_keeps_board() {
    let mut game = Game::default();
    let _ = play_against_engine(&mut game, &[(0, 0)]);
    let before = *game.board();

    game.set_difficulty(Difficulty::Random);

    assert_eq!(*game.board(), before);
    assert_eq!(game.engine().difficulty(), Difficulty::Random);
}

#[test]
fn test_reset_after_game_over() {
    let mut game = Game::default();
    let _ = play_against_engine(&mut game, &[(0, 0), (2, 1), (0, 2), (1, 0), (2, 2)]);
    assert!(game.is_over());

    game.reset();

    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.board().is_empty());
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.mode(), GameMode::PlayerVsEngine);
    assert_eq!(game.engine().player(), Player::O);
}

#[test]
fn test_random_engine_game_finishes() {
    let config = GameConfig::new().with_engine(
        EngineConfig::new()
            .with_difficulty(Difficulty::Random)
            .with_seed(5),
    );
    let mut game = Game::new(config);

    // Human always takes the first free cell.
    while !game.is_over() {
        let first = game.board().empty_cells()[0];
        game.make_move(first).unwrap();
        while game.is_engine_turn() {
            game.play_engine_turn().unwrap();
        }
    }

    assert!(game.board().is_terminal());
    assert_eq!(game.history().len(), game.board().filled());
}
