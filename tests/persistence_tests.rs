//! Engine + score store working together, the way the runner drives them.

use std::env;
use std::fs;
use std::process;

use tui_2048::core::{Board, Game};
use tui_2048::store::ScoreStore;
use tui_2048::types::Direction;

fn temp_store(tag: &str) -> ScoreStore {
    let mut path = env::temp_dir();
    path.push(format!("tui-2048-persist-{}-{}", tag, process::id()));
    path.push("bestscore.dat");
    let _ = fs::remove_file(&path);
    ScoreStore::new(path)
}

#[test]
fn test_fresh_session_starts_from_stored_best() {
    let store = temp_store("fresh");
    store.save(80).unwrap();

    let game = Game::new(1).with_best_score(store.load());
    assert_eq!(game.best_score(), 80);

    let _ = fs::remove_file(store.path());
}

#[test]
fn test_reset_while_ahead_persists_best() {
    let store = temp_store("reset-ahead");
    store.save(80).unwrap();

    let mut game = Game::new(5).with_best_score(store.load());
    game.start();

    // Score 120 through controlled merges, then restart mid-game.
    for _ in 0..30 {
        game.board_mut().clear();
        game.board_mut().set_tile(0, 0, 2);
        game.board_mut().set_tile(1, 0, 2);
        game.update(Direction::Left);
    }
    assert_eq!(game.score(), 120);

    game.reset();
    if let Some(best) = game.take_best_score_update() {
        store.save(best).unwrap();
    }

    assert_eq!(store.load(), 120);
    assert_eq!(game.score(), 0);

    let _ = fs::remove_file(store.path());
}

#[test]
fn test_reset_while_behind_does_not_touch_store() {
    let store = temp_store("reset-behind");
    store.save(500).unwrap();

    let mut game = Game::new(5).with_best_score(store.load());
    game.start();
    game.reset();

    assert_eq!(game.take_best_score_update(), None);
    assert_eq!(store.load(), 500);

    let _ = fs::remove_file(store.path());
}

#[test]
fn test_game_over_persists_best() {
    let store = temp_store("game-over");

    let mut game = Game::new(3).with_best_score(store.load());
    game.start();
    assert_eq!(game.best_score(), 0);

    // Drive a session to its terminal state.
    *game.board_mut() = Board::from_rows([
        [2, 2, 4, 8],
        [4, 8, 16, 2],
        [8, 2, 4, 8],
        [2, 4, 8, 2],
    ]);
    let mut guard = 0;
    while !game.game_over() {
        for dir in Direction::ALL {
            game.update(dir);
        }
        guard += 1;
        assert!(guard < 10_000);
    }

    if let Some(best) = game.take_best_score_update() {
        store.save(best).unwrap();
    }
    assert_eq!(store.load(), game.best_score());
    assert!(store.load() > 0);

    let _ = fs::remove_file(store.path());
}
