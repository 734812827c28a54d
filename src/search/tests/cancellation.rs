use std::thread;
use std::time::{Duration, Instant};

use crate::board::{Board, Color};
use crate::engine::{Engine, EngineOptionsUpdate};

/// Engine that would take minutes to finish: every interior node sleeps.
fn slow_engine() -> Engine {
    let engine = Engine::with_seed(0);
    engine.set_options(
        EngineOptionsUpdate::default()
            .depth(5)
            .skill_level(20)
            .thinking_delay(Some(Duration::from_millis(2))),
    );
    engine
}

fn stop_once_thinking(engine: &Engine) {
    while !engine.is_thinking() {
        thread::yield_now();
    }
    thread::sleep(Duration::from_millis(20));
    engine.stop_thinking();
}

#[test]
fn test_stop_thinking_returns_a_legal_move() {
    let engine = slow_engine();
    let board = Board::new();
    let started = Instant::now();

    let result = thread::scope(|s| {
        s.spawn(|| stop_once_thinking(&engine));
        engine.best_move(&board, Color::White)
    });

    let mv = result.unwrap();
    assert!(board.legal_moves().contains(&mv));
    assert!(started.elapsed() < Duration::from_secs(10));
    assert!(!engine.is_thinking());
}

#[test]
fn test_stop_handle_from_another_thread() {
    let engine = slow_engine();
    let handle = engine.stop_handle();
    let board = Board::new();

    let result = thread::scope(|s| {
        s.spawn(|| {
            while !handle.is_thinking() {
                thread::yield_now();
            }
            thread::sleep(Duration::from_millis(20));
            handle.stop();
        });
        engine.best_move(&board, Color::White)
    });
    assert!(result.is_ok());
}

#[test]
fn test_stopped_batch_is_partial() {
    let engine = slow_engine();
    let board = Board::new();

    let results = thread::scope(|s| {
        s.spawn(|| stop_once_thinking(&engine));
        engine.evaluate_moves(&board, Color::White, Some(5))
    });
    assert!(results.len() <= 20);
    assert!(!engine.is_thinking());
}

#[test]
fn test_engine_reusable_after_stop() {
    let engine = slow_engine();
    let board = Board::new();
    thread::scope(|s| {
        s.spawn(|| stop_once_thinking(&engine));
        engine.best_move(&board, Color::White).unwrap();
    });

    engine.set_options(EngineOptionsUpdate::default().depth(1).thinking_delay(None));
    let board = Board::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
    assert_eq!(engine.best_move(&board, Color::White).unwrap().to_string(), "d2d5");
}
