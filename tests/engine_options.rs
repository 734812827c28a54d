//! Option handling through the public engine surface.

use std::time::Duration;

use chess_search::{Engine, EngineOptions, EngineOptionsUpdate, OptionError};

#[test]
fn defaults_match_documented_values() {
    let options = Engine::new().options();
    assert_eq!(options, EngineOptions::default());
    assert_eq!(options.depth, 3);
    assert_eq!(options.skill_level, 10);
    assert_eq!(options.time_limit, Duration::from_secs(1));
}

#[test]
fn partial_updates_keep_other_fields() {
    let engine = Engine::new();
    engine.set_options(EngineOptionsUpdate::default().depth(6));
    engine.set_options(EngineOptionsUpdate::default().use_opening(false));

    let options = engine.options();
    assert_eq!(options.depth, 6);
    assert!(!options.use_opening);
    assert!(options.use_endgame);
    assert_eq!(options.skill_level, 10);
}

#[test]
fn named_options() {
    let engine = Engine::new();
    engine.set_option("Depth", "4").unwrap();
    engine.set_option("Skill Level", "25").unwrap();
    engine.set_option("Thinking Delay", "15").unwrap();

    let options = engine.options();
    assert_eq!(options.depth, 4);
    assert_eq!(options.skill_level, 20);
    assert_eq!(options.thinking_delay, Some(Duration::from_millis(15)));

    assert_eq!(
        engine.set_option("Threads", "4"),
        Err(OptionError::UnknownOption {
            name: "Threads".to_string()
        })
    );
    assert!(engine.set_option("Depth", "-1").is_err());
    assert_eq!(engine.options().depth, 4);
}

#[cfg(feature = "serde")]
mod serde_config {
    use super::*;
    use chess_search::{Board, Color};

    #[test]
    fn options_round_trip_through_json() {
        let mut options = EngineOptions::default();
        options.depth = 5;
        options.thinking_delay = Some(Duration::from_millis(3));
        let json = serde_json::to_string(&options).unwrap();
        let back: EngineOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn sparse_json_update_merges() {
        let update: EngineOptionsUpdate =
            serde_json::from_str(r#"{ "depth": 2, "skill_level": 20 }"#).unwrap();
        let engine = Engine::new();
        engine.set_options(update);
        let options = engine.options();
        assert_eq!(options.depth, 2);
        assert_eq!(options.skill_level, 20);
        assert_eq!(options.time_limit, Duration::from_secs(1));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let options: EngineOptions = serde_json::from_str(r#"{ "use_endgame": false }"#).unwrap();
        assert!(!options.use_endgame);
        assert_eq!(options.depth, 3);
    }

    #[test]
    fn move_evaluations_serialize() {
        let engine = Engine::with_seed(1);
        let results = engine.evaluate_moves(&Board::new(), Color::White, Some(1));
        let json = serde_json::to_value(&results[0]).unwrap();
        assert_eq!(json["depth"], 1);
        assert!(json["best_line"].is_array());
    }
}
