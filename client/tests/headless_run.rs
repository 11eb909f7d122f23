use std::io::Write;

use client::{LocalGame, Script, ScriptedInput};
use game_core::{Config, MatchState};

#[test]
fn test_scripted_match_from_files() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(config_file, r#"{{ "win_score": 3, "puck_max_speed": 16.0 }}"#).unwrap();

    let mut script_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        script_file,
        r#"{{ "events": [
            {{ "at": 0.5, "key": "Space" }},
            {{ "at": 0.6, "key": "Space", "down": false }},
            {{ "at": 1.0, "key": "w" }},
            {{ "at": 1.0, "key": "ArrowDown" }}
        ] }}"#
    )
    .unwrap();

    let config = Config::load(config_file.path()).unwrap();
    let script = Script::load(script_file.path()).unwrap();
    let mut game = LocalGame::new(config, 99, Box::new(ScriptedInput::new(script))).unwrap();

    // Nothing happens before the start key
    let report = game.frame(0.25);
    assert_eq!(report.state, MatchState::Waiting);
    assert_eq!(report.fixed_steps, 0);

    game.run(3600.0, 60.0);

    assert_eq!(game.controller.state(), MatchState::GameOver);
    let score = game.controller.score();
    assert_eq!(score.player1.max(score.player2), 3);
    assert!(game.hud.borrow().status.visible());

    // Paddles were held at opposite ends by the script
    let p1 = game.controller.paddle(game_core::Side::Player1).unwrap();
    let p2 = game.controller.paddle(game_core::Side::Player2).unwrap();
    assert!(p1.position >= 0.0);
    assert!(p2.position <= 0.0);
}

#[test]
fn test_bad_config_file_is_rejected() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(config_file, r#"{{ "paddle_speed": 0.0 }}"#).unwrap();

    assert!(Config::load(config_file.path()).is_err());
}
