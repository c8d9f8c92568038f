//! The serialized GameState is the contract front ends render from.

use serde_json::json;
use tictactoe_engine::{GameEngine, GameState, GameStateView, Player};

#[test]
fn test_initial_state_shape() {
    let value = serde_json::to_value(GameState::new()).expect("serialize");
    assert_eq!(
        value,
        json!({
            "board": ["", "", "", "", "", "", "", "", ""],
            "currentPlayer": "X",
            "winner": "",
            "gameOver": false,
        })
    );
}

#[test]
fn test_in_progress_shape() {
    let mut engine = GameEngine::new();
    engine.make_move(1).expect("legal move");
    let state = engine.make_move(2).expect("legal move");

    let value = serde_json::to_value(state).expect("serialize");
    assert_eq!(value["board"], json!(["", "X", "O", "", "", "", "", "", ""]));
    assert_eq!(value["currentPlayer"], "X");
    assert_eq!(value["winner"], "");
    assert_eq!(value["gameOver"], false);
    assert_eq!(value.as_object().map(|o| o.len()), Some(4));
}

#[test]
fn test_won_and_drawn_shapes() {
    let mut engine = GameEngine::new();
    let mut state = engine.state();
    for index in [0, 3, 1, 4, 2] {
        state = engine.make_move(index).expect("legal move");
    }
    let value = serde_json::to_value(state).expect("serialize");
    assert_eq!(value["winner"], "X");
    assert_eq!(value["gameOver"], true);
    assert_eq!(value["currentPlayer"], "X");

    engine.reset_game();
    for index in [0, 1, 2, 4, 3, 6, 5, 8, 7] {
        state = engine.make_move(index).expect("legal move");
    }
    let value = serde_json::to_value(state).expect("serialize");
    assert_eq!(value["winner"], "draw");
    assert_eq!(value["gameOver"], true);
}

#[test]
fn test_decodes_front_end_record() {
    let state: GameState = serde_json::from_value(json!({
        "board": ["X", "", "", "", "O", "", "", "", ""],
        "currentPlayer": "X",
        "winner": "",
        "gameOver": false,
    }))
    .expect("valid record");

    assert_eq!(state.current_player(), Player::X);
    assert_eq!(state.valid_moves().len(), 7);
}

#[test]
fn test_rejects_malformed_records() {
    let wrong_length = json!({
        "board": ["", "", ""],
        "currentPlayer": "X",
        "winner": "",
        "gameOver": false,
    });
    assert!(serde_json::from_value::<GameState>(wrong_length).is_err());

    let bad_player = json!({
        "board": ["", "", "", "", "", "", "", "", ""],
        "currentPlayer": "Z",
        "winner": "",
        "gameOver": false,
    });
    assert!(serde_json::from_value::<GameState>(bad_player).is_err());

    let snake_case = json!({
        "board": ["", "", "", "", "", "", "", "", ""],
        "current_player": "X",
        "winner": "",
        "game_over": false,
    });
    assert!(serde_json::from_value::<GameState>(snake_case).is_err());
}

#[test]
fn test_view_matches_state_serialization() {
    let mut engine = GameEngine::new();
    let state = engine.make_move(4).expect("legal move");

    let via_view = serde_json::to_value(GameStateView::from(state)).expect("serialize view");
    let direct = serde_json::to_value(state).expect("serialize state");
    assert_eq!(via_view, direct);
}
