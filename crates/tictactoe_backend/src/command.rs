//! Request/response calling convention between a UI shell and the backend.

use crate::config::BackendConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tictactoe_engine::{GameState, GameStateView, MoveError};

/// One call from the shell.
///
/// Encoded as `{"op": "makeMove", "index": 4}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Request {
    /// Start a new game.
    NewGame,
    /// Fetch the state to render on first draw.
    GetInitialState,
    /// Place the current player's mark.
    MakeMove {
        /// Cell index, 0-8 row-major.
        index: i64,
    },
    /// Start over.
    ResetGame,
}

/// Failure details reported to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorBody {
    /// `GameOverError`, `InvalidIndexError` or `CellOccupiedError`.
    pub kind: String,
    /// Human-readable message for display.
    pub message: String,
}

impl From<MoveError> for ErrorBody {
    fn from(err: MoveError) -> Self {
        Self {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

/// Outcome of a request: the state to render, or why nothing changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Response {
    /// The updated game state.
    State(GameStateView),
    /// The request was rejected and the state is unchanged.
    Error {
        /// What went wrong.
        error: ErrorBody,
    },
}

impl Response {
    /// True if the request was rejected.
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}

impl From<GameState> for Response {
    fn from(state: GameState) -> Self {
        Response::State(state.into())
    }
}

impl From<MoveError> for Response {
    fn from(err: MoveError) -> Self {
        Response::Error { error: err.into() }
    }
}

impl From<Result<GameState, MoveError>> for Response {
    fn from(result: Result<GameState, MoveError>) -> Self {
        match result {
            Ok(state) => state.into(),
            Err(err) => err.into(),
        }
    }
}

/// Serializes a value for stdout, pretty-printed if configured.
pub fn to_json<T: Serialize>(value: &T, config: &BackendConfig) -> serde_json::Result<String> {
    if *config.pretty_json() {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_encoding() {
        let req: Request = serde_json::from_value(json!({"op": "makeMove", "index": 7}))
            .expect("valid request");
        assert_eq!(req, Request::MakeMove { index: 7 });

        let req: Request =
            serde_json::from_value(json!({"op": "getInitialState"})).expect("valid request");
        assert_eq!(req, Request::GetInitialState);

        assert!(serde_json::from_value::<Request>(json!({"op": "undo"})).is_err());
    }

    #[test]
    fn test_error_response_encoding() {
        let resp = Response::from(MoveError::GameOver);
        assert_eq!(
            serde_json::to_value(&resp).expect("serialize"),
            json!({"error": {"kind": "GameOverError", "message": "game is over"}})
        );
        assert!(resp.is_error());
    }
}
