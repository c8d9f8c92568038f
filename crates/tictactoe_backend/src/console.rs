//! Line-oriented console driver for the backend.
//!
//! Stands in for a desktop shell: reads one command per line, sends it
//! through [`App::dispatch`], and renders the response.

use crate::app::App;
use crate::command::{Request, Response};
use crate::config::BackendConfig;
use std::io::{BufRead, Write};
use tictactoe_engine::{GameState, GameStatus, Position};
use tracing::{debug, instrument};

const HELP: &str = "Commands: 0-8 or a cell name (e.g. center) to move, \
                    n = new game, r = reset, h = help, q = quit";

/// A parsed line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    /// Forward to the backend.
    Request(Request),
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
    /// Nothing typed.
    Blank,
    /// Not a command.
    Unknown(String),
}

impl ConsoleInput {
    /// Parses one line of input.
    ///
    /// Numbers are passed through unchecked so the engine reports
    /// out-of-range indices itself.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "" => ConsoleInput::Blank,
            "q" | "quit" | "exit" => ConsoleInput::Quit,
            "h" | "help" | "?" => ConsoleInput::Help,
            "n" | "new" => ConsoleInput::Request(Request::NewGame),
            "r" | "reset" => ConsoleInput::Request(Request::ResetGame),
            other => {
                if let Ok(index) = other.parse::<i64>() {
                    return ConsoleInput::Request(Request::MakeMove { index });
                }
                match Position::from_label_or_number(other) {
                    Some(pos) => ConsoleInput::Request(Request::MakeMove {
                        index: pos.to_index() as i64,
                    }),
                    None => ConsoleInput::Unknown(trimmed.to_string()),
                }
            }
        }
    }
}

/// One-line summary of whose turn it is or how the game ended.
pub fn status_line(state: &GameState) -> String {
    match state.status() {
        GameStatus::InProgress => format!("{} to move", state.current_player()),
        GameStatus::Won(player) => format!("{player} wins! (n for a new game)"),
        GameStatus::Draw => "Draw! (n for a new game)".to_string(),
    }
}

fn render(out: &mut impl Write, state: &GameState, config: &BackendConfig) -> std::io::Result<()> {
    writeln!(out, "{}", state.board().display(*config.board_hints()))?;
    writeln!(out, "{}", status_line(state))
}

/// Runs an interactive session until `q` or end of input.
///
/// Rejected moves print the error and leave the board as it was.
#[instrument(skip_all)]
pub fn run(
    app: &mut App,
    config: &BackendConfig,
    input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<()> {
    writeln!(output, "{HELP}")?;
    render(&mut output, &app.get_initial_state(), config)?;

    for line in input.lines() {
        let line = line?;
        let parsed = ConsoleInput::parse(&line);
        debug!(?parsed, "Console input");
        match parsed {
            ConsoleInput::Quit => break,
            ConsoleInput::Blank => continue,
            ConsoleInput::Help => writeln!(output, "{HELP}")?,
            ConsoleInput::Unknown(text) => {
                writeln!(output, "Unknown command {text:?}. {HELP}")?;
            }
            ConsoleInput::Request(request) => match app.dispatch(request) {
                Response::Error { error } => writeln!(output, "Error: {}", error.message)?,
                Response::State(_) => render(&mut output, &app.get_initial_state(), config)?,
            },
        }
    }
    output.flush()?;
    Ok(())
}
